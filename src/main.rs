//! Race Summary CLI
//!
//! Reads a kart lap timing log and prints the race summary: finishing
//! order, best laps, average speeds and gaps to the winner.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use race_summary::commands::{check_log_file, execute_summarize, validate_args, SummarizeArgs};
use race_summary::utils::config::{Language, DEFAULT_LAPS_TO_FINISH, SUMMARY_SCHEMA_VERSION};

/// Race Summary - lap timing log reports
#[derive(Parser, Debug)]
#[command(name = "race-summary")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the event log and race summary
    Summarize {
        /// Race log file
        #[arg(short, long)]
        logfile: PathBuf,

        /// Lap number that finishes the race
        #[arg(short = 'c', long, env = "RACE_LAPS", default_value_t = DEFAULT_LAPS_TO_FINISH)]
        laps: u32,

        /// Write the summary to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a JSON summary to this file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Language for report section headers
        #[arg(long, value_enum, default_value_t = Language::English)]
        lang: Language,

        /// Skip the normalised event log and print only the report
        #[arg(long)]
        no_events: bool,
    },

    /// Parse a race log and report how many lap events it holds
    Check {
        /// Race log file
        #[arg(short, long)]
        logfile: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Summarize {
            logfile,
            laps,
            output,
            json,
            lang,
            no_events,
        } => {
            let args = SummarizeArgs {
                logfile,
                laps,
                output,
                json,
                language: lang,
                include_events: !no_events,
            };

            // Validate args first
            validate_args(&args)?;

            execute_summarize(&args)?;
        }

        Commands::Check { logfile } => {
            println!("Checking race log: {}", logfile.display());

            let report = check_log_file(&logfile)?;

            println!("✓ Valid race log");
            println!("  Lap events: {}", report.events);
            println!("  Pilots: {}", report.pilots);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Race Summary v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SUMMARY_SCHEMA_VERSION);
    println!();
    println!("Race summaries from kart lap timing logs.");
}
