//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Reads the race log
//! 2. Starts a race and ingests the log
//! 3. Prints or writes the event log and the report
//! 4. Optionally writes a JSON summary

use super::models::SummarizeArgs;
use crate::aggregator::RaceAggregator;
use crate::output::{write_lines, write_summary, RaceSummaryDocument};
use crate::parser::{LineParser, RaceOptions};
use crate::utils::config::ReportLabels;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Log file cannot be read
/// * A matched lap line has an unconvertible field
/// * Output files cannot be written
pub fn execute_summarize(args: &SummarizeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Race log file: '{}'", args.logfile.display());

    let lines = summarize(args)?;

    match &args.output {
        Some(path) => write_lines(&lines, path).context("Failed to write text summary")?,
        None => lines.iter().for_each(|line| println!("{}", line)),
    }

    let elapsed = start_time.elapsed();
    debug!("Summary completed in {:.3}s", elapsed.as_secs_f64());

    Ok(())
}

/// Build the summary lines, writing the JSON document if requested
///
/// **Public** - lets callers reuse the pipeline without printing
pub fn summarize(args: &SummarizeArgs) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(&args.logfile)
        .with_context(|| format!("Failed to read log file {}", args.logfile.display()))?;

    let mut race = RaceAggregator::new(LineParser::new());
    race.start(RaceOptions::with_laps(args.laps));

    let count = race.ingest(&raw).context("Failed to parse race log")?;
    info!(
        "Ingested {} lap events from {} pilots",
        count,
        race.pilots().len()
    );

    if let Some(json_path) = &args.json {
        let document = RaceSummaryDocument::from_race(&race);
        write_summary(&document, json_path).context("Failed to write JSON summary")?;
        info!("✓ JSON summary written to: {}", json_path.display());
    }

    let mut lines = Vec::new();
    if args.include_events {
        lines.extend(race.raw_event_log());
    }
    lines.extend(race.report_with(&ReportLabels::for_language(args.language)));

    Ok(lines)
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.laps == 0 {
        anyhow::bail!("laps must be greater than 0");
    }

    if args.logfile.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    if !args.logfile.is_file() {
        anyhow::bail!("Log file not found: {}", args.logfile.display());
    }

    Ok(())
}
