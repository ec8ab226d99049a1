use crate::utils::config::{Language, DEFAULT_LAPS_TO_FINISH};
use std::path::PathBuf;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Race timing log to read
    pub logfile: PathBuf,

    /// Lap number that finishes the race
    pub laps: u32,

    /// Write the text summary here instead of stdout
    pub output: Option<PathBuf>,

    /// Also write a JSON summary here
    pub json: Option<PathBuf>,

    /// Report section header language
    pub language: Language,

    /// Print the normalised event log before the report
    pub include_events: bool,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            logfile: PathBuf::new(),
            laps: DEFAULT_LAPS_TO_FINISH,
            output: None,
            json: None,
            language: Language::default(),
            include_events: true,
        }
    }
}

/// Outcome of parsing a log without aggregating it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub events: usize,
    pub pilots: usize,
}
