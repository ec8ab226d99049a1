//! Check command implementation.
//!
//! Parses a race log without aggregating it, to confirm every lap line
//! converts cleanly.

use super::models::CheckReport;
use crate::parser::LineParser;
use anyhow::{Context, Result};
use log::warn;
use std::collections::HashSet;
use std::path::Path;

/// Parse a log file and count its lap events and pilots
///
/// **Public** - main entry point called from main.rs
pub fn check_log_file(path: &Path) -> Result<CheckReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file {}", path.display()))?;

    let events = LineParser::new()
        .parse(&raw)
        .with_context(|| format!("Invalid lap line in {}", path.display()))?;

    if events.is_empty() {
        warn!("No lap events found in {}", path.display());
    }

    let pilots: HashSet<&str> = events.iter().map(|e| e.pilot.id.as_str()).collect();

    Ok(CheckReport {
        events: events.len(),
        pilots: pilots.len(),
    })
}
