//! Lap log line parser.
//!
//! Extracts lap events from raw timing logs with a single pattern applied
//! over the whole text, and renders events and ranking entries back into
//! canonical tab-separated lines.

use super::format::{
    parse_duration, parse_number, parse_time, serialize_duration, serialize_number,
    serialize_time,
};
use super::schema::{LapEvent, Pilot, RankingEntry};
use crate::utils::config::{NOT_ESTIMATED_TEXT, PILOT_SEPARATOR};
use crate::utils::error::ParseError;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Time, pilot code, name, lap number, lap duration and average speed,
/// separated by runs of spaces or tabs. The code and name are joined by
/// an en/em dash.
static LAP_LOG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d+:\d+:\d+\.\d+)[ \t]+(\d+)[ \t–—-]+(\S+)[ \t]+(\d+)[ \t]+((?:\d+:)?\d+\.\d+)[ \t]+([\d,]+)",
    )
    .expect("lap log pattern is valid")
});

/// Converts raw timing logs into [`LapEvent`]s and back
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl LineParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every lap event found in `raw`, in the order they appear.
    ///
    /// Lines that do not match the lap pattern (headers, blank lines) are
    /// skipped. A line that matches but carries an unconvertible field
    /// fails the whole call.
    ///
    /// # Errors
    /// * `ParseError::InvalidTime` - timestamp is not a valid time of day
    /// * `ParseError::InvalidDuration` - lap duration cannot be read
    /// * `ParseError::InvalidNumber` - average speed is not a decimal
    /// * `ParseError::InvalidPilotCode` / `InvalidLapNumber` - integer overflow
    pub fn parse(&self, raw: &str) -> Result<Vec<LapEvent>, ParseError> {
        let events = LAP_LOG_PATTERN
            .captures_iter(raw)
            .map(|caps| parse_captures(&caps))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed {} lap events", events.len());

        Ok(events)
    }

    /// Render a lap event as a canonical tab-separated line
    pub fn serialize_lap(&self, event: &LapEvent) -> String {
        format!(
            "{}\t{}{}{}\t{}\t{}\t{}",
            serialize_time(&event.timestamp),
            event.pilot.id,
            PILOT_SEPARATOR,
            event.pilot.name,
            event.lap_number,
            serialize_duration(&event.lap_duration),
            serialize_number(event.avg_speed)
        )
    }

    /// Render a ranking entry as a canonical tab-separated line
    pub fn serialize_ranking(&self, entry: &RankingEntry) -> String {
        let race_time = entry
            .race_time
            .as_ref()
            .map(serialize_duration)
            .unwrap_or_else(|| NOT_ESTIMATED_TEXT.to_string());

        format!(
            "{}\t{}{}{}\t{}\t{}",
            entry.position,
            entry.pilot.id,
            PILOT_SEPARATOR,
            entry.pilot.name,
            entry.last_lap,
            race_time
        )
    }
}

/// Build a lap event from one pattern match
///
/// **Private** - internal helper for parse
fn parse_captures(caps: &Captures<'_>) -> Result<LapEvent, ParseError> {
    Ok(LapEvent {
        timestamp: parse_time(&caps[1])?,
        pilot: Pilot::new(pad_pilot_code(&caps[2])?, &caps[3]),
        lap_number: parse_lap_number(&caps[4])?,
        lap_duration: parse_duration(&caps[5])?,
        avg_speed: parse_number(&caps[6])?,
    })
}

/// Lap numbers start at 1
fn parse_lap_number(value: &str) -> Result<u32, ParseError> {
    match value.parse::<u32>() {
        Ok(lap) if lap > 0 => Ok(lap),
        _ => Err(ParseError::InvalidLapNumber(value.to_string())),
    }
}

/// Normalise a numeric pilot code to at least three digits (38 -> "038")
pub fn pad_pilot_code(code: &str) -> Result<String, ParseError> {
    let numeric: u32 = code
        .parse()
        .map_err(|_| ParseError::InvalidPilotCode(code.to_string()))?;
    Ok(format!("{:03}", numeric))
}
