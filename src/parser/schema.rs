//! Race data model shared by the parser and the aggregator.

use crate::utils::config::DEFAULT_LAPS_TO_FINISH;
use chrono::{Duration, NaiveTime};

/// A pilot as identified in the timing log
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pilot {
    /// Zero-padded three digit code (e.g. "038"), the identity key
    pub id: String,

    /// Display name as written in the log
    pub name: String,
}

impl Pilot {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One timed lap completion by one pilot
#[derive(Debug, Clone, PartialEq)]
pub struct LapEvent {
    /// Time of day at which the lap was completed
    pub timestamp: NaiveTime,

    pub pilot: Pilot,

    pub lap_number: u32,

    /// Elapsed time of this lap
    pub lap_duration: Duration,

    /// Average speed over this lap
    pub avg_speed: f64,
}

/// Race settings supplied when a race starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceOptions {
    /// Lap number at which a pilot crosses the finish line
    pub laps_to_finish: u32,
}

impl Default for RaceOptions {
    fn default() -> Self {
        Self {
            laps_to_finish: DEFAULT_LAPS_TO_FINISH,
        }
    }
}

impl RaceOptions {
    pub fn with_laps(laps_to_finish: u32) -> Self {
        Self { laps_to_finish }
    }
}

/// A finishing position, appended when a pilot completes the final lap
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    /// 1-based finishing position
    pub position: usize,

    pub pilot: Pilot,

    /// Lap number on which the pilot finished
    pub last_lap: u32,

    /// Time of day the finishing lap was recorded
    pub finish_timestamp: NaiveTime,

    /// Sum of the pilot's lap durations up to the finishing lap
    pub race_time: Option<Duration>,
}
