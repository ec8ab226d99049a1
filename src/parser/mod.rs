//! Timing log parsing and the race data model.
//!
//! This module handles:
//! - Matching lap lines in raw timing logs
//! - Converting time, duration and decimal tokens
//! - Rendering events back into canonical lines

pub mod format;
pub mod lap_log;
pub mod schema;

// Re-export main types
pub use format::{
    elapsed, parse_duration, parse_number, parse_time, serialize_duration, serialize_number,
    serialize_number_fixed, serialize_time,
};
pub use lap_log::{pad_pilot_code, LineParser};
pub use schema::{LapEvent, Pilot, RaceOptions, RankingEntry};
