//! Aggregation of lap events into race standings.
//!
//! This module transforms parsed lap events into:
//! - Finishing order and proof times
//! - Best laps, overall and per pilot
//! - Average speeds and gaps to the leader

pub mod race;
pub mod report;

// Re-export main types and functions
pub use race::{RaceAggregator, RaceState};
pub use report::build_report;
