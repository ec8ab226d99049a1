//! Output writers for race summaries.
//!
//! This module handles writing data to disk in various formats:
//! - Plain text summary lines
//! - JSON summary documents

pub mod document;
pub mod json;
pub mod text;

// Re-export main functions
pub use document::{GapRow, LapRow, RaceSummaryDocument, RankingRow, SpeedRow};
pub use json::{read_summary, summary_to_string, write_summary};
pub use text::write_lines;
