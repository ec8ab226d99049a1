//! Race Summary
//!
//! Race summaries from kart lap timing logs: finishing order, proof
//! times, best laps, average speeds and gaps to the winner.
//!
//! This crate provides the core implementation for the
//! `race-summary` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! race-summary summarize --logfile samples/racelogs.txt --laps 4
//! ```
//!
//! Library use goes through [`aggregator::RaceAggregator`]:
//!
//! ```ignore
//! let mut race = RaceAggregator::new(LineParser::new());
//! race.start(RaceOptions::default());
//! race.ingest(&raw_log)?;
//! for line in race.report() {
//!     println!("{}", line);
//! }
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
