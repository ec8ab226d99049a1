//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod check;
pub mod models;
pub mod summarize;

// Re-export main command functions
pub use check::check_log_file;
pub use models::{CheckReport, SummarizeArgs};
pub use summarize::{execute_summarize, summarize, validate_args};
