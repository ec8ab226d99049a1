//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised when a line matched the lap pattern but one of its
/// fields could not be converted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid lap duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid decimal number: {0}")]
    InvalidNumber(String),

    #[error("Invalid pilot code: {0}")]
    InvalidPilotCode(String),

    #[error("Invalid lap number: {0}")]
    InvalidLapNumber(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
