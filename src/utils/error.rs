//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types.
//! Callers are free to wrap them in `anyhow` at the application layer.

use thiserror::Error;

/// Errors that can occur while rendering a graph report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Thread {thread_id} has an unusable baseline total time: {total_time}")]
    InvalidBaseline { thread_id: u64, total_time: f64 },

    #[error("Invalid profile input: {0}")]
    InvalidInput(String),

    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading a profile snapshot
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read profile: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur while loading report options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse options file: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ReportError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),
}
