//! Error types for the log core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying logs.
///
/// Malformed log lines are not represented here: they are dropped silently
/// at parse time and never surface as errors.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log directory or one of its files could not be read.
    #[error("log source unavailable: {path}: {source}")]
    SourceUnavailable {
        /// Path that failed to enumerate or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Pagination parameters were out of range.
    #[error("invalid pagination parameters: {0}")]
    InvalidPagination(String),

    /// No record with the given identifier exists in the set.
    #[error("log entry not found: {0}")]
    NotFound(String),
}

/// Result type alias for log operations.
pub type Result<T> = std::result::Result<T, LogError>;
