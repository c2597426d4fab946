//! Error types for keyword extraction
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Malformed structural markers in a title (an unmatched quote, a `)` before
//! its `(`) are not errors: the decomposer simply moves on to the next rule.
//! The only failure the tokenizer itself can report is `Capacity`.

use crate::limits::LimitError;
use std::io;
use thiserror::Error;

/// Result type alias for keyword operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for keyword extraction
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Title source or CSV export failure
    #[error("CSV error: {0}")]
    Csv(String),

    /// Store file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Input or recursion bound exceeded
    #[error("Capacity exceeded ({reason}): {actual} > {max}")]
    Capacity {
        /// Which bound was hit
        reason: String,
        /// Observed size or depth
        actual: usize,
        /// Configured maximum
        max: usize,
    },

    /// Invalid argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Another process holds the keyword store
    #[error("Keyword store '{0}' is already in use by another process")]
    StoreLocked(String),
}

impl Error {
    /// Build an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True for errors that reject a single title rather than the whole run.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Error::Capacity { .. })
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        let reason = e.reason_code().to_string();
        match e {
            LimitError::TitleTooLong { actual, max } | LimitError::DepthExceeded { actual, max } => {
                Error::Capacity {
                    reason,
                    actual,
                    max,
                }
            }
        }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
