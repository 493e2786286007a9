//! Error types for dmarchive
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Request failures during pagination never surface through this type:
//! the fetch loop converts them into a truncation status so the records
//! collected before the failure are kept. `Error` covers everything else,
//! meaning bad endpoint URLs, transport failures, and output I/O.

use thiserror::Error;

/// The main error type for dmarchive
#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint URL could not be parsed
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level request failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The destination file could not be created or written
    #[error("Output error: {message}")]
    Output {
        /// What went wrong
        message: String,
    },

    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias for dmarchive
pub type Result<T> = std::result::Result<T, Error>;
