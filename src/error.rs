//! Error handling for zoo intake operations.
//!
//! Covers the two recognized file failures (names file, arrivals file),
//! malformed arrival lines, and configuration problems.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Names file not found: {path}")]
    NamesFileNotFound { path: PathBuf },

    #[error("Input file not found: {path}")]
    InputFileNotFound { path: PathBuf },

    #[error("Malformed record on line {line_number}: {reason}")]
    MalformedRecord { line_number: usize, reason: String },

    #[error("Invalid age '{value}' on line {line_number}")]
    InvalidAge {
        line_number: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ZooError {
    /// Create a malformed record error
    pub fn malformed(line_number: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line_number,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;
