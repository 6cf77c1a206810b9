//! Error types for profile log parsing and reporting

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a report run
#[derive(Error, Debug)]
pub enum ProfileLogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed measurement on line {line}: {text:?} is not a number")]
    MalformedMeasurement {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for profile log operations
pub type Result<T> = std::result::Result<T, ProfileLogError>;

impl ProfileLogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
