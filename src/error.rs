//! Error types for directory tree scanning and comparison.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem scan errors
///
/// Raised while building trees or fingerprinting files. Always carries
/// the offending path; scan failures abort the comparison for the
/// affected subtree rather than being silently skipped.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Comparison-level errors
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Invalid comparator weights: {0}")]
    InvalidWeights(String),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

impl From<config::ConfigError> for CompareError {
    fn from(err: config::ConfigError) -> Self {
        CompareError::InvalidConfig(err.to_string())
    }
}
