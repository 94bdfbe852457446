//! Error types for scanning and splitting

use std::io;
use thiserror::Error;

/// Errors surfaced by the record scanner
#[derive(Error, Debug)]
pub enum ScanError {
    /// Invalid scanner configuration
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },

    /// An unterminated record could not fit within the buffer ceiling
    #[error(
        "record too large (limit {limit} bytes): increase the max record size \
         or ensure that multiline patterns terminate"
    )]
    RecordTooLarge {
        /// The configured maximum record size in bytes
        limit: usize,
    },

    /// I/O failure while reading from the underlying stream
    #[error("scanner error: {0}")]
    Io(#[from] io::Error),

    /// The split strategy reported a failure
    #[error("scanner error: {0}")]
    Strategy(#[from] SplitError),

    /// The split strategy advanced past the end of the buffered data
    #[error("split strategy advanced {advance} bytes but only {buffered} were buffered")]
    InvalidAdvance {
        /// The advance the strategy reported
        advance: usize,
        /// The number of bytes actually buffered
        buffered: usize,
    },
}

impl ScanError {
    /// Whether this error is the record-too-large condition, for which the
    /// caller can give actionable guidance rather than a generic I/O message.
    pub fn is_record_too_large(&self) -> bool {
        matches!(self, ScanError::RecordTooLarge { .. })
    }
}

/// Error reported by a split strategy
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SplitError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SplitError {
    /// Create a strategy error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a strategy error wrapping an underlying cause
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
