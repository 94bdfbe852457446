//! Configuration for the record scanner

use serde::{Deserialize, Serialize};

/// Default upper bound on record length (1 MiB)
pub const DEFAULT_MAX_RECORD_SIZE: usize = 1024 * 1024;

/// Default initial buffer capacity (16 KiB)
pub const DEFAULT_INITIAL_CAPACITY: usize = 16 * 1024;

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Upper bound on emitted record length in bytes; records longer than
    /// this are truncated. Also sizes the buffer ceiling (twice this value).
    pub max_record_size: usize,
    /// Absolute stream position of the first byte the scanner will read,
    /// typically restored from a prior session.
    pub start_offset: u64,
    /// Initial buffer capacity in bytes; the buffer grows on demand up to
    /// the ceiling. Capped at the ceiling.
    pub initial_capacity: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_record_size: DEFAULT_MAX_RECORD_SIZE,
            start_offset: 0,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl ScannerConfig {
    /// Create a configuration with a specific record size limit
    pub fn with_max_record_size(max_record_size: usize) -> Self {
        Self {
            max_record_size,
            ..Self::default()
        }
    }

    /// Set the starting offset, for resuming a stream read in a prior session
    pub fn resume_from(mut self, start_offset: u64) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Buffer ceiling: the buffer never grows past twice the record limit
    pub fn buffer_ceiling(&self) -> usize {
        self.max_record_size.saturating_mul(2)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_record_size == 0 {
            return Err("max_record_size must be greater than zero".to_string());
        }
        Ok(())
    }
}
