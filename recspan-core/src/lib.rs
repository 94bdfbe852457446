//! Position-tracking record scanning for log ingestion
//!
//! This crate splits a byte stream into discrete records using a pluggable
//! boundary strategy, while tracking the absolute byte offset consumed so a
//! caller can persist and resume its read position, and while enforcing a
//! hard record size limit so an unterminated entry can never stall the
//! stream or grow the buffer without bound.
//!
//! ```
//! use recspan_core::{LineSplitter, RecordScanner, ScannerConfig};
//! use std::io::Cursor;
//!
//! let stream = Cursor::new(b"ab\ncdef\n".to_vec());
//! let mut scanner = RecordScanner::new(
//!     stream,
//!     LineSplitter::new(),
//!     ScannerConfig::with_max_record_size(10),
//! )?;
//!
//! let record = scanner.scan()?.unwrap();
//! assert_eq!(record.bytes, b"ab");
//! assert_eq!(scanner.position(), 3);
//! # Ok::<(), recspan_core::ScanError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod scanner;
pub mod split;

// Re-export key types
pub use config::{ScannerConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_RECORD_SIZE};
pub use error::{Result, ScanError, SplitError};
pub use scanner::{Record, RecordScanner, Records};
pub use split::{LineEndSplitter, LineSplitter, LineStartSplitter, Split, SplitStrategy};
