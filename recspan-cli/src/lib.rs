//! recspan CLI library
//!
//! Command-line front end for the recspan record scanner: reads a file or
//! stdin, splits it into records, and prints each record with the stream
//! position it ended at.

pub mod commands;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
