//! Pluggable record boundary detection
//!
//! A [`SplitStrategy`] decides where one record ends and the next begins.
//! The scanner hands it the currently buffered bytes together with a flag
//! saying whether the stream has ended, and the strategy answers with one of
//! three outcomes: more input is needed, a record was found, or splitting
//! failed.

mod lines;
mod pattern;

pub use lines::LineSplitter;
pub use pattern::{LineEndSplitter, LineStartSplitter};

use crate::error::SplitError;
use std::ops::Range;

/// Outcome of one split attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    /// No record boundary in the buffered data yet; the scanner should read
    /// more input. Not valid progress once the stream has ended.
    NeedMoreData,
    /// A record was found.
    Record {
        /// Number of buffered bytes to consider consumed. May exceed the
        /// token length when delimiter bytes are consumed without being part
        /// of the record. Must not exceed the buffered length.
        advance: usize,
        /// The record's byte range within the buffered data.
        token: Range<usize>,
    },
}

impl Split {
    /// Convenience constructor for the common prefix-record case
    pub fn record(advance: usize, token: Range<usize>) -> Self {
        Split::Record { advance, token }
    }
}

/// A record boundary policy
///
/// Implementations may keep internal state across calls (pattern strategies
/// do). The scanner re-invokes the strategy with a strictly growing buffer
/// until it stops answering [`Split::NeedMoreData`].
pub trait SplitStrategy {
    /// Inspect `data` and report the next record boundary.
    ///
    /// `at_end` is true once the underlying stream is exhausted; a strategy
    /// that can finalize a trailing partial record should do so then.
    fn split(&mut self, data: &[u8], at_end: bool) -> Result<Split, SplitError>;
}

impl<F> SplitStrategy for F
where
    F: FnMut(&[u8], bool) -> Result<Split, SplitError>,
{
    fn split(&mut self, data: &[u8], at_end: bool) -> Result<Split, SplitError> {
        self(data, at_end)
    }
}

impl SplitStrategy for Box<dyn SplitStrategy + Send> {
    fn split(&mut self, data: &[u8], at_end: bool) -> Result<Split, SplitError> {
        (**self).split(data, at_end)
    }
}
