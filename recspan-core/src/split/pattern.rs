//! Regex-based multiline record splitting
//!
//! Multiline log entries (stack traces, wrapped messages) have no per-line
//! delimiter; instead a pattern marks where each entry starts or ends. These
//! strategies operate on raw bytes, since record content is never decoded.

use super::{Split, SplitStrategy};
use crate::error::SplitError;
use regex::bytes::{Match, Regex};

/// Splits records at matches of a line-start pattern
///
/// A record runs from one match of the pattern up to the byte before the
/// next match. Bytes preceding the first match form a record of their own.
/// At end of input the remainder is emitted as a final record.
#[derive(Debug, Clone)]
pub struct LineStartSplitter {
    pattern: Regex,
}

impl LineStartSplitter {
    /// Compile a line-start pattern
    pub fn new(pattern: &str) -> Result<Self, SplitError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| SplitError::with_source("invalid line-start pattern", e))?;
        Ok(Self { pattern })
    }
}

impl SplitStrategy for LineStartSplitter {
    fn split(&mut self, data: &[u8], at_end: bool) -> Result<Split, SplitError> {
        let first = match find_nonempty(&self.pattern, data, 0) {
            Some(m) => m,
            None if at_end && !data.is_empty() => {
                return Ok(Split::record(data.len(), 0..data.len()));
            }
            None => return Ok(Split::NeedMoreData),
        };

        if first.start() > 0 {
            // Content before the first entry marker is its own record
            return Ok(Split::record(first.start(), 0..first.start()));
        }

        match find_nonempty(&self.pattern, data, first.end()) {
            Some(next) => Ok(Split::record(next.start(), 0..next.start())),
            None if at_end => Ok(Split::record(data.len(), 0..data.len())),
            None => Ok(Split::NeedMoreData),
        }
    }
}

/// Splits records at matches of a line-end pattern
///
/// A record ends at the end of each match; the matched bytes belong to the
/// record. At end of input the remainder is emitted as a final record.
#[derive(Debug, Clone)]
pub struct LineEndSplitter {
    pattern: Regex,
}

impl LineEndSplitter {
    /// Compile a line-end pattern
    pub fn new(pattern: &str) -> Result<Self, SplitError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| SplitError::with_source("invalid line-end pattern", e))?;
        Ok(Self { pattern })
    }
}

impl SplitStrategy for LineEndSplitter {
    fn split(&mut self, data: &[u8], at_end: bool) -> Result<Split, SplitError> {
        match find_nonempty(&self.pattern, data, 0) {
            // A match flush against the buffer end may still grow with more
            // input, so hold off until the stream ends.
            Some(m) if m.end() == data.len() && !at_end => Ok(Split::NeedMoreData),
            Some(m) => Ok(Split::record(m.end(), 0..m.end())),
            None if at_end && !data.is_empty() => {
                Ok(Split::record(data.len(), 0..data.len()))
            }
            None => Ok(Split::NeedMoreData),
        }
    }
}

/// Next non-empty match at or after `at`.
///
/// An empty match cannot delimit a record: emitting it would produce a
/// zero-advance split and the scanner would loop on it forever. Patterns
/// that can match the empty string (e.g. `a*`) therefore only delimit where
/// they match at least one byte; the search bumps past each empty match.
fn find_nonempty<'d>(pattern: &Regex, data: &'d [u8], mut at: usize) -> Option<Match<'d>> {
    while at <= data.len() {
        let m = pattern.find_at(data, at)?;
        if m.start() != m.end() {
            return Some(m);
        }
        at = m.end() + 1;
    }
    None
}
