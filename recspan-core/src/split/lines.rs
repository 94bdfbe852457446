//! Newline-delimited record splitting

use super::{Split, SplitStrategy};
use crate::error::SplitError;
use memchr::memchr;

/// Splits records on `\n`, tolerating `\r\n`
///
/// The delimiter is consumed but excluded from the record, and a trailing
/// `\r` is trimmed from the record. At end of input a non-empty remainder is
/// emitted as a final record even without a trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSplitter;

impl LineSplitter {
    /// Create a newline splitter
    pub fn new() -> Self {
        Self
    }
}

impl SplitStrategy for LineSplitter {
    fn split(&mut self, data: &[u8], at_end: bool) -> Result<Split, SplitError> {
        match memchr(b'\n', data) {
            Some(pos) => {
                let token_end = if pos > 0 && data[pos - 1] == b'\r' {
                    pos - 1
                } else {
                    pos
                };
                Ok(Split::record(pos + 1, 0..token_end))
            }
            None if at_end && !data.is_empty() => {
                // Unterminated final line
                Ok(Split::record(data.len(), 0..data.len()))
            }
            None => Ok(Split::NeedMoreData),
        }
    }
}
