//! Position-tracking record scanning
//!
//! [`RecordScanner`] wraps a byte stream and a [`SplitStrategy`] and yields
//! one record per call, keeping an absolute byte offset of everything the
//! strategy has consumed. The offset is what a caller persists to resume the
//! stream at the right byte after a restart, so it counts bytes consumed from
//! the source, never bytes emitted: a truncated record still moves the offset
//! by the full consumed span.

use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};
use crate::split::{Split, SplitStrategy};
use std::io::{self, Read};
use tracing::debug;

/// One scanned record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Record content, at most `max_record_size` bytes
    pub bytes: Vec<u8>,
    /// Absolute stream position after this record was consumed; the value to
    /// persist in order to resume reading from the next record
    pub offset: u64,
    /// Whether the record was cut to the size limit
    pub truncated: bool,
}

/// Scanner that splits a byte stream into records while tracking position
///
/// The buffer never grows past twice the configured record size. When the
/// strategy cannot find a boundary within that ceiling, the scanner forces a
/// split so an unterminated oversized entry cannot stall the stream.
pub struct RecordScanner<R, S> {
    reader: R,
    strategy: S,
    buf: Vec<u8>,
    pos: u64,
    max_record_size: usize,
    ceiling: usize,
    read_chunk: usize,
    at_end: bool,
}

impl<R: Read, S: SplitStrategy> RecordScanner<R, S> {
    /// Create a scanner over `reader` with the given strategy and config
    ///
    /// Fails with [`ScanError::InvalidConfig`] when the configuration does
    /// not validate (zero `max_record_size`).
    pub fn new(reader: R, strategy: S, config: ScannerConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| ScanError::InvalidConfig { reason })?;
        let ceiling = config.buffer_ceiling();
        Ok(Self {
            reader,
            strategy,
            buf: Vec::with_capacity(config.initial_capacity.min(ceiling)),
            pos: config.start_offset,
            max_record_size: config.max_record_size,
            ceiling,
            read_chunk: config.initial_capacity.max(1),
            at_end: false,
        })
    }

    /// Scan the next record
    ///
    /// `Ok(None)` signals end of sequence: the stream is exhausted and the
    /// strategy has nothing left to finalize. Errors leave the position
    /// reflecting every advance the strategy reported before the failure.
    pub fn scan(&mut self) -> Result<Option<Record>> {
        loop {
            if !self.buf.is_empty() || self.at_end {
                match self.strategy.split(&self.buf, self.at_end)? {
                    Split::Record { advance, token } => {
                        return self.emit(advance, token).map(Some);
                    }
                    Split::NeedMoreData => {
                        if self.buf.len() >= self.ceiling {
                            // No boundary within the ceiling: force a split
                            // so the stream keeps moving.
                            return self.emit_forced().map(Some);
                        }
                        if self.at_end {
                            return Ok(None);
                        }
                    }
                }
            }
            self.fill()?;
        }
    }

    /// Absolute stream position: the configured start offset plus every byte
    /// the strategy has consumed so far. Valid at any time, including after
    /// an error or end of sequence.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Iterate over the remaining records
    pub fn records(&mut self) -> Records<'_, R, S> {
        Records { scanner: self }
    }

    /// Consume the scanner, returning the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn emit(&mut self, advance: usize, token: std::ops::Range<usize>) -> Result<Record> {
        if advance > self.buf.len() {
            return Err(ScanError::InvalidAdvance {
                advance,
                buffered: self.buf.len(),
            });
        }
        let slice = self
            .buf
            .get(token.clone())
            .ok_or(ScanError::InvalidAdvance {
                advance: token.end,
                buffered: self.buf.len(),
            })?;

        let truncated = slice.len() > self.max_record_size;
        let bytes = if truncated {
            debug!(
                token_len = slice.len(),
                limit = self.max_record_size,
                "truncating oversized record"
            );
            slice[..self.max_record_size].to_vec()
        } else {
            slice.to_vec()
        };

        // Position reflects bytes consumed from the source, not bytes kept.
        self.pos += advance as u64;
        self.buf.drain(..advance);
        Ok(Record {
            bytes,
            offset: self.pos,
            truncated,
        })
    }

    fn emit_forced(&mut self) -> Result<Record> {
        debug!(
            buffered = self.buf.len(),
            limit = self.max_record_size,
            "no boundary within buffer ceiling, forcing split"
        );
        let bytes = self.buf[..self.max_record_size].to_vec();
        self.buf.drain(..self.max_record_size);
        self.pos += self.max_record_size as u64;
        Ok(Record {
            bytes,
            offset: self.pos,
            truncated: true,
        })
    }

    fn fill(&mut self) -> Result<()> {
        if self.buf.len() >= self.ceiling {
            // The forced-split check keeps this unreachable from scan(), but
            // a grow request at the ceiling must never be honored.
            return Err(ScanError::RecordTooLarge {
                limit: self.max_record_size,
            });
        }
        let old_len = self.buf.len();
        let want = (self.ceiling - old_len).min(self.read_chunk);
        self.buf.resize(old_len + want, 0);
        match self.reader.read(&mut self.buf[old_len..]) {
            Ok(0) => {
                self.buf.truncate(old_len);
                self.at_end = true;
                Ok(())
            }
            Ok(n) => {
                self.buf.truncate(old_len + n);
                Ok(())
            }
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {
                self.buf.truncate(old_len);
                Ok(())
            }
            Err(e) => {
                self.buf.truncate(old_len);
                Err(e.into())
            }
        }
    }
}

/// Iterator over a scanner's remaining records
pub struct Records<'a, R, S> {
    scanner: &'a mut RecordScanner<R, S>,
}

impl<R: Read, S: SplitStrategy> Iterator for Records<'_, R, S> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.scan().transpose()
    }
}
