//! Property tests for position accounting

use proptest::prelude::*;
use recspan_core::{LineSplitter, RecordScanner, ScannerConfig};
use std::io::Cursor;

proptest! {
    /// Position always equals the start offset plus the bytes consumed by
    /// the strategy, and every record respects the size limit, whatever the
    /// record layout.
    #[test]
    fn position_counts_consumed_bytes(
        lines in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..40), 0..20),
        max_record_size in 1usize..32,
        start_offset in 0u64..1_000_000,
    ) {
        // Assemble a stream of newline-terminated records; strip newlines
        // from the payloads so the layout is the one we constructed.
        let mut data = Vec::new();
        for line in &lines {
            data.extend(line.iter().filter(|&&b| b != b'\n'));
            data.push(b'\n');
        }

        let mut scanner = RecordScanner::new(
            Cursor::new(data.clone()),
            LineSplitter::new(),
            ScannerConfig::with_max_record_size(max_record_size).resume_from(start_offset),
        ).unwrap();

        prop_assert_eq!(scanner.position(), start_offset);

        let mut records = 0usize;
        while let Some(record) = scanner.scan().unwrap() {
            prop_assert!(record.bytes.len() <= max_record_size);
            prop_assert_eq!(record.offset, scanner.position());
            records += 1;
            // Forced splits keep every scan making progress
            prop_assert!(records <= data.len() + lines.len() + 1);
        }

        // Every byte of the stream ends up consumed: newline splitting
        // always finalizes the tail, and forced splits cover the rest.
        prop_assert_eq!(scanner.position(), start_offset + data.len() as u64);
    }

    /// Truncation changes emitted bytes, never the position arithmetic.
    #[test]
    fn truncated_and_untruncated_scans_agree_on_position(
        payload in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut data: Vec<u8> = payload.into_iter().filter(|&b| b != b'\n').collect();
        data.push(b'\n');

        let big = ScannerConfig::with_max_record_size(1024);
        let mut wide = RecordScanner::new(
            Cursor::new(data.clone()),
            LineSplitter::new(),
            big,
        ).unwrap();
        let mut narrow = RecordScanner::new(
            Cursor::new(data),
            LineSplitter::new(),
            ScannerConfig::with_max_record_size(8),
        ).unwrap();

        while wide.scan().unwrap().is_some() {}
        while narrow.scan().unwrap().is_some() {}

        prop_assert_eq!(wide.position(), narrow.position());
    }
}
