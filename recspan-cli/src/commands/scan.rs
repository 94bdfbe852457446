//! Scan command implementation

use crate::CliResult;
use anyhow::Context;
use clap::Parser;
use recspan_core::{
    LineEndSplitter, LineSplitter, LineStartSplitter, Record, RecordScanner, ScannerConfig,
    SplitStrategy, DEFAULT_MAX_RECORD_SIZE,
};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Debug, Parser)]
#[command(
    name = "recspan",
    version,
    about = "Split a byte stream into records with resumable byte offsets"
)]
pub struct ScanArgs {
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Upper bound on record length in bytes; longer records are truncated
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_RECORD_SIZE)]
    pub max_record_size: usize,

    /// Byte offset to resume from; file input is seeked there and reported
    /// positions include it
    #[arg(long, value_name = "BYTES", default_value_t = 0)]
    pub start_offset: u64,

    /// Regex marking the start of each record, for multiline entries
    #[arg(long, value_name = "REGEX", conflicts_with = "line_end")]
    pub line_start: Option<String>,

    /// Regex marking the end of each record
    #[arg(long, value_name = "REGEX")]
    pub line_end: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress the final position summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `offset<TAB>record` lines
    Text,
    /// One JSON object per record with offset and truncation flag
    Json,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("starting scan");
        log::debug!("arguments: {:?}", self);

        let reader = self.open_input()?;
        let strategy = self.build_strategy()?;
        let config = ScannerConfig::with_max_record_size(self.max_record_size)
            .resume_from(self.start_offset);
        let mut scanner = RecordScanner::new(reader, strategy, config)
            .context("failed to create scanner")?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        loop {
            match scanner.scan() {
                Ok(Some(record)) => self.write_record(&mut out, &record)?,
                Ok(None) => break,
                Err(err) if err.is_record_too_large() => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("stream position {}", scanner.position())));
                }
                Err(err) => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("scan failed at position {}", scanner.position())));
                }
            }
        }
        out.flush()?;

        if !self.quiet {
            eprintln!("final position: {}", scanner.position());
        }
        Ok(())
    }

    fn open_input(&self) -> CliResult<Box<dyn Read>> {
        match &self.input {
            Some(path) => {
                let mut file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                if self.start_offset > 0 {
                    file.seek(SeekFrom::Start(self.start_offset)).with_context(
                        || format!("failed to seek to offset {}", self.start_offset),
                    )?;
                }
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdin())),
        }
    }

    fn build_strategy(&self) -> CliResult<Box<dyn SplitStrategy + Send>> {
        if let Some(pattern) = &self.line_start {
            let splitter = LineStartSplitter::new(pattern)
                .with_context(|| format!("bad line-start pattern {pattern:?}"))?;
            return Ok(Box::new(splitter));
        }
        if let Some(pattern) = &self.line_end {
            let splitter = LineEndSplitter::new(pattern)
                .with_context(|| format!("bad line-end pattern {pattern:?}"))?;
            return Ok(Box::new(splitter));
        }
        Ok(Box::new(LineSplitter::new()))
    }

    fn write_record(&self, out: &mut impl Write, record: &Record) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => {
                out.write_all(record.offset.to_string().as_bytes())?;
                out.write_all(b"\t")?;
                out.write_all(&record.bytes)?;
                out.write_all(b"\n")?;
            }
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "offset": record.offset,
                    "truncated": record.truncated,
                    "record": String::from_utf8_lossy(&record.bytes),
                });
                serde_json::to_writer(&mut *out, &value)?;
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
