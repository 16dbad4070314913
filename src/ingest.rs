//! GC log ingestion
//!
//! Discovers one log file per disk, pulls the start/end timestamp fields
//! out of every line, and collects them into an `OrderedIntervals`.
//!
//! # Example
//!
//! ```
//! use gccount::ingest::{parse_line, FieldLayout};
//! use gccount::interval::GcInterval;
//!
//! let line = "0 disk0 gc 1 0 0 1500 1750";
//! let interval = parse_line(line, FieldLayout::default()).unwrap();
//! assert_eq!(interval, Some(GcInterval::new(1500, 1750)));
//! ```

use crate::config::AnalysisConfig;
use crate::interval::{GcInterval, OrderedIntervals};
use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Problems with a single log line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("missing {name} field (index {index}, line has {found} fields)")]
    MissingField {
        name: &'static str,
        index: usize,
        found: usize,
    },

    #[error("invalid {name} timestamp {value:?}: {source}")]
    InvalidTimestamp {
        name: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("interval ends before it starts ({start} > {end})")]
    InvertedInterval { start: i64, end: i64 },
}

/// Errors that stop ingestion before the sweep can run
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Invalid log file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to list log files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("No log files match {pattern:?}")]
    NoLogFiles { pattern: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}:{line}: {source}", path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        source: LineError,
    },
}

/// Result type for ingestion
pub type Result<T> = std::result::Result<T, IngestError>;

/// Positions of the timestamp fields within a whitespace-split line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub start_field: usize,
    pub end_field: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            start_field: 6,
            end_field: 7,
        }
    }
}

/// Intervals from every discovered log file
#[derive(Debug, Clone, Default)]
pub struct IngestedLogs {
    /// Log files read, sorted by path
    pub files: Vec<PathBuf>,
    pub intervals: OrderedIntervals,
}

impl IngestedLogs {
    /// Number of source files, i.e. disks
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Parse one log line into an interval
///
/// Blank lines yield `Ok(None)`.
pub fn parse_line(
    line: &str,
    layout: FieldLayout,
) -> std::result::Result<Option<GcInterval>, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let start = parse_field(&tokens, layout.start_field, "start")?;
    let end = parse_field(&tokens, layout.end_field, "end")?;

    let interval = GcInterval::new(start, end);
    if !interval.is_well_formed() {
        return Err(LineError::InvertedInterval { start, end });
    }
    Ok(Some(interval))
}

fn parse_field(
    tokens: &[&str],
    index: usize,
    name: &'static str,
) -> std::result::Result<i64, LineError> {
    let raw = tokens.get(index).ok_or(LineError::MissingField {
        name,
        index,
        found: tokens.len(),
    })?;
    raw.parse::<i64>().map_err(|source| LineError::InvalidTimestamp {
        name,
        value: (*raw).to_string(),
        source,
    })
}

/// Expand `pattern` into a sorted list of regular files
pub fn discover_log_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| IngestError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(IngestError::NoLogFiles {
            pattern: pattern.to_string(),
        });
    }
    Ok(files)
}

/// Read every interval from one log file
pub fn read_log_file(path: &Path, layout: FieldLayout) -> Result<Vec<GcInterval>> {
    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Only the timestamp fields must be text; other columns may hold raw bytes
    let content = String::from_utf8_lossy(&bytes);

    let mut intervals = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let parsed = parse_line(line, layout).map_err(|source| IngestError::MalformedLine {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        if let Some(interval) = parsed {
            intervals.push(interval);
        }
    }

    debug!(path = %path.display(), intervals = intervals.len(), "read GC log");
    Ok(intervals)
}

/// Discover and read all log files named by `config`
pub fn ingest(config: &AnalysisConfig) -> Result<IngestedLogs> {
    info!(pattern = %config.input_glob, "reading gc log data");

    let files = discover_log_files(&config.input_glob)?;
    let layout = config.field_layout();

    let mut intervals = OrderedIntervals::new();
    for path in &files {
        intervals.extend(read_log_file(path, layout)?);
    }

    info!(
        files = files.len(),
        intervals = intervals.len(),
        "gc log data loaded"
    );
    Ok(IngestedLogs { files, intervals })
}
