//! CLI argument parsing for gccount

use crate::config::AnalysisConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the GCC report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "gccount")]
#[command(version)]
#[command(about = "Count generational GC concurrency (GCC-1, GCC-2, ...) across disk logs", long_about = None)]
pub struct Cli {
    /// Load analysis settings from a TOML file (flags override it)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Glob selecting one GC log file per disk [default: input/*.dat]
    #[arg(short = 'i', long = "input", value_name = "GLOB")]
    pub input: Option<String>,

    /// 0-based field index of the pause start timestamp [default: 6]
    #[arg(long = "start-field", value_name = "N")]
    pub start_field: Option<usize>,

    /// 0-based field index of the pause end timestamp [default: 7]
    #[arg(long = "end-field", value_name = "N")]
    pub end_field: Option<usize>,

    /// Time unit label shown next to durations [default: ns]
    #[arg(long = "time-unit", value_name = "UNIT")]
    pub time_unit: Option<String>,

    /// Drop the unit count added when a pause opens after others closed
    #[arg(long = "no-event-correction")]
    pub no_event_correction: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `base`
    pub fn apply_overrides(&self, mut base: AnalysisConfig) -> AnalysisConfig {
        if let Some(input) = &self.input {
            base.input_glob = input.clone();
        }
        if let Some(start_field) = self.start_field {
            base.start_field = start_field;
        }
        if let Some(end_field) = self.end_field {
            base.end_field = end_field;
        }
        if let Some(time_unit) = &self.time_unit {
            base.time_unit = time_unit.clone();
        }
        if self.no_event_correction {
            base.event_correction = false;
        }
        base
    }
}
