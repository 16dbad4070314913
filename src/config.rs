//! Analysis configuration
//!
//! Where to find the GC logs, which fields hold the timestamps, and how to
//! treat the close-then-open unit correction. Every field has a default, so
//! a TOML file only needs the keys it changes:
//!
//! ```toml
//! input_glob = "logs/ssd*.dat"
//! start_field = 6
//! end_field = 7
//! time_unit = "us"
//! event_correction = false
//! ```

use crate::ingest::FieldLayout;
use crate::sweep::SweepOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Glob selecting one log file per disk
    pub input_glob: String,

    /// 0-based whitespace field holding the pause start
    pub start_field: usize,

    /// 0-based whitespace field holding the pause end
    pub end_field: usize,

    /// Label printed next to durations; the sweep never interprets it
    pub time_unit: String,

    /// Keep the unit count added when an interval opens after others closed
    ///
    /// Default: true, which reproduces the bucket values of historical GCC
    /// reports (the text layout itself is not byte-identical).
    pub event_correction: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_glob: "input/*.dat".to_string(),
            start_field: 6,
            end_field: 7,
            time_unit: "ns".to_string(),
            event_correction: true,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file can't be read, isn't valid TOML, or names
    /// unknown keys.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", path.as_ref().display())
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_glob.trim().is_empty() {
            return Err("input_glob must not be empty".to_string());
        }

        if self.start_field == self.end_field {
            return Err(format!(
                "start_field and end_field must differ, both are {}",
                self.start_field
            ));
        }

        Ok(())
    }

    pub fn field_layout(&self) -> FieldLayout {
        FieldLayout {
            start_field: self.start_field,
            end_field: self.end_field,
        }
    }

    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions {
            event_correction: self.event_correction,
        }
    }
}
