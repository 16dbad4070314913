//! Report rendering for GCC statistics
//!
//! Three renderings of the same `GccStatistics`: the plain-text summary,
//! JSON for machine parsing, and CSV for spreadsheet analysis.

use crate::cli::OutputFormat;
use crate::stats::GccStatistics;
use serde::Serialize;

const RULE: &str = "===================================================";

/// Summary block of the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    pub num_disk: usize,
    pub num_gc: usize,
    pub min_time: i64,
    pub max_time: i64,
    pub idle_time: u64,
    pub event_corrections: u64,
}

/// One concurrency depth in the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonGccBucket {
    /// 1-indexed concurrency depth
    pub depth: usize,
    /// Display label, e.g. "GCC-2"
    pub label: String,
    pub duration: u64,
    /// Percentage of max_time
    pub percentage: f64,
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub version: String,
    pub format: String,
    pub time_unit: String,
    pub summary: JsonSummary,
    pub gcc: Vec<JsonGccBucket>,
}

impl JsonReport {
    pub fn from_stats(stats: &GccStatistics, time_unit: &str) -> Self {
        let gcc = stats
            .buckets()
            .map(|(depth, duration)| JsonGccBucket {
                depth,
                label: gcc_label(depth),
                duration,
                percentage: stats.percentage_of_max(duration),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "gccount-json-v1".to_string(),
            time_unit: time_unit.to_string(),
            summary: JsonSummary {
                num_disk: stats.num_disk,
                num_gc: stats.num_gc,
                min_time: stats.min_time,
                max_time: stats.max_time,
                idle_time: stats.idle_time,
                event_corrections: stats.event_corrections,
            },
            gcc,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Label for a 1-indexed concurrency depth
pub fn gcc_label(depth: usize) -> String {
    format!("GCC-{}", depth)
}

/// Render the plain-text analytics summary
pub fn render_text(stats: &GccStatistics, time_unit: &str) -> String {
    let mut out = String::from("\nAnalytics results: \n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(" Number of disk : {}\n", stats.num_disk));
    out.push_str(&format!(
        " Number of individual GC process : {}\n",
        stats.num_gc
    ));
    out.push_str(&format!(" Minimum time : {}\n", stats.min_time));
    out.push_str(&format!(" Maximum time : {}\n", stats.max_time));
    out.push_str(" Duration of GCC :\n");
    for (depth, duration) in stats.buckets() {
        out.push_str(&format!(
            "   GCC {} : {} {} \t({:.5} %)\n",
            depth,
            duration,
            time_unit,
            stats.percentage_of_max(duration)
        ));
    }
    out.push_str(RULE);
    out.push('\n');

    out
}

/// Render one CSV row per concurrency depth
pub fn render_csv(stats: &GccStatistics) -> String {
    let mut output = String::from("depth,label,duration,percentage\n");

    for (depth, duration) in stats.buckets() {
        output.push_str(&format!(
            "{},{},{},{:.5}\n",
            depth,
            gcc_label(depth),
            duration,
            stats.percentage_of_max(duration)
        ));
    }

    output
}

/// Render `stats` in the requested format
pub fn render(
    stats: &GccStatistics,
    format: OutputFormat,
    time_unit: &str,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(stats, time_unit)),
        OutputFormat::Json => JsonReport::from_stats(stats, time_unit).to_json(),
        OutputFormat::Csv => Ok(render_csv(stats)),
    }
}
