//! Generational concurrency statistics
//!
//! `GccStatistics` is the value produced by one sweep and handed to the
//! report renderers. It is never shared or mutated after the sweep returns.

use serde::Serialize;

/// Summary of one concurrency sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GccStatistics {
    /// Number of source log files (one per disk)
    pub num_disk: usize,
    /// Number of individual GC intervals swept
    pub num_gc: usize,
    /// Start of the earliest interval
    pub min_time: i64,
    /// Time reached after the final drain
    pub max_time: i64,
    /// Accumulated time per depth; index `d - 1` holds GCC-d
    pub gcc_durations: Vec<u64>,
    /// Time with no interval open (between the end of one burst and the next start)
    pub idle_time: u64,
    /// Unit counts folded into `gcc_durations` by the close-then-open correction
    pub event_corrections: u64,
}

impl GccStatistics {
    /// Empty histogram with one bucket per disk
    pub fn new(num_disk: usize) -> Self {
        Self {
            num_disk,
            num_gc: 0,
            min_time: 0,
            max_time: 0,
            gcc_durations: vec![0; num_disk],
            idle_time: 0,
            event_corrections: 0,
        }
    }

    /// Accumulated time at a 1-indexed depth
    pub fn duration_at(&self, depth: usize) -> Option<u64> {
        depth
            .checked_sub(1)
            .and_then(|idx| self.gcc_durations.get(idx))
            .copied()
    }

    /// `(depth, duration)` pairs, depth 1-indexed
    pub fn buckets(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.gcc_durations
            .iter()
            .enumerate()
            .map(|(idx, duration)| (idx + 1, *duration))
    }

    /// `duration` as a percentage of `max_time`
    ///
    /// Returns 0.0 when `max_time` is zero.
    pub fn percentage_of_max(&self, duration: u64) -> f64 {
        if self.max_time == 0 {
            return 0.0;
        }
        duration as f64 / self.max_time as f64 * 100.0
    }

    /// Wall-clock span covered by the sweep
    pub fn span(&self) -> u64 {
        if self.max_time < self.min_time {
            return 0;
        }
        self.max_time.abs_diff(self.min_time)
    }

    /// Sum of every GCC bucket
    pub fn bucket_total(&self) -> u64 {
        self.gcc_durations.iter().sum()
    }

    /// Deepest concurrency level with any accumulated time
    pub fn peak_depth(&self) -> Option<usize> {
        self.buckets()
            .filter(|(_, duration)| *duration > 0)
            .map(|(depth, _)| depth)
            .last()
    }
}
