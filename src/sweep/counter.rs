// Event-driven overlap sweep
//
// Walks the time-ordered intervals once, keeping the end times of every
// open interval in `ActiveEnds`. Each stretch of time between two events is
// charged to the bucket for the depth that was current during it.

use super::active_ends::ActiveEnds;
use super::error::{Result, SweepError};
use crate::interval::{GcInterval, OrderedIntervals};
use crate::stats::GccStatistics;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Behavioral switches for the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOptions {
    /// Add a unit count to the current bucket whenever an interval opens
    /// after earlier ones have closed.
    ///
    /// Keeps the bucket values identical to the historical GCC counter (the
    /// text report layout differs). The count is tracked in
    /// `GccStatistics::event_corrections` so it can be separated from real
    /// durations.
    pub event_correction: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            event_correction: true,
        }
    }
}

/// State carried across one pass over the intervals
#[derive(Debug)]
pub struct SweepCounter {
    options: SweepOptions,
    stats: GccStatistics,
    active: ActiveEnds,
    current_time: i64,
    current_depth: usize,
}

impl SweepCounter {
    pub fn new(num_disk: usize, options: SweepOptions) -> Self {
        Self {
            options,
            stats: GccStatistics::new(num_disk),
            active: ActiveEnds::new(),
            current_time: 0,
            current_depth: 0,
        }
    }

    /// Current concurrency depth
    pub fn depth(&self) -> usize {
        self.current_depth
    }

    /// Run the full sweep and return the populated statistics
    pub fn run(mut self, intervals: &OrderedIntervals) -> Result<GccStatistics> {
        let mut iter = intervals.iter();
        let first = iter.next().ok_or(SweepError::EmptyInput)?;

        debug!(
            intervals = intervals.len(),
            num_disk = self.stats.num_disk,
            "starting concurrency sweep"
        );

        self.seed(first)?;
        for interval in iter {
            self.step(interval)?;
        }
        self.drain()?;

        self.stats.num_gc = intervals.len();
        self.stats.max_time = self.current_time;

        debug!(
            min_time = self.stats.min_time,
            max_time = self.stats.max_time,
            corrections = self.stats.event_corrections,
            "concurrency sweep finished"
        );

        Ok(self.stats)
    }

    /// Open the first interval
    fn seed(&mut self, first: &GcInterval) -> Result<()> {
        self.stats.min_time = first.start;
        self.current_time = first.start;
        self.active.insert(first.end);
        self.raise_depth()
    }

    /// Process one interval after the first
    pub fn step(&mut self, interval: &GcInterval) -> Result<()> {
        let earliest_end = self.active.peek_min()?;
        match interval.start.cmp(&earliest_end) {
            Ordering::Less => self.open_nested(interval),
            Ordering::Equal => self.hand_over(interval),
            Ordering::Greater => self.close_then_open(interval),
        }
    }

    /// Starts before the earliest open interval ends: depth grows
    fn open_nested(&mut self, interval: &GcInterval) -> Result<()> {
        self.advance_to(interval.start)?;
        self.active.insert(interval.end);
        self.raise_depth()
    }

    /// Starts exactly when the earliest open interval ends: depth unchanged
    fn hand_over(&mut self, interval: &GcInterval) -> Result<()> {
        self.advance_to(interval.start)?;
        self.active.insert(interval.end);
        self.active.pop_min()?;
        Ok(())
    }

    /// Starts after one or more open intervals ended: close them, then open
    fn close_then_open(&mut self, interval: &GcInterval) -> Result<()> {
        while !self.active.is_empty() {
            let end = self.active.peek_min()?;
            if end >= interval.start {
                break;
            }
            self.accumulate(end)?;
            self.current_time = self.active.pop_min()?;
            self.lower_depth()?;
        }

        self.accumulate(interval.start)?;
        if self.options.event_correction && self.current_depth > 0 {
            let depth = self.current_depth;
            let bucket = self.bucket_mut()?;
            *bucket = bucket
                .checked_add(1)
                .ok_or(SweepError::AccumulatorOverflow { depth })?;
            self.stats.event_corrections += 1;
        }
        self.current_time = interval.start;
        self.active.insert(interval.end);
        self.raise_depth()
    }

    /// Close every interval still open after the last one was processed
    pub fn drain(&mut self) -> Result<()> {
        while !self.active.is_empty() {
            let end = self.active.pop_min()?;
            if end != self.current_time {
                self.accumulate(end)?;
            }
            self.current_time = end;
            self.lower_depth()?;
        }
        Ok(())
    }

    /// Accumulate up to `time` (if it differs from now), then move to it
    fn advance_to(&mut self, time: i64) -> Result<()> {
        if self.current_time != time {
            self.accumulate(time)?;
        }
        self.current_time = time;
        Ok(())
    }

    /// Charge `[current_time, until)` to the current depth
    fn accumulate(&mut self, until: i64) -> Result<()> {
        if until < self.current_time {
            return Err(SweepError::NonMonotonicTime {
                from: self.current_time,
                to: until,
            });
        }
        let elapsed = until.abs_diff(self.current_time);

        trace!(
            from = self.current_time,
            to = until,
            depth = self.current_depth,
            "accumulate"
        );

        let depth = self.current_depth;
        let slot = if depth == 0 {
            &mut self.stats.idle_time
        } else {
            self.bucket_mut()?
        };
        *slot = slot
            .checked_add(elapsed)
            .ok_or(SweepError::AccumulatorOverflow { depth })?;
        Ok(())
    }

    fn bucket_mut(&mut self) -> Result<&mut u64> {
        let depth = self.current_depth;
        let num_disk = self.stats.num_disk;
        match depth.checked_sub(1) {
            Some(idx) if idx < num_disk => Ok(&mut self.stats.gcc_durations[idx]),
            _ => Err(SweepError::DepthOverflow { depth, num_disk }),
        }
    }

    fn raise_depth(&mut self) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > self.stats.num_disk {
            return Err(SweepError::DepthOverflow {
                depth: self.current_depth,
                num_disk: self.stats.num_disk,
            });
        }
        Ok(())
    }

    fn lower_depth(&mut self) -> Result<()> {
        let open = self.active.len();
        self.current_depth = self
            .current_depth
            .checked_sub(1)
            .ok_or(SweepError::DepthUnderflow { open })?;
        if self.current_depth == 0 && open > 0 {
            return Err(SweepError::DepthUnderflow { open });
        }
        Ok(())
    }
}

/// Count generational concurrency over `intervals` from `num_disk` logs
///
/// # Example
/// ```
/// use gccount::interval::{GcInterval, OrderedIntervals};
/// use gccount::sweep::{count_gcc, SweepOptions};
///
/// let intervals = OrderedIntervals::from_unsorted(vec![
///     GcInterval::new(0, 10),
///     GcInterval::new(2, 5),
/// ]);
/// let stats = count_gcc(2, &intervals, SweepOptions::default())?;
/// assert_eq!(stats.gcc_durations, vec![7, 3]);
/// # Ok::<(), gccount::sweep::SweepError>(())
/// ```
pub fn count_gcc(
    num_disk: usize,
    intervals: &OrderedIntervals,
    options: SweepOptions,
) -> Result<GccStatistics> {
    SweepCounter::new(num_disk, options).run(intervals)
}
