// Generational concurrency sweep
//
// Given GC pauses from N disks, sorted by start time, measure how long
// exactly 1, 2, ..., N pauses were in progress at once (GCC-1 .. GCC-N).
//
// One left-to-right pass over the intervals, O(n log n) overall:
// - `ActiveEnds` holds the end times of currently open intervals
// - `SweepCounter` charges each stretch between events to the current depth
// - the result is a `GccStatistics` value, no shared state

mod active_ends;
mod counter;
mod error;

pub use active_ends::ActiveEnds;
pub use counter::{count_gcc, SweepCounter, SweepOptions};
pub use error::{Result, SweepError};

#[cfg(test)]
mod tests;
