// Sweep failure taxonomy
//
// Every variant means the input broke an assumption the sweep relies on.
// None of them are recoverable for the current run: a histogram produced
// after an invariant violation is not reported.

use thiserror::Error;

/// Errors raised by the concurrency sweep
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    #[error("No GC intervals to analyze")]
    EmptyInput,

    #[error("Active end-time set is empty during {operation}")]
    EmptyState { operation: &'static str },

    #[error("Concurrency depth dropped below 1 with {open} interval(s) still open")]
    DepthUnderflow { open: usize },

    #[error("Concurrency depth {depth} exceeds the number of disks ({num_disk})")]
    DepthOverflow { depth: usize, num_disk: usize },

    #[error("Sweep time moved backwards from {from} to {to}")]
    NonMonotonicTime { from: i64, to: i64 },

    #[error("Accumulated time at depth {depth} does not fit in 64 bits")]
    AccumulatorOverflow { depth: usize },
}

/// Result type for sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;
