//! gccount - generational GC concurrency counter
//!
//! This library reads garbage-collection pause intervals from one log per
//! disk and measures how much time was spent with exactly 1, 2, 3, ...
//! pauses in progress at once (GCC-1, GCC-2, ...).

pub mod cli;
pub mod config;
pub mod ingest;
pub mod interval;
pub mod report;
pub mod stats;
pub mod sweep;
