// Sweep behavior on hand-checked interval layouts
//
// Each case lists the intervals, the disk count, and the expected buckets
// worked out event by event.

use super::*;
use crate::interval::{GcInterval, OrderedIntervals};

fn intervals(pairs: &[(i64, i64)]) -> OrderedIntervals {
    pairs
        .iter()
        .map(|&(start, end)| GcInterval::new(start, end))
        .collect()
}

fn sweep(num_disk: usize, pairs: &[(i64, i64)]) -> Result<crate::stats::GccStatistics> {
    count_gcc(num_disk, &intervals(pairs), SweepOptions::default())
}

fn sweep_uncorrected(
    num_disk: usize,
    pairs: &[(i64, i64)],
) -> Result<crate::stats::GccStatistics> {
    count_gcc(
        num_disk,
        &intervals(pairs),
        SweepOptions {
            event_correction: false,
        },
    )
}

#[test]
fn test_disjoint_intervals_single_disk() {
    let stats = sweep(1, &[(0, 10), (20, 30)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![20]);
    assert_eq!(stats.idle_time, 10);
    assert_eq!(stats.event_corrections, 0);
    assert_eq!(stats.min_time, 0);
    assert_eq!(stats.max_time, 30);
    assert_eq!(stats.num_gc, 2);
}

#[test]
fn test_identical_intervals_two_disks() {
    let stats = sweep(2, &[(0, 10), (0, 10)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![0, 10]);
    assert_eq!(stats.max_time, 10);
}

#[test]
fn test_nested_intervals() {
    let stats = sweep(2, &[(0, 10), (2, 5)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![2 + 5, 3]);
}

#[test]
fn test_touching_intervals_stay_at_depth_one() {
    let stats = sweep(1, &[(0, 5), (5, 10)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![10]);
    assert_eq!(stats.idle_time, 0);
    assert_eq!(stats.max_time, 10);
}

#[test]
fn test_single_interval() {
    let stats = sweep(1, &[(100, 200)]).unwrap();
    assert_eq!(stats.min_time, 100);
    assert_eq!(stats.max_time, 200);
    assert_eq!(stats.gcc_durations, vec![100]);
    assert_eq!(stats.num_gc, 1);
}

#[test]
fn test_single_interval_on_many_disks() {
    let stats = sweep(4, &[(100, 200)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![100, 0, 0, 0]);
    assert_eq!(stats.num_disk, 4);
}

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(sweep(3, &[]), Err(SweepError::EmptyInput));
}

#[test]
fn test_three_level_staircase() {
    let stats = sweep(3, &[(0, 9), (1, 8), (2, 7)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![2, 2, 5]);
    assert_eq!(stats.bucket_total(), 9);
    assert_eq!(stats.peak_depth(), Some(3));
}

#[test]
fn test_close_then_open_adds_unit_correction() {
    // [0,10] and [2,5] overlap; [7,12] opens after [2,5] closed
    let stats = sweep(2, &[(0, 10), (2, 5), (7, 12)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![7, 6]);
    assert_eq!(stats.event_corrections, 1);
    assert_eq!(stats.max_time, 12);
}

#[test]
fn test_correction_can_be_disabled() {
    let stats = sweep_uncorrected(2, &[(0, 10), (2, 5), (7, 12)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![6, 6]);
    assert_eq!(stats.event_corrections, 0);
    assert_eq!(stats.bucket_total(), stats.span());
}

#[test]
fn test_no_correction_at_depth_zero() {
    let stats = sweep(1, &[(0, 1), (5, 6), (10, 11)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![3]);
    assert_eq!(stats.idle_time, 8);
    assert_eq!(stats.event_corrections, 0);
}

#[test]
fn test_hand_over_with_duplicate_earliest_end() {
    let stats = sweep(2, &[(0, 5), (0, 5), (5, 10)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![5, 5]);
    assert_eq!(stats.max_time, 10);
}

#[test]
fn test_zero_length_interval() {
    let stats = sweep(1, &[(4, 4)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![0]);
    assert_eq!(stats.min_time, 4);
    assert_eq!(stats.max_time, 4);
}

#[test]
fn test_negative_timestamps() {
    let stats = sweep(2, &[(-10, -5), (-7, 0)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![8, 2]);
    assert_eq!(stats.min_time, -10);
    assert_eq!(stats.max_time, 0);
}

#[test]
fn test_interval_longer_than_i64_max() {
    let stats = sweep(1, &[(i64::MIN, 0)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![1u64 << 63]);
    assert_eq!(stats.min_time, i64::MIN);
    assert_eq!(stats.max_time, 0);
    assert_eq!(stats.span(), 1u64 << 63);
}

#[test]
fn test_full_range_interval() {
    let stats = sweep(1, &[(i64::MIN, i64::MAX)]).unwrap();
    assert_eq!(stats.gcc_durations, vec![u64::MAX]);
    assert_eq!(stats.bucket_total(), stats.span());
}

#[test]
fn test_bucket_overflow_is_an_error() {
    // Two zero-length pauses nested in a full-range one: depth 1 collects the
    // whole span plus one unit correction, which is 2^64
    assert_eq!(
        sweep(2, &[(i64::MIN, i64::MAX), (0, 0), (1, 1)]),
        Err(SweepError::AccumulatorOverflow { depth: 1 })
    );
}

#[test]
fn test_depth_beyond_disk_count_fails() {
    assert_eq!(
        sweep(1, &[(0, 10), (0, 10)]),
        Err(SweepError::DepthOverflow {
            depth: 2,
            num_disk: 1
        })
    );
}

#[test]
fn test_zero_disks_fails() {
    assert_eq!(
        sweep(0, &[(0, 10)]),
        Err(SweepError::DepthOverflow {
            depth: 1,
            num_disk: 0
        })
    );
}

#[test]
fn test_inverted_interval_is_detected() {
    // [5,2] opens nested inside [0,10] but "ends" before it started
    assert_eq!(
        sweep(2, &[(0, 10), (5, 2)]),
        Err(SweepError::NonMonotonicTime { from: 5, to: 2 })
    );
}

#[test]
fn test_conservation_with_corrections() {
    let pairs = [(0, 10), (2, 5), (7, 12), (20, 25), (21, 30), (30, 31)];
    let stats = sweep(3, &pairs).unwrap();
    assert_eq!(
        stats.bucket_total() + stats.idle_time,
        stats.span() + stats.event_corrections
    );
}

#[test]
fn test_step_and_drain_track_depth() {
    let mut counter = SweepCounter::new(2, SweepOptions::default());
    // Without a seed, there is no open interval to compare against
    assert_eq!(
        counter.step(&GcInterval::new(0, 1)),
        Err(SweepError::EmptyState {
            operation: "peek_min"
        })
    );
    assert_eq!(counter.depth(), 0);
    assert!(counter.drain().is_ok());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SweepError::DepthOverflow {
            depth: 3,
            num_disk: 2
        }
        .to_string(),
        "Concurrency depth 3 exceeds the number of disks (2)"
    );
    assert_eq!(
        SweepError::EmptyInput.to_string(),
        "No GC intervals to analyze"
    );
}
