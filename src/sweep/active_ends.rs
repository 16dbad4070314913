// End times of the intervals open at the current sweep position
//
// Only insert / peek-min / pop-min are needed, so a min-heap backs it.

use super::error::{Result, SweepError};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Multiset of end timestamps, smallest first
///
/// Its size is the current concurrency depth.
#[derive(Debug, Clone, Default)]
pub struct ActiveEnds {
    heap: BinaryHeap<Reverse<i64>>,
}

impl ActiveEnds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `end_time`
    pub fn insert(&mut self, end_time: i64) {
        self.heap.push(Reverse(end_time));
    }

    /// Smallest end time, without removing it
    pub fn peek_min(&self) -> Result<i64> {
        self.heap
            .peek()
            .map(|Reverse(end)| *end)
            .ok_or(SweepError::EmptyState {
                operation: "peek_min",
            })
    }

    /// Remove and return one occurrence of the smallest end time
    pub fn pop_min(&mut self) -> Result<i64> {
        self.heap
            .pop()
            .map(|Reverse(end)| end)
            .ok_or(SweepError::EmptyState { operation: "pop_min" })
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_ascending_order() {
        let mut ends = ActiveEnds::new();
        for end in [30, 10, 20, 10] {
            ends.insert(end);
        }
        assert_eq!(ends.len(), 4);
        assert_eq!(ends.peek_min(), Ok(10));

        let drained: Vec<i64> = std::iter::from_fn(|| ends.pop_min().ok()).collect();
        assert_eq!(drained, vec![10, 10, 20, 30]);
        assert!(ends.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut ends = ActiveEnds::new();
        ends.insert(5);
        assert_eq!(ends.peek_min(), Ok(5));
        assert_eq!(ends.peek_min(), Ok(5));
        assert_eq!(ends.len(), 1);
    }

    #[test]
    fn test_empty_state_errors() {
        let mut ends = ActiveEnds::new();
        assert_eq!(
            ends.peek_min(),
            Err(SweepError::EmptyState {
                operation: "peek_min"
            })
        );
        assert_eq!(
            ends.pop_min(),
            Err(SweepError::EmptyState { operation: "pop_min" })
        );
    }

    #[test]
    fn test_negative_timestamps() {
        let mut ends = ActiveEnds::new();
        ends.insert(-3);
        ends.insert(-10);
        assert_eq!(ends.pop_min(), Ok(-10));
        assert_eq!(ends.pop_min(), Ok(-3));
    }
}
