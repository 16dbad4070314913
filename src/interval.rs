//! GC pause intervals and the time-ordered interval sequence
//!
//! Each `GcInterval` is one garbage-collection pause on one disk. The sweep
//! consumes them in `(start, end)` order, which `OrderedIntervals` maintains
//! as intervals are ingested.

use serde::{Deserialize, Serialize};

/// One GC pause, as a `[start, end]` timestamp pair
///
/// Field order matters: the derived `Ord` compares `start` first and breaks
/// ties on `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GcInterval {
    pub start: i64,
    pub end: i64,
}

impl GcInterval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Pause length, or `None` if the interval ends before it starts
    pub fn duration(&self) -> Option<u64> {
        self.is_well_formed()
            .then_some(self.end.abs_diff(self.start))
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

/// All ingested intervals, kept sorted by `(start, end)` ascending
///
/// Duplicates are kept; two identical pauses on two disks count twice.
///
/// # Example
/// ```
/// use gccount::interval::{GcInterval, OrderedIntervals};
///
/// let mut seq = OrderedIntervals::new();
/// seq.insert(GcInterval::new(20, 30));
/// seq.insert(GcInterval::new(0, 10));
/// assert_eq!(seq.first(), Some(&GcInterval::new(0, 10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedIntervals {
    intervals: Vec<GcInterval>,
}

impl OrderedIntervals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from intervals in any order
    pub fn from_unsorted(mut intervals: Vec<GcInterval>) -> Self {
        intervals.sort();
        Self { intervals }
    }

    /// Insert one interval at its sorted position
    ///
    /// Equal intervals are placed after the existing ones. O(log n) search
    /// plus an O(n) shift; prefer `extend` for bulk loads.
    pub fn insert(&mut self, interval: GcInterval) {
        let idx = self.intervals.partition_point(|existing| *existing <= interval);
        self.intervals.insert(idx, interval);
    }

    pub fn all(&self) -> &[GcInterval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GcInterval> {
        self.intervals.iter()
    }

    pub fn first(&self) -> Option<&GcInterval> {
        self.intervals.first()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl Extend<GcInterval> for OrderedIntervals {
    /// Appends the batch then re-sorts; stable, so prior order among equal
    /// intervals is preserved.
    fn extend<I: IntoIterator<Item = GcInterval>>(&mut self, iter: I) {
        self.intervals.extend(iter);
        self.intervals.sort();
    }
}

impl FromIterator<GcInterval> for OrderedIntervals {
    fn from_iter<I: IntoIterator<Item = GcInterval>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OrderedIntervals {
    type Item = &'a GcInterval;
    type IntoIter = std::slice::Iter<'a, GcInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
