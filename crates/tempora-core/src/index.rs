//! Ordered time index over the edge log

use crate::edge::EdgeId;
use crate::time::Timestamp;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Maps each distinct timestamp to the log positions that occurred at it
///
/// Keys come back in ascending order with no duplicates, and every bucket
/// keeps its positions in insertion order. Range lookups are logarithmic in
/// the number of distinct timestamps.
#[derive(Debug, Clone, Default)]
pub struct TimeIndex {
    buckets: BTreeMap<Timestamp, Vec<EdgeId>>,
}

impl TimeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that edge `id` occurred at `time`
    ///
    /// Returns `true` when `time` was not indexed before.
    pub fn insert(&mut self, time: Timestamp, id: EdgeId) -> bool {
        match self.buckets.entry(time) {
            btree_map::Entry::Occupied(mut bucket) => {
                bucket.get_mut().push(id);
                false
            }
            btree_map::Entry::Vacant(slot) => {
                slot.insert(vec![id]);
                true
            }
        }
    }

    /// Number of distinct timestamps
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Edges that occurred at exactly `time`, in insertion order
    pub fn bucket(&self, time: Timestamp) -> &[EdgeId] {
        self.buckets.get(&time).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct timestamps, ascending
    pub fn timestamps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.buckets.keys().copied()
    }

    pub fn first(&self) -> Option<Timestamp> {
        self.buckets.keys().next().copied()
    }

    pub fn last(&self) -> Option<Timestamp> {
        self.buckets.keys().next_back().copied()
    }

    /// Log positions with `start <= t <= end`, ascending by time
    ///
    /// `None` leaves that side unbounded. A NaN bound or a reversed window
    /// selects nothing.
    pub fn range(&self, start: Option<f64>, end: Option<f64>) -> IndexRange<'_> {
        let lower = match start {
            None => Bound::Unbounded,
            Some(s) => match Timestamp::bound(s) {
                Some(t) => Bound::Included(t),
                None => return IndexRange::empty(),
            },
        };
        let upper = match end {
            None => Bound::Unbounded,
            Some(e) => match Timestamp::bound(e) {
                Some(t) => Bound::Included(t),
                None => return IndexRange::empty(),
            },
        };

        if let (Bound::Included(lo), Bound::Included(hi)) = (lower, upper) {
            if lo > hi {
                return IndexRange::empty();
            }
        }

        IndexRange {
            buckets: Some(self.buckets.range((lower, upper))),
            current: Default::default(),
        }
    }
}

/// Iterator over the log positions selected by [`TimeIndex::range`]
pub struct IndexRange<'a> {
    buckets: Option<btree_map::Range<'a, Timestamp, Vec<EdgeId>>>,
    current: std::slice::Iter<'a, EdgeId>,
}

impl<'a> IndexRange<'a> {
    fn empty() -> Self {
        Self {
            buckets: None,
            current: Default::default(),
        }
    }
}

impl<'a> Iterator for IndexRange<'a> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        loop {
            if let Some(id) = self.current.next() {
                return Some(*id);
            }
            let (_, bucket) = self.buckets.as_mut()?.next()?;
            self.current = bucket.iter();
        }
    }
}
