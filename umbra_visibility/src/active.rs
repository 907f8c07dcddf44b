// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of occluders crossed by the current sweep ray, nearest first.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;
use umbra_geometry::{Segment, ray_segment_distance};

use crate::sort::SortStrategy;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Entry {
    occluder: usize,
    key: f64,
}

fn by_key(a: &Entry, b: &Entry) -> Ordering {
    a.key.total_cmp(&b.key).then(a.occluder.cmp(&b.occluder))
}

/// Occluders ordered by distance from the observer along a sweep ray.
///
/// Occluders are identified by their index into the slice given to
/// [`new`](Self::new). Keys are distances measured at the angle passed to the
/// last [`insert`](Self::insert) or [`rekey`](Self::rekey); ties go to the
/// lower index.
///
/// The set is a flat vector kept in key order. Removal is by identity, so an
/// entry whose key has gone stale can still be removed.
#[derive(Clone, Debug)]
pub struct ActiveOccluders<'a> {
    observer: Point,
    occluders: &'a [Segment],
    entries: Vec<Entry>,
    sort: SortStrategy,
}

impl<'a> ActiveOccluders<'a> {
    /// An empty set for rays cast from `observer`.
    pub fn new(observer: Point, occluders: &'a [Segment], sort: SortStrategy) -> Self {
        Self {
            observer,
            occluders,
            entries: Vec::new(),
            sort,
        }
    }

    /// The ray origin.
    pub fn observer(&self) -> Point {
        self.observer
    }

    /// Number of active occluders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no occluder is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add `occluder`, keyed by its distance along the ray at `angle`.
    ///
    /// Returns `false` and leaves the set unchanged when the index is out of
    /// range or the ray misses the occluder. An occluder that is already
    /// active has its entry replaced.
    pub fn insert(&mut self, occluder: usize, angle: f64) -> bool {
        let Some(segment) = self.occluders.get(occluder) else {
            return false;
        };
        let Some(key) = ray_segment_distance(self.observer, angle, segment.line()) else {
            return false;
        };
        self.remove(occluder);
        let entry = Entry { occluder, key };
        let at = self
            .entries
            .partition_point(|e| by_key(e, &entry) == Ordering::Less);
        self.entries.insert(at, entry);
        true
    }

    /// Remove `occluder`. Returns whether it was active.
    pub fn remove(&mut self, occluder: usize) -> bool {
        match self.entries.iter().position(|e| e.occluder == occluder) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Whether `occluder` is active.
    pub fn contains(&self, occluder: usize) -> bool {
        self.entries.iter().any(|e| e.occluder == occluder)
    }

    /// The active occluder closest to the observer.
    pub fn nearest(&self) -> Option<usize> {
        self.entries
            .first()
            .filter(|e| e.key.is_finite())
            .map(|e| e.occluder)
    }

    /// Distance to [`nearest`](Self::nearest) at the last keyed angle.
    pub fn nearest_distance(&self) -> Option<f64> {
        self.entries
            .first()
            .map(|e| e.key)
            .filter(|k| k.is_finite())
    }

    /// Recompute every key along the ray at `angle` and restore the order.
    ///
    /// Occluders the ray misses get an infinite key and sort last; they stay
    /// active until removed.
    pub fn rekey(&mut self, angle: f64) {
        let observer = self.observer;
        let occluders = self.occluders;
        for entry in &mut self.entries {
            entry.key = occluders
                .get(entry.occluder)
                .and_then(|s| ray_segment_distance(observer, angle, s.line()))
                .unwrap_or(f64::INFINITY);
        }
        self.sort.sort_by(&mut self.entries, by_key);
    }

    /// Active occluder indices with their keys, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|e| (e.occluder, e.key))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn walls() -> Vec<Segment> {
        vec![
            Segment::new((10.0, -10.0), (10.0, 10.0)).unwrap(),
            Segment::new((5.0, -5.0), (5.0, 5.0)).unwrap(),
            Segment::new((-3.0, -3.0), (-3.0, 3.0)).unwrap(),
        ]
    }

    #[test]
    fn nearest_is_smallest_distance() {
        let walls = walls();
        let mut active = ActiveOccluders::new(Point::ORIGIN, &walls, SortStrategy::default());
        assert!(active.insert(0, 0.0));
        assert_eq!(active.nearest(), Some(0));
        assert!(active.insert(1, 0.0));
        assert_eq!(active.nearest(), Some(1));
        assert_eq!(active.nearest_distance(), Some(5.0));
        let order: Vec<_> = active.iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn insert_skips_missed_occluders() {
        let walls = walls();
        let mut active = ActiveOccluders::new(Point::ORIGIN, &walls, SortStrategy::default());
        // Wall 2 is behind the observer when looking along +x.
        assert!(!active.insert(2, 0.0));
        // Parallel to the ray.
        assert!(!active.insert(0, FRAC_PI_2));
        assert!(!active.insert(99, 0.0));
        assert!(active.is_empty());
        assert_eq!(active.nearest(), None);
    }

    #[test]
    fn remove_is_by_identity() {
        let walls = walls();
        let mut active = ActiveOccluders::new(Point::ORIGIN, &walls, SortStrategy::Standard);
        active.insert(0, 0.0);
        active.insert(1, 0.0);
        // Keys go stale when the sweep turns; removal must still find the entry.
        active.rekey(PI);
        assert!(active.remove(1));
        assert!(!active.remove(1));
        assert!(active.contains(0));
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn reinsert_replaces_entry() {
        let walls = walls();
        let mut active = ActiveOccluders::new(Point::ORIGIN, &walls, SortStrategy::default());
        active.insert(0, 0.0);
        active.insert(0, 0.5);
        assert_eq!(active.len(), 1);
        let (_, key) = active.iter().next().unwrap();
        assert!(key > 10.0);
    }

    #[test]
    fn rekey_reorders_and_sinks_misses() {
        let walls = vec![
            Segment::new((4.0, 0.0), (4.0, 8.0)).unwrap(),
            Segment::new((12.0, -4.0), (0.0, 4.0)).unwrap(),
        ];
        let mut active = ActiveOccluders::new(Point::ORIGIN, &walls, SortStrategy::default());
        active.insert(0, 0.1);
        active.insert(1, 0.1);
        assert_eq!(active.nearest(), Some(0));
        // At 80 degrees the diagonal wall is closer and the vertical one is missed.
        active.rekey(80.0_f64.to_radians());
        assert_eq!(active.nearest(), Some(1));
        let keys: Vec<_> = active.iter().map(|(_, k)| k).collect();
        assert!(keys[1].is_infinite());
    }

    #[test]
    fn equal_keys_break_ties_by_index() {
        let walls = vec![
            Segment::new((5.0, -5.0), (5.0, 5.0)).unwrap(),
            Segment::new((5.0, -1.0), (5.0, 1.0)).unwrap(),
        ];
        let mut active = ActiveOccluders::new(Point::ORIGIN, &walls, SortStrategy::default());
        active.insert(1, 0.0);
        active.insert(0, 0.0);
        assert_eq!(active.nearest(), Some(0));
    }
}
