// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable hybrid merge/insertion sort.
//!
//! Sweep events arrive nearly sorted and the active set is re-sorted after
//! every small change, so short runs are finished by insertion sort and longer
//! ones merged.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// How the sweep orders events, ray angles and the active set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortStrategy {
    /// [`hybrid_sort_by`] with the given insertion-sort threshold.
    Hybrid {
        /// Runs of at most this many items are insertion sorted.
        threshold: usize,
    },
    /// The standard library's stable sort.
    Standard,
}

impl Default for SortStrategy {
    fn default() -> Self {
        Self::Hybrid { threshold: 10 }
    }
}

impl SortStrategy {
    /// Stable sort of `items` with `compare`.
    pub fn sort_by<T: Copy, F>(self, items: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Self::Hybrid { threshold } => hybrid_sort_by(items, threshold, compare),
            Self::Standard => items.sort_by(compare),
        }
    }
}

/// Stable in-place insertion sort.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Stable merge sort that hands runs of at most `threshold` items to
/// [`insertion_sort_by`].
///
/// A threshold of 0 or 1 is a plain merge sort.
pub fn hybrid_sort_by<T: Copy, F>(items: &mut [T], threshold: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let mut scratch = Vec::with_capacity(items.len() / 2 + 1);
    sort_run(items, threshold, &mut scratch, &mut compare);
}

fn sort_run<T: Copy, F>(items: &mut [T], threshold: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= 1 {
        return;
    }
    if len <= threshold {
        insertion_sort_by(items, &mut *compare);
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        sort_run(left, threshold, scratch, compare);
        sort_run(right, threshold, scratch, compare);
    }
    // Already in order across the split.
    if compare(&items[mid], &items[mid - 1]) != Ordering::Less {
        return;
    }
    merge(items, mid, scratch, compare);
}

fn merge<T: Copy, F>(items: &mut [T], mid: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    scratch.clear();
    scratch.extend_from_slice(&items[..mid]);
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < scratch.len() && j < items.len() {
        // Take from the right only when strictly smaller; keeps equal items in order.
        if compare(&items[j], &scratch[i]) == Ordering::Less {
            items[k] = items[j];
            j += 1;
        } else {
            items[k] = scratch[i];
            i += 1;
        }
        k += 1;
    }
    while i < scratch.len() {
        items[k] = scratch[i];
        i += 1;
        k += 1;
    }
}
