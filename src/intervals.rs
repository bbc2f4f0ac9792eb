// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fewest removals that leave a set of intervals pairwise disjoint.
//!
//! Sort by start, then sweep while holding one "kept" interval. Each new interval
//! either clears the kept one's end (keep it, move on) or overlaps it (one of the
//! two must go). On overlap the greedy keeps whichever ends first, since an earlier
//! end leaves the most room for everything still to come.
//!
//! Intervals are half-open: `[1, 2]` and `[2, 3]` touch but do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::verify::contracts::{check_kept_intervals, check_removal_count};

/// A `[start, end)` span.
///
/// Ordering is by `start`, then `end`, which is the order the sweep needs.
/// Serializes as a two-element array: `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Interval { start, end }
    }

    /// True if the two spans share any point.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Interval { start, end }
    }
}

impl From<Interval> for (i64, i64) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// What the sweep decided about one interval.
enum Verdict {
    /// Doesn't overlap the kept interval; becomes the new kept one.
    Keep(Interval),
    /// Overlaps and ends no later; takes the kept interval's place.
    Replace(Interval),
    /// Overlaps and ends later; dropped.
    Drop,
}

/// Sort `intervals` and run the earliest-end greedy, reporting each verdict.
/// Returns the number of removals.
fn sweep(intervals: &mut [Interval], mut on_verdict: impl FnMut(Verdict)) -> usize {
    intervals.sort_unstable();

    let Some((&first, rest)) = intervals.split_first() else {
        return 0;
    };

    on_verdict(Verdict::Keep(first));
    let mut kept = first;
    let mut removed = 0;

    for &current in rest {
        if current.start < kept.end {
            removed += 1;
            if current.end <= kept.end {
                kept = current;
                on_verdict(Verdict::Replace(current));
            } else {
                on_verdict(Verdict::Drop);
            }
        } else {
            kept = current;
            on_verdict(Verdict::Keep(current));
        }
    }

    removed
}

/// Minimum number of intervals to remove so the rest never overlap.
///
/// Sorts `intervals` in place by `(start, end)`. O(n log n).
///
/// ```
/// use drillbook::{erase_overlap_intervals, Interval};
///
/// let mut intervals: Vec<Interval> = vec![(1, 2).into(), (2, 3).into(), (3, 4).into(), (1, 3).into()];
/// assert_eq!(erase_overlap_intervals(&mut intervals), 1);
/// ```
pub fn erase_overlap_intervals(intervals: &mut [Interval]) -> usize {
    let removed = sweep(intervals, |_| {});
    check_removal_count(intervals.len(), removed);
    removed
}

/// The intervals the greedy keeps, in start order.
///
/// Always `intervals.len() - erase_overlap_intervals(..)` long, and pairwise
/// disjoint. The input is left untouched.
pub fn kept_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    let mut kept: Vec<Interval> = Vec::new();

    let removed = sweep(&mut sorted, |verdict| match verdict {
        Verdict::Keep(interval) => kept.push(interval),
        Verdict::Replace(interval) => {
            if let Some(last) = kept.last_mut() {
                *last = interval;
            }
        }
        Verdict::Drop => {}
    });

    check_kept_intervals(intervals.len(), removed, &kept);
    kept
}
