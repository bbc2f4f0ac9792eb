// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for non-overlapping interval removal.
//!
//! Bounds span the whole `i64` range and may be reversed. The sweep must not
//! overflow, and kept plus removed must account for every interval.

#![no_main]

use drillbook::{erase_overlap_intervals, kept_intervals, Interval, IntervalSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pairs: Vec<(i64, i64)>| {
    let intervals: Vec<Interval> = pairs.into_iter().map(Interval::from).collect();

    let removed = erase_overlap_intervals(&mut intervals.clone());
    let kept = kept_intervals(&intervals);
    assert_eq!(kept.len() + removed, intervals.len());

    for pair in kept.windows(2) {
        assert!(pair[1].start >= pair[0].end, "{} overlaps {}", pair[0], pair[1]);
    }

    // The validated path agrees whenever the input is well-formed.
    if let Ok(set) = IntervalSet::new(intervals.clone()) {
        assert_eq!(set.removals(), removed);
        assert_eq!(set.kept(), kept);
    }
});
