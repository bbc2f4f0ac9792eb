// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime postconditions for every exercise.
//!
//! Each exercise calls its check right before returning. The checks:
//!
//! 1. Are **zero-cost in release builds** (`debug_assert!`, and the expensive
//!    ones bail out early unless `debug_assertions` is on)
//! 2. Restate the answer's defining property, independent of how it was found
//! 3. Panic with a `Contract violation:` prefix so failures are easy to grep
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                 | Property                                   |
//! |-----------------------------------|--------------------------------------------|
//! | `check_missing_numbers`           | ascending, in `1..=n`, absent from input   |
//! | `check_missing_numbers_in_place`  | ascending, in `1..=n`, slot left unmarked  |
//! | `check_intersection`              | result reachable from both heads           |
//! | `check_min_speed`                 | feasible and minimal (when feasible at all)|
//! | `check_unique_run`                | run is distinct and as long as reported    |
//! | `check_removal_count`             | at most `n - 1` removals                   |
//! | `check_kept_intervals`            | kept set disjoint, `kept + removed == n`   |
//! | `check_bijection`                 | no symbol or word bound twice              |

use std::collections::HashSet;
use std::rc::Rc;

use crate::intervals::Interval;
use crate::list::{iter, ListNode};
use crate::speed::hours_needed;

// ============================================================================
// MISSING NUMBERS
// ============================================================================

/// Check the counting variant's output against the untouched input.
///
/// # Panics (debug builds only)
/// Panics if the output is unsorted, out of range, or lists a value that occurs.
#[inline]
pub fn check_missing_numbers(nums: &[i32], missing: &[i32]) {
    if !cfg!(debug_assertions) {
        return;
    }

    check_ascending_in_range(missing, nums.len());

    let present: HashSet<i32> = nums.iter().copied().collect();
    for value in missing {
        debug_assert!(
            !present.contains(value),
            "Contract violation: missing value {} occurs in the input",
            value
        );
    }
}

/// Check the in-place variant's output against the marked slice it leaves behind.
#[inline]
pub fn check_missing_numbers_in_place(marked: &[i32], missing: &[i32]) {
    if !cfg!(debug_assertions) {
        return;
    }

    check_ascending_in_range(missing, marked.len());

    for &value in missing {
        let slot = marked[value as usize - 1];
        debug_assert!(
            slot > 0,
            "Contract violation: slot for missing value {} was marked ({})",
            value,
            slot
        );
    }
}

fn check_ascending_in_range(values: &[i32], n: usize) {
    for pair in values.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: missing numbers not ascending ({} before {})",
            pair[0],
            pair[1]
        );
    }
    for &value in values {
        debug_assert!(
            value >= 1 && value as usize <= n,
            "Contract violation: missing value {} outside 1..={}",
            value,
            n
        );
    }
}

// ============================================================================
// LIST INTERSECTION
// ============================================================================

/// Check that a reported meeting node really belongs to both chains.
#[inline]
pub fn check_intersection(
    a: Option<&Rc<ListNode>>,
    b: Option<&Rc<ListNode>>,
    meet: Option<&Rc<ListNode>>,
) {
    if !cfg!(debug_assertions) {
        return;
    }

    if let Some(node) = meet {
        debug_assert!(
            iter(a).any(|n| Rc::ptr_eq(n, node)),
            "Contract violation: intersection node (val {}) not reachable from first head",
            node.val
        );
        debug_assert!(
            iter(b).any(|n| Rc::ptr_eq(n, node)),
            "Contract violation: intersection node (val {}) not reachable from second head",
            node.val
        );
    }
}

// ============================================================================
// MINIMUM SPEED
// ============================================================================

/// Check that `rate` is the smallest feasible rate, or the search's upper bound
/// when nothing in range is feasible.
#[inline]
pub fn check_min_speed(piles: &[u64], h: u64, rate: u64) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert!(rate >= 1, "Contract violation: rate {} below 1", rate);

    if hours_needed(piles, rate) <= h {
        debug_assert!(
            rate == 1 || hours_needed(piles, rate - 1) > h,
            "Contract violation: rate {} is feasible but so is {}",
            rate,
            rate - 1
        );
    } else {
        let upper = piles.iter().copied().max().unwrap_or(1);
        debug_assert_eq!(
            rate, upper,
            "Contract violation: infeasible budget {} should converge to max pile",
            h
        );
    }
}

// ============================================================================
// UNIQUE RUN
// ============================================================================

/// Check that `run` is a substring of `s` made of `len` distinct characters.
#[inline]
pub fn check_unique_run(s: &str, run: &str, len: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert!(
        s.contains(run),
        "Contract violation: run {:?} is not a substring of the input",
        run
    );

    let distinct: HashSet<char> = run.chars().collect();
    debug_assert_eq!(
        distinct.len(),
        len,
        "Contract violation: run {:?} has {} distinct chars, reported {}",
        run,
        distinct.len(),
        len
    );
    debug_assert_eq!(
        run.chars().count(),
        len,
        "Contract violation: run {:?} repeats a character",
        run
    );
}

// ============================================================================
// INTERVALS
// ============================================================================

/// Something always survives a non-empty sweep.
#[inline]
pub fn check_removal_count(len: usize, removed: usize) {
    debug_assert!(
        removed <= len.saturating_sub(1),
        "Contract violation: removed {} of {} intervals",
        removed,
        len
    );
}

/// Check that the kept set is disjoint and accounts for every interval.
#[inline]
pub fn check_kept_intervals(len: usize, removed: usize, kept: &[Interval]) {
    check_removal_count(len, removed);

    debug_assert_eq!(
        kept.len() + removed,
        len,
        "Contract violation: kept {} + removed {} != {} intervals",
        kept.len(),
        removed,
        len
    );

    for pair in kept.windows(2) {
        debug_assert!(
            pair[1].start >= pair[0].end,
            "Contract violation: kept intervals {} and {} overlap",
            pair[0],
            pair[1]
        );
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// Check that no symbol and no word appears in two pairs.
#[inline]
pub fn check_bijection(pairs: &[(char, &str)]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let symbols: HashSet<char> = pairs.iter().map(|&(symbol, _)| symbol).collect();
    let words: HashSet<&str> = pairs.iter().map(|&(_, word)| word).collect();

    debug_assert_eq!(
        symbols.len(),
        pairs.len(),
        "Contract violation: a symbol is bound to two words"
    );
    debug_assert_eq!(
        words.len(),
        pairs.len(),
        "Contract violation: a word is bound to two symbols"
    );
}
