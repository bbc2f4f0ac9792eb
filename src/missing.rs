// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which of `1..=n` never shows up in a sequence of `n` values?
//!
//! Two ways to answer it. The counting variant allocates an `n + 1` tally and
//! leaves the input alone. The in-place variant flips the sign of the slot a
//! value points at, so afterwards every slot still positive belongs to a value
//! nobody mentioned. No extra memory, but the caller gets a scribbled-on slice
//! back; [`restore_marks`] undoes that.
//!
//! Values outside `1..=n` are skipped by both variants. They cannot be
//! "present" in the range, and indexing with them would panic.

use crate::verify::contracts::{check_missing_numbers, check_missing_numbers_in_place};

/// Stand-in for values that can't name a slot. Positive, so it never reads as a mark.
const OUT_OF_RANGE: i32 = i32::MAX;

/// Find the numbers in `1..=n` absent from `nums`, where `n = nums.len()`.
///
/// O(n) time, O(n) extra space. The output is ascending.
///
/// # Example
///
/// ```
/// use drillbook::find_disappeared_numbers;
///
/// assert_eq!(find_disappeared_numbers(&[4, 3, 2, 7, 8, 2, 3, 1]), vec![5, 6]);
/// ```
pub fn find_disappeared_numbers(nums: &[i32]) -> Vec<i32> {
    let n = nums.len();
    let mut seen = vec![0usize; n + 1];

    for &value in nums {
        if let Some(slot) = slot_of(value, n) {
            seen[slot + 1] += 1;
        }
    }

    let missing: Vec<i32> = (1..=n)
        .filter(|&value| seen[value] == 0)
        .map(|value| value as i32)
        .collect();

    check_missing_numbers(nums, &missing);
    missing
}

/// Same answer as [`find_disappeared_numbers`], using the slice itself as the
/// presence table.
///
/// Each in-range value `v` negates `nums[v - 1]`. Slots left positive at the end
/// are the missing numbers. The slice is **left marked**: call [`restore_marks`]
/// if the original values are needed again. Out-of-range values are overwritten
/// with `i32::MAX` before marking and cannot be restored.
pub fn find_disappeared_numbers_in_place(nums: &mut [i32]) -> Vec<i32> {
    let n = nums.len();

    // A slot must start positive for "still positive" to mean "never marked".
    for value in nums.iter_mut() {
        if slot_of(*value, n).is_none() {
            *value = OUT_OF_RANGE;
        }
    }

    for i in 0..n {
        // The slot may already be negated by an earlier value.
        let value = nums[i].checked_abs().unwrap_or(OUT_OF_RANGE);
        if let Some(slot) = slot_of(value, n) {
            if nums[slot] > 0 {
                nums[slot] = -nums[slot];
            }
        }
    }

    let missing: Vec<i32> = nums
        .iter()
        .enumerate()
        .filter(|&(_, &marker)| marker > 0)
        .map(|(slot, _)| slot as i32 + 1)
        .collect();

    check_missing_numbers_in_place(nums, &missing);
    missing
}

/// Undo the sign marks left by [`find_disappeared_numbers_in_place`].
///
/// Only exact for inputs whose values were all positive to begin with, which is
/// the contract of the exercise.
pub fn restore_marks(nums: &mut [i32]) {
    for value in nums.iter_mut() {
        if *value < 0 {
            *value = value.checked_abs().unwrap_or(OUT_OF_RANGE);
        }
    }
}

/// Zero-based slot for `value` if it lies in `1..=n`.
#[inline]
fn slot_of(value: i32, n: usize) -> Option<usize> {
    if value >= 1 && (value as usize) <= n {
        Some(value as usize - 1)
    } else {
        None
    }
}
