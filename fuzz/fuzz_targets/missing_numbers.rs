// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the missing-numbers exercise.
//!
//! Arbitrary `i32`s, including zero, negatives and `i32::MIN`, so the
//! out-of-range handling gets as much traffic as the marking itself.

#![no_main]

use drillbook::{find_disappeared_numbers, find_disappeared_numbers_in_place, BoundedSequence};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|nums: Vec<i32>| {
    let counted = find_disappeared_numbers(&nums);
    let marked = find_disappeared_numbers_in_place(&mut nums.clone());
    assert_eq!(counted, marked, "variants disagree on {:?}", nums);

    // Valid input must survive a mark/restore cycle untouched.
    if let Ok(mut seq) = BoundedSequence::new(nums.clone()) {
        assert_eq!(seq.missing_in_place(), counted);
        assert_eq!(seq.as_slice(), nums.as_slice());
    }
});
