// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the minimum eating speed search.
//!
//! Pile sizes up to `u64::MAX` push the hour sums into saturation. The answer
//! has to stay tight regardless.

#![no_main]

use arbitrary::Arbitrary;
use drillbook::{hours_needed, min_eating_speed};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SpeedInput {
    piles: Vec<u64>,
    hours: u64,
}

fuzz_target!(|input: SpeedInput| {
    let rate = min_eating_speed(&input.piles, input.hours);
    assert!(rate >= 1);

    let upper = input.piles.iter().copied().max().unwrap_or(0).max(1);
    assert!(rate <= upper, "rate {} above largest pile {}", rate, upper);

    if hours_needed(&input.piles, rate) <= input.hours {
        assert!(rate == 1 || hours_needed(&input.piles, rate - 1) > input.hours);
    } else {
        assert_eq!(rate, upper);
    }
});
