// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over the answer: the slowest rate that still finishes in time.
//!
//! Each pile of size `p` takes `⌈p / k⌉` hours at rate `k`. Total time only goes
//! down as `k` goes up, so "finishes within `h` hours" flips from false to true
//! exactly once across `1..=max(piles)`. That flip point is the answer.
//!
//! # Sentinels
//!
//! | Input                      | Result                         |
//! |----------------------------|--------------------------------|
//! | no piles, or all zero      | `1` (nothing to eat)           |
//! | `h < piles.len()`          | `max(piles)` (best effort)     |
//!
//! The second row is the converged value of the search: no rate can beat one
//! hour per pile, so the search runs all the way up to its upper bound.

use crate::verify::contracts::check_min_speed;

/// Total hours to finish every pile at `rate` units per hour.
///
/// A zero rate never finishes and reports `u64::MAX`. Sums saturate rather
/// than overflow.
///
/// ```
/// use drillbook::hours_needed;
///
/// assert_eq!(hours_needed(&[3, 6, 7, 11], 4), 8);
/// ```
pub fn hours_needed(piles: &[u64], rate: u64) -> u64 {
    if rate == 0 {
        return u64::MAX;
    }
    piles
        .iter()
        .fold(0u64, |total, &pile| total.saturating_add(pile.div_ceil(rate)))
}

/// Minimum integer rate `k` with `hours_needed(piles, k) <= h`.
///
/// Standard lower-bound binary search over `[1, max(piles)]`: when `mid` is fast
/// enough the upper bound drops to `mid`, otherwise the lower bound rises past it.
/// O(n log max) time.
///
/// ```
/// use drillbook::min_eating_speed;
///
/// assert_eq!(min_eating_speed(&[3, 6, 7, 11], 8), 4);
/// assert_eq!(min_eating_speed(&[30, 11, 23, 4, 20], 5), 30);
/// ```
pub fn min_eating_speed(piles: &[u64], h: u64) -> u64 {
    let upper = piles.iter().copied().max().unwrap_or(0).max(1);
    let mut lo = 1u64;
    let mut hi = upper;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let hours = hours_needed(piles, mid);
        log::trace!("rate {} needs {} hours (budget {})", mid, hours, h);
        if hours <= h {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    check_min_speed(piles, h, lo);
    lo
}
