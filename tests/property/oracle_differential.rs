//! Differential testing: compare each exercise against its oracle.
//!
//! If they disagree, the oracle is right.

use super::oracles::{
    oracle_longest_unique, oracle_min_removals, oracle_min_speed, oracle_missing,
    oracle_word_pattern,
};
use drillbook::{
    erase_overlap_intervals, find_disappeared_numbers, find_disappeared_numbers_in_place,
    length_of_longest_substring, min_eating_speed, word_pattern, Interval,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Mostly in-range values, with some strays below and above.
fn nums_strategy() -> impl Strategy<Value = Vec<i32>> {
    (0usize..40).prop_flat_map(|n| {
        let hi = n as i32 + 3;
        prop::collection::vec(-3..=hi, n)
    })
}

/// Text over a small alphabet so repeats are common, plus some multi-byte chars.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'c', 'd', 'e', ' ', 'é', 'ñ', '🦀', 'ఆ']),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Well-formed intervals (`start < end`) on a short axis, so overlaps are common.
fn intervals_strategy() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(
        (-10i64..10, 1i64..6).prop_map(|(start, width)| Interval::new(start, start + width)),
        0..12,
    )
}

/// Pattern and words drawn from tiny alphabets so both matches and clashes show up.
fn pattern_strategy() -> impl Strategy<Value = (String, String)> {
    (1usize..8).prop_flat_map(|len| {
        (
            prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), len),
            prop::collection::vec(prop::sample::select(vec!["dog", "cat", "fish"]), len - 1..=len + 1),
        )
            .prop_map(|(symbols, words)| (symbols.into_iter().collect(), words.join(" ")))
    })
}

// =============================================================================
// MISSING NUMBERS
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Counting variant matches set difference.
    #[test]
    fn diff_missing_counting(nums in nums_strategy()) {
        prop_assert_eq!(find_disappeared_numbers(&nums), oracle_missing(&nums));
    }

    /// Sign-flip variant matches set difference, strays included.
    #[test]
    fn diff_missing_in_place(nums in nums_strategy()) {
        let mut scratch = nums.clone();
        prop_assert_eq!(
            find_disappeared_numbers_in_place(&mut scratch),
            oracle_missing(&nums)
        );
    }
}

// =============================================================================
// MINIMUM SPEED
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Binary search finds the same rate as a linear scan.
    #[test]
    fn diff_min_speed(
        piles in prop::collection::vec(1u64..200, 1..12),
        extra in 0u64..30,
    ) {
        let h = piles.len() as u64 + extra;
        prop_assert_eq!(min_eating_speed(&piles, h), oracle_min_speed(&piles, h));
    }

    /// Budgets below the pile count agree on the fallback too.
    #[test]
    fn diff_min_speed_short_budget(piles in prop::collection::vec(1u64..200, 2..12)) {
        let h = piles.len() as u64 - 1;
        prop_assert_eq!(min_eating_speed(&piles, h), oracle_min_speed(&piles, h));
    }
}

// =============================================================================
// LONGEST UNIQUE RUN
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Sliding window matches the all-substrings scan.
    #[test]
    fn diff_longest_unique(text in text_strategy()) {
        prop_assert_eq!(length_of_longest_substring(&text), oracle_longest_unique(&text));
    }

    /// Arbitrary Unicode, not just the curated alphabet.
    #[test]
    fn diff_longest_unique_any_text(text in "\\PC{0,24}") {
        prop_assert_eq!(length_of_longest_substring(&text), oracle_longest_unique(&text));
    }
}

// =============================================================================
// NON-OVERLAPPING INTERVALS
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Greedy removal count is optimal.
    #[test]
    fn diff_min_removals(intervals in intervals_strategy()) {
        let expected = oracle_min_removals(&intervals);
        let mut scratch = intervals.clone();
        prop_assert_eq!(erase_overlap_intervals(&mut scratch), expected, "{:?}", intervals);
    }
}

// =============================================================================
// WORD PATTERN
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Single-map-plus-set check agrees with the two-map check.
    #[test]
    fn diff_word_pattern((pattern, words) in pattern_strategy()) {
        prop_assert_eq!(
            word_pattern(&pattern, &words),
            oracle_word_pattern(&pattern, &words),
            "pattern {:?} words {:?}", pattern, words
        );
    }
}
