//! Worked examples and edge cases for the array, string and interval exercises.

use super::common::{assert_all_distinct, assert_disjoint_and_sorted, make_intervals};
use drillbook::{
    erase_overlap_intervals, find_disappeared_numbers, find_disappeared_numbers_in_place,
    hours_needed, kept_intervals, length_of_longest_substring, longest_unique_run,
    min_eating_speed, restore_marks, word_pattern,
};

// ============================================================================
// MISSING NUMBERS
// ============================================================================

#[test]
fn test_missing_both_variants_agree_on_examples() {
    let inputs: [&[i32]; 5] = [
        &[4, 3, 2, 7, 8, 2, 3, 1],
        &[1, 1],
        &[1],
        &[2, 2, 2, 2],
        &[5, 4, 3, 2, 1],
    ];
    for nums in inputs {
        let counted = find_disappeared_numbers(nums);
        let marked = find_disappeared_numbers_in_place(&mut nums.to_vec());
        assert_eq!(counted, marked, "variants disagree on {:?}", nums);
    }
}

#[test]
fn test_missing_empty_input() {
    assert!(find_disappeared_numbers(&[]).is_empty());
    assert!(find_disappeared_numbers_in_place(&mut []).is_empty());
}

#[test]
fn test_missing_all_present() {
    assert!(find_disappeared_numbers(&[3, 1, 2]).is_empty());
}

#[test]
fn test_missing_ignores_out_of_range_values() {
    // n = 4, so 0, -7 and 9 mark nothing.
    let nums = [0, -7, 9, 2];
    assert_eq!(find_disappeared_numbers(&nums), vec![1, 3, 4]);
    assert_eq!(find_disappeared_numbers_in_place(&mut nums.to_vec()), vec![1, 3, 4]);
}

#[test]
fn test_missing_handles_extreme_values() {
    let nums = [i32::MIN, i32::MAX, 1];
    assert_eq!(find_disappeared_numbers(&nums), vec![2, 3]);
    assert_eq!(find_disappeared_numbers_in_place(&mut nums.to_vec()), vec![2, 3]);
}

#[test]
fn test_restore_marks_recovers_valid_input() {
    let original = vec![4, 3, 2, 7, 8, 2, 3, 1];
    let mut nums = original.clone();
    find_disappeared_numbers_in_place(&mut nums);
    assert_ne!(nums, original, "in-place variant should leave marks");
    restore_marks(&mut nums);
    assert_eq!(nums, original);
}

// ============================================================================
// MINIMUM SPEED
// ============================================================================

#[test]
fn test_speed_examples() {
    assert_eq!(min_eating_speed(&[3, 6, 7, 11], 8), 4);
    assert_eq!(min_eating_speed(&[30, 11, 23, 4, 20], 5), 30);
    assert_eq!(min_eating_speed(&[30, 11, 23, 4, 20], 6), 23);
}

#[test]
fn test_speed_is_minimal() {
    let piles = [3, 6, 7, 11];
    let rate = min_eating_speed(&piles, 8);
    assert!(hours_needed(&piles, rate) <= 8);
    assert!(hours_needed(&piles, rate - 1) > 8);
}

#[test]
fn test_speed_generous_budget_gives_one() {
    assert_eq!(min_eating_speed(&[3, 6, 7, 11], 1_000), 1);
}

#[test]
fn test_speed_degenerate_inputs() {
    assert_eq!(min_eating_speed(&[], 5), 1);
    assert_eq!(min_eating_speed(&[0, 0], 1), 1);
    // Fewer hours than piles: nothing works, the largest pile is reported.
    assert_eq!(min_eating_speed(&[4, 9, 2], 2), 9);
}

#[test]
fn test_speed_huge_piles() {
    let piles = [u64::MAX, u64::MAX / 2];
    let rate = min_eating_speed(&piles, 2);
    assert_eq!(rate, u64::MAX);
    assert_eq!(hours_needed(&piles, rate), 2);
}

#[test]
fn test_hours_needed_zero_rate_never_finishes() {
    assert_eq!(hours_needed(&[1], 0), u64::MAX);
    assert_eq!(hours_needed(&[], 3), 0);
}

// ============================================================================
// LONGEST UNIQUE RUN
// ============================================================================

#[test]
fn test_window_examples() {
    assert_eq!(length_of_longest_substring("abcabcbb"), 3);
    assert_eq!(length_of_longest_substring("bbbbb"), 1);
    assert_eq!(length_of_longest_substring("pwwkew"), 3);
    assert_eq!(length_of_longest_substring(""), 0);
    assert_eq!(length_of_longest_substring(" "), 1);
    assert_eq!(length_of_longest_substring("dvdf"), 3);
    assert_eq!(length_of_longest_substring("abba"), 2);
}

#[test]
fn test_window_run_is_leftmost() {
    assert_eq!(longest_unique_run("abcabcbb"), "abc");
    assert_eq!(longest_unique_run("pwwkew"), "wke");
    assert_eq!(longest_unique_run("abab"), "ab");
}

#[test]
fn test_window_counts_chars_not_bytes() {
    assert_eq!(length_of_longest_substring("héhé"), 2);
    assert_eq!(length_of_longest_substring("🦀🦀"), 1);
    let run = longest_unique_run("naïve naïve");
    assert_all_distinct(run);
    assert_eq!(run.chars().count(), 6);
}

// ============================================================================
// NON-OVERLAPPING INTERVALS
// ============================================================================

#[test]
fn test_intervals_examples() {
    let cases: [(&[(i64, i64)], usize); 4] = [
        (&[(1, 2), (2, 3), (3, 4), (1, 3)], 1),
        (&[(1, 2), (1, 2), (1, 2)], 2),
        (&[(1, 2), (2, 3)], 0),
        (&[], 0),
    ];
    for (pairs, expected) in cases {
        let mut intervals = make_intervals(pairs);
        assert_eq!(erase_overlap_intervals(&mut intervals), expected, "{:?}", pairs);
    }
}

#[test]
fn test_intervals_prefers_short_spans() {
    // One long interval covering three short disjoint ones.
    let mut intervals = make_intervals(&[(0, 100), (1, 2), (3, 4), (5, 6)]);
    assert_eq!(erase_overlap_intervals(&mut intervals), 1);
}

#[test]
fn test_intervals_negative_bounds() {
    let mut intervals = make_intervals(&[(-10, -5), (-6, 0), (-5, 3)]);
    assert_eq!(erase_overlap_intervals(&mut intervals), 1);
}

#[test]
fn test_kept_intervals_complement_removals() {
    let intervals = make_intervals(&[(1, 2), (2, 3), (3, 4), (1, 3), (0, 10)]);
    let removed = erase_overlap_intervals(&mut intervals.clone());
    let kept = kept_intervals(&intervals);
    assert_eq!(kept.len() + removed, intervals.len());
    assert_disjoint_and_sorted(&kept);
    assert_eq!(kept, make_intervals(&[(1, 2), (2, 3), (3, 4)]));
}

// ============================================================================
// WORD PATTERN
// ============================================================================

#[test]
fn test_pattern_examples() {
    assert!(word_pattern("abba", "dog cat cat dog"));
    assert!(!word_pattern("abba", "dog cat cat fish"));
    assert!(!word_pattern("aaaa", "dog cat cat dog"));
    assert!(!word_pattern("abba", "dog dog dog dog"));
}

#[test]
fn test_pattern_length_mismatch() {
    assert!(!word_pattern("aaa", "aa aa aa aa"));
    assert!(!word_pattern("ab", "dog"));
    assert!(word_pattern("", ""));
    assert!(!word_pattern("", "dog"));
}

#[test]
fn test_pattern_whitespace_runs() {
    assert!(word_pattern("ab", "  dog \t cat\n"));
}

#[test]
fn test_pattern_unicode_symbols() {
    assert!(word_pattern("αβα", "x y x"));
    assert!(!word_pattern("αβα", "x x x"));
}
