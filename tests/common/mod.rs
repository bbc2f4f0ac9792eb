//! Shared test utilities and fixtures.

#![allow(dead_code)]

use drillbook::suite::{parse_suite, Suite};
use drillbook::Interval;
use std::collections::HashSet;

// Re-export canonical test utilities from drillbook::testing
pub use drillbook::testing::{make_case, make_intervals, make_shared_chains};

// ============================================================================
// FIXTURES
// ============================================================================

/// Every worked example from the exercise descriptions, one case each.
pub const CLASSIC_SUITE: &str = r#"{
    "cases": [
        { "name": "missing/classic", "exercise": "missing", "nums": [4,3,2,7,8,2,3,1], "expected": [5,6] },
        { "name": "missing/pair", "exercise": "missing", "nums": [1,1], "expected": [2] },
        { "name": "missing/in-place", "exercise": "missing", "nums": [4,3,2,7,8,2,3,1], "in_place": true, "expected": [5,6] },
        { "name": "intersect/eight", "exercise": "intersect", "a": [4,1], "b": [5,6,1], "shared": [8,4,5], "expected": 8 },
        { "name": "intersect/two", "exercise": "intersect", "a": [1,9,1], "b": [3], "shared": [2,4], "expected": 2 },
        { "name": "intersect/none", "exercise": "intersect", "a": [2,6,4], "b": [1,5], "expected": null },
        { "name": "speed/four", "exercise": "speed", "piles": [3,6,7,11], "hours": 8, "expected": 4 },
        { "name": "speed/thirty", "exercise": "speed", "piles": [30,11,23,4,20], "hours": 5, "expected": 30 },
        { "name": "speed/twenty-three", "exercise": "speed", "piles": [30,11,23,4,20], "hours": 6, "expected": 23 },
        { "name": "window/abc", "exercise": "window", "text": "abcabcbb", "expected": 3 },
        { "name": "window/b", "exercise": "window", "text": "bbbbb", "expected": 1 },
        { "name": "window/wke", "exercise": "window", "text": "pwwkew", "expected": 3 },
        { "name": "window/empty", "exercise": "window", "text": "", "expected": 0 },
        { "name": "intervals/one", "exercise": "intervals", "intervals": [[1,2],[2,3],[3,4],[1,3]], "expected": 1 },
        { "name": "intervals/two", "exercise": "intervals", "intervals": [[1,2],[1,2],[1,2]], "expected": 2 },
        { "name": "intervals/zero", "exercise": "intervals", "intervals": [[1,2],[2,3]], "expected": 0 },
        { "name": "pattern/abba", "exercise": "pattern", "pattern": "abba", "words": "dog cat cat dog", "expected": true },
        { "name": "pattern/fish", "exercise": "pattern", "pattern": "abba", "words": "dog cat cat fish", "expected": false },
        { "name": "pattern/aaaa", "exercise": "pattern", "pattern": "aaaa", "words": "dog cat cat dog", "expected": false },
        { "name": "pattern/dogs", "exercise": "pattern", "pattern": "abba", "words": "dog dog dog dog", "expected": false }
    ]
}"#;

/// The classic suite, parsed.
pub fn classic_suite() -> Suite {
    parse_suite(CLASSIC_SUITE).expect("classic suite is valid JSON")
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert no two intervals in `kept` overlap, and that it's sorted by start.
pub fn assert_disjoint_and_sorted(kept: &[Interval]) {
    for pair in kept.windows(2) {
        assert!(
            pair[0].start <= pair[1].start,
            "kept intervals out of order: {} before {}",
            pair[0],
            pair[1]
        );
        assert!(
            !pair[0].overlaps(&pair[1]),
            "kept intervals overlap: {} and {}",
            pair[0],
            pair[1]
        );
    }
}

/// Assert `run` has no repeated characters.
pub fn assert_all_distinct(run: &str) {
    let mut seen = HashSet::new();
    for c in run.chars() {
        assert!(seen.insert(c), "{:?} repeats {:?}", run, c);
    }
}
