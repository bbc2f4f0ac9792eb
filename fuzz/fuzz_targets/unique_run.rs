// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the longest unique run.
//!
//! Byte offsets and char counts diverge on multi-byte text. A slicing bug
//! panics here long before it shows up in a unit test.

#![no_main]

use drillbook::{length_of_longest_substring, longest_unique_run};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|text: &str| {
    let run = longest_unique_run(text);
    let len = length_of_longest_substring(text);

    assert_eq!(run.chars().count(), len);
    assert!(text.contains(run));

    let distinct: HashSet<char> = run.chars().collect();
    assert_eq!(distinct.len(), len, "{:?} repeats a character", run);

    let total = text.chars().count();
    assert!(len <= total);
    if !text.is_empty() {
        assert!(len >= 1);
    }
});
