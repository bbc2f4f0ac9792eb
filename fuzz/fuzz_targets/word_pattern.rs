// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the word pattern bijection.

#![no_main]

use arbitrary::Arbitrary;
use drillbook::{bijection, word_pattern};
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

#[derive(Debug, Arbitrary)]
struct PatternInput<'a> {
    pattern: &'a str,
    words: &'a str,
}

fuzz_target!(|input: PatternInput<'_>| {
    let pairs = bijection(input.pattern, input.words);
    assert_eq!(pairs.is_some(), word_pattern(input.pattern, input.words));

    let Some(pairs) = pairs else {
        return;
    };

    // Replaying the mapping over the pattern reproduces the words.
    let mapping: HashMap<char, &str> = pairs.into_iter().collect();
    let rebuilt: Vec<&str> = input.pattern.chars().map(|c| mapping[&c]).collect();
    let tokens: Vec<&str> = input.words.split_whitespace().collect();
    assert_eq!(rebuilt, tokens);
});
