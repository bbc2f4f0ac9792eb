// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Does a sentence follow a symbol pattern?
//!
//! `"abba"` matches `"dog cat cat dog"` because `a ↔ dog` and `b ↔ cat` is a
//! bijection. A one-way map is not enough: `"abba"` vs `"dog dog dog dog"` is
//! consistent symbol-to-word (`a → dog`, `b → dog`) but two symbols claim the
//! same word, so it fails. The word-seen set catches exactly that case.
//!
//! Words are separated by runs of whitespace.

use std::collections::{HashMap, HashSet};

use crate::verify::contracts::check_bijection;

/// The symbol ↔ word pairs that make `words` follow `pattern`, in first-seen order.
///
/// `None` if the token count differs from the pattern length, or any symbol or
/// word would need two partners.
pub fn bijection<'a>(pattern: &str, words: &'a str) -> Option<Vec<(char, &'a str)>> {
    let tokens: Vec<&str> = words.split_whitespace().collect();
    if tokens.len() != pattern.chars().count() {
        return None;
    }

    let mut bound: HashMap<char, &str> = HashMap::new();
    let mut taken: HashSet<&str> = HashSet::new();
    let mut pairs = Vec::new();

    for (symbol, word) in pattern.chars().zip(tokens) {
        match bound.get(&symbol) {
            Some(&existing) if existing == word => {}
            Some(_) => return None,
            None => {
                if !taken.insert(word) {
                    // Word already belongs to another symbol.
                    return None;
                }
                bound.insert(symbol, word);
                pairs.push((symbol, word));
            }
        }
    }

    check_bijection(&pairs);
    Some(pairs)
}

/// True if a one-to-one symbol ↔ word mapping turns `pattern` into `words`.
///
/// ```
/// use drillbook::word_pattern;
///
/// assert!(word_pattern("abba", "dog cat cat dog"));
/// assert!(!word_pattern("abba", "dog cat cat fish"));
/// assert!(!word_pattern("abba", "dog dog dog dog"));
/// ```
pub fn word_pattern(pattern: &str, words: &str) -> bool {
    bijection(pattern, words).is_some()
}
