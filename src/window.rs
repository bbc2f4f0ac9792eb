// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest run of distinct characters, via a sliding window.
//!
//! The window `[start, i]` only ever moves right. A new character that is already
//! inside the window pushes `start` forward, evicting characters one by one until
//! the earlier copy is gone. Both ends cross the input once, so the nested loop
//! is still O(n) overall.
//!
//! Characters are Unicode scalar values, not bytes: `"héhé"` has a longest run
//! of 2, not 3.

use std::collections::HashSet;

use crate::verify::contracts::check_unique_run;

/// Byte range and char count of the first longest window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Window {
    start: usize,
    end: usize,
    len: usize,
}

fn widest_window(s: &str) -> Window {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut in_window: HashSet<char> = HashSet::with_capacity(chars.len().min(256));
    let mut start = 0;
    let mut best = Window::default();

    for (i, &(offset, c)) in chars.iter().enumerate() {
        while !in_window.insert(c) {
            in_window.remove(&chars[start].1);
            start += 1;
        }

        let len = i + 1 - start;
        if len > best.len {
            best = Window {
                start: chars[start].0,
                end: offset + c.len_utf8(),
                len,
            };
        }
    }

    best
}

/// Length, in characters, of the longest substring without a repeated character.
///
/// ```
/// use drillbook::length_of_longest_substring;
///
/// assert_eq!(length_of_longest_substring("abcabcbb"), 3);
/// assert_eq!(length_of_longest_substring(""), 0);
/// ```
pub fn length_of_longest_substring(s: &str) -> usize {
    let window = widest_window(s);
    check_unique_run(s, &s[window.start..window.end], window.len);
    window.len
}

/// The first longest substring without a repeated character.
///
/// Ties go to the leftmost run. Empty input gives an empty slice.
pub fn longest_unique_run(s: &str) -> &str {
    let window = widest_window(s);
    let run = &s[window.start..window.end];
    check_unique_run(s, run, window.len);
    run
}
