// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Six classic exercises, each a single total function with a checked answer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐ ┌────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐ ┌───────────┐
//! │ missing  │ │  list  │ │  speed  │ │  window  │ │ intervals  │ │  pattern  │
//! └────┬─────┘ └───┬────┘ └────┬────┘ └────┬─────┘ └─────┬──────┘ └─────┬─────┘
//!      └───────────┴───────────┴─────┬─────┴─────────────┴──────────────┘
//!                                    ▼
//!              ┌──────────────────────────────────────────────┐
//!              │                   verify                     │
//!              │  contracts (debug postconditions)            │
//!              │  BoundedSequence, Piles, IntervalSet         │
//!              └──────────────────────────────────────────────┘
//!                                    ▲
//!                             ┌──────┴──────┐
//!                             │    suite    │  JSON cases, rayon runner
//!                             └─────────────┘
//! ```
//!
//! # Exercises
//!
//! | Module      | Function                          | Technique                         |
//! |-------------|-----------------------------------|-----------------------------------|
//! | `missing`   | `find_disappeared_numbers`        | counting array / sign-flip marks  |
//! | `list`      | `get_intersection_node`           | length alignment, node identity   |
//! | `speed`     | `min_eating_speed`                | binary search over the answer     |
//! | `window`    | `length_of_longest_substring`     | sliding window                    |
//! | `intervals` | `erase_overlap_intervals`         | sort + earliest-end greedy        |
//! | `pattern`   | `word_pattern`                    | two-way bijection check           |
//!
//! None of them return `Result`. Input outside the textbook contract gets a
//! well-defined sentinel instead (see each module). Callers who want rejection
//! rather than a sentinel go through the wrappers in [`verify`].
//!
//! # Usage
//!
//! ```
//! use drillbook::{length_of_longest_substring, min_eating_speed, word_pattern};
//!
//! assert_eq!(length_of_longest_substring("abcabcbb"), 3);
//! assert_eq!(min_eating_speed(&[3, 6, 7, 11], 8), 4);
//! assert!(word_pattern("abba", "dog cat cat dog"));
//! ```

// Module declarations
pub mod intervals;
pub mod list;
mod missing;
mod pattern;
mod speed;
pub mod suite;
pub mod testing;
pub mod verify;
mod window;

// Re-exports for public API
pub use intervals::{erase_overlap_intervals, kept_intervals, Interval};
pub use list::{get_intersection_node, list_len, ListNode};
pub use missing::{find_disappeared_numbers, find_disappeared_numbers_in_place, restore_marks};
pub use pattern::{bijection, word_pattern};
pub use speed::{hours_needed, min_eating_speed};
pub use suite::{load_suite, run_suite, Suite, SuiteError, SuiteReport};
pub use verify::{BoundedSequence, IntervalSet, InvariantError, Piles};
pub use window::{length_of_longest_substring, longest_unique_run};
