// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case suites: exercise inputs and expected answers, described in JSON.
//!
//! A suite is a flat list of cases. Each case names its exercise in the
//! `exercise` field and carries that exercise's inputs plus `expected`:
//!
//! ```json
//! {
//!   "cases": [
//!     { "name": "classic", "exercise": "missing", "nums": [4,3,2,7,8,2,3,1], "expected": [5,6] },
//!     { "name": "koko", "exercise": "speed", "piles": [3,6,7,11], "hours": 8, "expected": 4 },
//!     { "name": "abba", "exercise": "pattern", "pattern": "abba", "words": "dog cat cat dog", "expected": true }
//!   ]
//! }
//! ```
//!
//! Cases are independent, so with the `parallel` feature they run on the rayon
//! pool. Outcomes always come back in input order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::intervals::{erase_overlap_intervals, Interval};
use crate::list::{get_intersection_node, ListNode};
use crate::missing::{find_disappeared_numbers, find_disappeared_numbers_in_place};
use crate::pattern::word_pattern;
use crate::speed::min_eating_speed;
use crate::window::length_of_longest_substring;

// ============================================================================
// SUITE FORMAT
// ============================================================================

/// One exercise invocation with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "exercise", rename_all = "snake_case")]
pub enum Exercise {
    Missing {
        nums: Vec<i32>,
        #[serde(default)]
        in_place: bool,
        expected: Vec<i32>,
    },
    /// `a` and `b` are private prefixes; both continue into `shared`.
    /// `expected` is the value of the first shared node, if any.
    Intersect {
        a: Vec<i32>,
        b: Vec<i32>,
        #[serde(default)]
        shared: Vec<i32>,
        expected: Option<i32>,
    },
    Speed {
        piles: Vec<u64>,
        hours: u64,
        expected: u64,
    },
    Window {
        text: String,
        expected: usize,
    },
    Intervals {
        intervals: Vec<Interval>,
        expected: usize,
    },
    Pattern {
        pattern: String,
        words: String,
        expected: bool,
    },
}

/// A named case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    #[serde(flatten)]
    pub exercise: Exercise,
}

/// The top-level suite document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub cases: Vec<Case>,
}

/// An exercise's answer, whichever shape it takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Numbers(Vec<i32>),
    Node(Option<i32>),
    Rate(u64),
    Length(usize),
    Matches(bool),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Numbers(values) => write!(f, "{:?}", values),
            Answer::Node(Some(val)) => write!(f, "node {}", val),
            Answer::Node(None) => write!(f, "none"),
            Answer::Rate(rate) => write!(f, "{}", rate),
            Answer::Length(len) => write!(f, "{}", len),
            Answer::Matches(matches) => write!(f, "{}", matches),
        }
    }
}

impl Exercise {
    /// Short name, as used in the `exercise` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Exercise::Missing { .. } => "missing",
            Exercise::Intersect { .. } => "intersect",
            Exercise::Speed { .. } => "speed",
            Exercise::Window { .. } => "window",
            Exercise::Intervals { .. } => "intervals",
            Exercise::Pattern { .. } => "pattern",
        }
    }

    pub fn expected(&self) -> Answer {
        match self {
            Exercise::Missing { expected, .. } => Answer::Numbers(expected.clone()),
            Exercise::Intersect { expected, .. } => Answer::Node(*expected),
            Exercise::Speed { expected, .. } => Answer::Rate(*expected),
            Exercise::Window { expected, .. } => Answer::Length(*expected),
            Exercise::Intervals { expected, .. } => Answer::Length(*expected),
            Exercise::Pattern { expected, .. } => Answer::Matches(*expected),
        }
    }

    /// Run the exercise on this case's inputs.
    pub fn solve(&self) -> Answer {
        match self {
            Exercise::Missing { nums, in_place, .. } => {
                if *in_place {
                    Answer::Numbers(find_disappeared_numbers_in_place(&mut nums.clone()))
                } else {
                    Answer::Numbers(find_disappeared_numbers(nums))
                }
            }
            Exercise::Intersect { a, b, shared, .. } => {
                let tail = ListNode::chain(shared, None);
                let head_a = ListNode::chain(a, tail.clone());
                let head_b = ListNode::chain(b, tail);
                let meet = get_intersection_node(head_a.as_ref(), head_b.as_ref());
                Answer::Node(meet.map(|node| node.val))
            }
            Exercise::Speed { piles, hours, .. } => Answer::Rate(min_eating_speed(piles, *hours)),
            Exercise::Window { text, .. } => Answer::Length(length_of_longest_substring(text)),
            Exercise::Intervals { intervals, .. } => {
                Answer::Length(erase_overlap_intervals(&mut intervals.clone()))
            }
            Exercise::Pattern { pattern, words, .. } => Answer::Matches(word_pattern(pattern, words)),
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to load a suite.
#[derive(Debug)]
pub enum SuiteError {
    /// The file couldn't be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The contents aren't a valid suite.
    Json(serde_json::Error),
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            SuiteError::Json(source) => write!(f, "invalid suite JSON: {}", source),
        }
    }
}

impl std::error::Error for SuiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuiteError::Io { source, .. } => Some(source),
            SuiteError::Json(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for SuiteError {
    fn from(err: serde_json::Error) -> Self {
        SuiteError::Json(err)
    }
}

/// Parse a suite from JSON text.
pub fn parse_suite(json: &str) -> Result<Suite, SuiteError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a suite file.
pub fn load_suite(path: &Path) -> Result<Suite, SuiteError> {
    let json = fs::read_to_string(path).map_err(|source| SuiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_suite(&json)
}

// ============================================================================
// RUNNING
// ============================================================================

/// Result of one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub name: String,
    pub exercise: &'static str,
    pub passed: bool,
    pub expected: Answer,
    pub actual: Answer,
}

/// Outcomes for a whole suite, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub outcomes: Vec<Outcome>,
    pub passed: usize,
    pub failed: usize,
}

impl SuiteReport {
    fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        let failed = outcomes.len() - passed;
        SuiteReport {
            outcomes,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Run one case and compare against its expectation.
pub fn run_case(case: &Case) -> Outcome {
    let expected = case.exercise.expected();
    let actual = case.exercise.solve();
    let passed = actual == expected;

    log::debug!(
        "case {:?} ({}): {}",
        case.name,
        case.exercise.kind(),
        if passed { "ok" } else { "FAILED" }
    );

    Outcome {
        name: case.name.clone(),
        exercise: case.exercise.kind(),
        passed,
        expected,
        actual,
    }
}

/// Run every case in the suite.
pub fn run_suite(suite: &Suite) -> SuiteReport {
    run_suite_with(suite, |_| {})
}

/// Run every case, calling `on_outcome` as each one finishes.
///
/// With the `parallel` feature the callback fires from worker threads, in no
/// particular order; the report itself is still in input order.
#[cfg(feature = "parallel")]
pub fn run_suite_with<F>(suite: &Suite, on_outcome: F) -> SuiteReport
where
    F: Fn(&Outcome) + Sync,
{
    let outcomes: Vec<Outcome> = suite
        .cases
        .par_iter()
        .map(|case| {
            let outcome = run_case(case);
            on_outcome(&outcome);
            outcome
        })
        .collect();

    SuiteReport::from_outcomes(outcomes)
}

/// Sequential version for builds without rayon.
#[cfg(not(feature = "parallel"))]
pub fn run_suite_with<F>(suite: &Suite, on_outcome: F) -> SuiteReport
where
    F: Fn(&Outcome) + Sync,
{
    let outcomes: Vec<Outcome> = suite
        .cases
        .iter()
        .map(|case| {
            let outcome = run_case(case);
            on_outcome(&outcome);
            outcome
        })
        .collect();

    SuiteReport::from_outcomes(outcomes)
}
