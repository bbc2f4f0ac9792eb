// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input wrappers that check the textbook preconditions once, up front.
//!
//! The exercise functions are total: they accept anything and fall back to a
//! sentinel when the input is outside the textbook contract. These wrappers are
//! for callers who would rather hear about bad input than get a sentinel. Wrap
//! the data, handle the `InvariantError`, and everything after that runs on
//! input known to be in range.
//!
//! | Type              | Guarantee                                           |
//! |-------------------|-----------------------------------------------------|
//! | `BoundedSequence` | every value in `1..=n`                              |
//! | `Piles`           | non-empty, all positive, `hours >= piles.len()`     |
//! | `IntervalSet`     | every `start <= end`, kept sorted by `(start, end)` |
//!
//! # Example
//!
//! ```
//! use drillbook::verify::BoundedSequence;
//!
//! let mut seq = BoundedSequence::new(vec![4, 3, 2, 7, 8, 2, 3, 1]).unwrap();
//! assert_eq!(seq.missing_in_place(), vec![5, 6]);
//! // Restored afterwards: the marks never escape.
//! assert_eq!(seq.as_slice(), &[4, 3, 2, 7, 8, 2, 3, 1]);
//! ```

use std::fmt;

use crate::intervals::{erase_overlap_intervals, kept_intervals, Interval};
use crate::missing::{find_disappeared_numbers, find_disappeared_numbers_in_place, restore_marks};
use crate::speed::min_eating_speed;

/// Error type for rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A value falls outside `1..=n`.
    ValueOutOfRange { position: usize, value: i32, n: usize },
    /// No piles at all.
    NoPiles,
    /// A pile holds nothing.
    EmptyPile { position: usize },
    /// Fewer hours than piles: no rate can make it.
    BudgetTooSmall { hours: u64, piles: usize },
    /// An interval ends before it starts.
    ReversedInterval { position: usize, start: i64, end: i64 },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ValueOutOfRange { position, value, n } => {
                write!(
                    f,
                    "value {} at position {} is outside 1..={}",
                    value, position, n
                )
            }
            InvariantError::NoPiles => write!(f, "no piles given"),
            InvariantError::EmptyPile { position } => {
                write!(f, "pile at position {} is empty", position)
            }
            InvariantError::BudgetTooSmall { hours, piles } => {
                write!(
                    f,
                    "{} hours cannot cover {} piles (need at least one hour each)",
                    hours, piles
                )
            }
            InvariantError::ReversedInterval {
                position,
                start,
                end,
            } => {
                write!(
                    f,
                    "interval {} at position {} ends before it starts",
                    Interval::new(*start, *end),
                    position
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// `n` values, each in `1..=n`.
///
/// # Invariants (enforced at construction)
/// - `1 <= values[i] <= values.len()` for every `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSequence {
    values: Vec<i32>,
}

impl BoundedSequence {
    /// Returns `Err` on the first out-of-range value.
    pub fn new(values: Vec<i32>) -> Result<Self, InvariantError> {
        let n = values.len();
        if let Some((position, &value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| v < 1 || v as usize > n)
        {
            return Err(InvariantError::ValueOutOfRange { position, value, n });
        }
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Missing numbers via the counting variant.
    pub fn missing(&self) -> Vec<i32> {
        find_disappeared_numbers(&self.values)
    }

    /// Missing numbers via sign-flip marking, restored before returning.
    ///
    /// Restoration is exact here because every value is known to be positive.
    pub fn missing_in_place(&mut self) -> Vec<i32> {
        let missing = find_disappeared_numbers_in_place(&mut self.values);
        restore_marks(&mut self.values);
        missing
    }
}

/// Piles plus an hour budget that some rate can meet.
///
/// # Invariants (enforced at construction)
/// - at least one pile, every pile `> 0`
/// - `hours >= piles.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piles {
    piles: Vec<u64>,
    hours: u64,
}

impl Piles {
    pub fn new(piles: Vec<u64>, hours: u64) -> Result<Self, InvariantError> {
        if piles.is_empty() {
            return Err(InvariantError::NoPiles);
        }
        if let Some(position) = piles.iter().position(|&pile| pile == 0) {
            return Err(InvariantError::EmptyPile { position });
        }
        if hours < piles.len() as u64 {
            return Err(InvariantError::BudgetTooSmall {
                hours,
                piles: piles.len(),
            });
        }
        Ok(Self { piles, hours })
    }

    pub fn piles(&self) -> &[u64] {
        &self.piles
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    /// The minimum rate. Always feasible, never a sentinel.
    pub fn min_rate(&self) -> u64 {
        min_eating_speed(&self.piles, self.hours)
    }
}

/// Well-formed intervals, sorted by `(start, end)`.
///
/// # Invariants (enforced at construction)
/// - `start <= end` for every interval
/// - sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new(mut intervals: Vec<Interval>) -> Result<Self, InvariantError> {
        if let Some((position, interval)) = intervals
            .iter()
            .enumerate()
            .find(|(_, interval)| interval.start > interval.end)
        {
            return Err(InvariantError::ReversedInterval {
                position,
                start: interval.start,
                end: interval.end,
            });
        }
        intervals.sort_unstable();
        Ok(Self { intervals })
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Minimum removals. Works on a copy so the set stays intact.
    pub fn removals(&self) -> usize {
        erase_overlap_intervals(&mut self.intervals.clone())
    }

    /// The greedy's surviving intervals.
    pub fn kept(&self) -> Vec<Interval> {
        kept_intervals(&self.intervals)
    }
}
