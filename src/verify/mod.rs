// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validated inputs and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Input wrappers** (`BoundedSequence`, `Piles`, `IntervalSet`) that reject
//!    out-of-contract input at construction. Once built, the exercise never has
//!    to fall back to a sentinel.
//!
//! 2. **Runtime contracts** that panic in debug builds when an answer doesn't
//!    satisfy its defining property. Zero-cost in release, but every test run
//!    checks every answer.

pub mod contracts;
mod types;

pub use types::*;
