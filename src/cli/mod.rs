// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the drillbook command-line interface.
//!
//! One subcommand per exercise, plus `check` to run a JSON case suite. Every
//! subcommand accepts `--json` for machine-readable output and `--strict` to
//! reject out-of-contract input instead of printing the exercise's sentinel.

pub mod display;
pub mod input;

use clap::{ArgAction, Parser, Subcommand};
use drillbook::Interval;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "drillbook",
    about = "Classic array, string, list and interval exercises",
    version
)]
pub struct Cli {
    /// Print results as JSON instead of boxed text
    #[arg(long, global = true)]
    pub json: bool,

    /// Reject input outside the exercise's contract instead of returning a sentinel
    #[arg(long, global = true)]
    pub strict: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the values of 1..=n that never appear among n integers
    Missing {
        /// The integers, e.g. `4 3 2 7 8 2 3 1`
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,

        /// Use sign-flip marking instead of a counting array
        #[arg(long)]
        in_place: bool,
    },

    /// Find the first node two chains share
    ///
    /// Chain A is `--a` followed by `--shared`; chain B is `--b` followed by the
    /// same `--shared` nodes.
    Intersect {
        /// Private prefix of chain A, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        a: Vec<i32>,

        /// Private prefix of chain B, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        b: Vec<i32>,

        /// Tail shared by both chains, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        shared: Vec<i32>,
    },

    /// Minimum per-hour rate that finishes every pile within the budget
    Speed {
        /// Hour budget
        #[arg(long)]
        hours: u64,

        /// Pile sizes
        piles: Vec<u64>,
    },

    /// Longest run of characters with no repeats
    Window {
        /// Text to scan
        text: String,
    },

    /// Fewest removals that leave intervals non-overlapping
    Intervals {
        /// Intervals as `start,end`, e.g. `1,2 2,3 3,4 1,3`
        #[arg(value_parser = input::parse_interval, allow_hyphen_values = true)]
        intervals: Vec<Interval>,
    },

    /// Check that words follow a symbol pattern one-to-one
    Pattern {
        /// Symbol pattern, e.g. `abba`
        pattern: String,

        /// Whitespace-separated words, e.g. `"dog cat cat dog"`
        words: String,
    },

    /// Run a JSON suite of cases and report which pass
    Check {
        /// Path to the suite file
        file: PathBuf,
    },
}
