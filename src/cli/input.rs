// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Argument parsing that clap can't do on its own, and the CLI's error type.

use drillbook::{Interval, InvariantError, SuiteError};
use std::fmt;
use std::num::ParseIntError;

/// A `start,end` argument that didn't parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalArgError {
    /// No comma separating the two bounds.
    MissingComma(String),
    /// One of the bounds isn't an integer.
    BadBound { text: String, source: ParseIntError },
}

impl fmt::Display for IntervalArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalArgError::MissingComma(text) => {
                write!(f, "expected `start,end`, got {:?}", text)
            }
            IntervalArgError::BadBound { text, source } => {
                write!(f, "bad interval bound {:?}: {}", text, source)
            }
        }
    }
}

impl std::error::Error for IntervalArgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntervalArgError::MissingComma(_) => None,
            IntervalArgError::BadBound { source, .. } => Some(source),
        }
    }
}

/// Parse `start,end` (whitespace around either bound is ignored).
pub fn parse_interval(arg: &str) -> Result<Interval, IntervalArgError> {
    let (start, end) = arg
        .split_once(',')
        .ok_or_else(|| IntervalArgError::MissingComma(arg.to_string()))?;
    Ok(Interval::new(parse_bound(start)?, parse_bound(end)?))
}

fn parse_bound(text: &str) -> Result<i64, IntervalArgError> {
    let text = text.trim();
    text.parse().map_err(|source| IntervalArgError::BadBound {
        text: text.to_string(),
        source,
    })
}

/// Everything a subcommand can fail with.
#[derive(Debug)]
pub enum CliError {
    /// `--strict` rejected the input.
    Rejected(InvariantError),
    /// The suite file couldn't be loaded.
    Suite(SuiteError),
    /// Output couldn't be serialized.
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Rejected(err) => write!(f, "input rejected: {}", err),
            CliError::Suite(err) => write!(f, "{}", err),
            CliError::Json(err) => write!(f, "failed to encode JSON: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Rejected(err) => Some(err),
            CliError::Suite(err) => Some(err),
            CliError::Json(err) => Some(err),
        }
    }
}

impl From<InvariantError> for CliError {
    fn from(err: InvariantError) -> Self {
        CliError::Rejected(err)
    }
}

impl From<SuiteError> for CliError {
    fn from(err: SuiteError) -> Self {
        CliError::Suite(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}
