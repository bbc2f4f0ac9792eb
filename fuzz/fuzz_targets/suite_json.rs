// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suite parsing.
//!
//! Garbage JSON must come back as an error, never a panic. Anything that does
//! parse gets run, which drives every exercise with attacker-chosen input.

#![no_main]

use drillbook::suite::{parse_suite, run_suite};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Keep list sizes sane so one input can't stall the fuzzer.
    if data.len() > 4096 {
        return;
    }
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(suite) = parse_suite(json) else {
        return;
    };

    let report = run_suite(&suite);
    assert_eq!(report.outcomes.len(), suite.cases.len());
    assert_eq!(report.passed + report.failed, suite.cases.len());
});
