// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use drillbook::list::values;
use drillbook::suite::{load_suite, run_suite_with, Outcome, SuiteReport};
use drillbook::{
    bijection, erase_overlap_intervals, find_disappeared_numbers,
    find_disappeared_numbers_in_place, get_intersection_node, hours_needed, kept_intervals,
    longest_unique_run, min_eating_speed, BoundedSequence, Interval, IntervalSet, ListNode, Piles,
};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::display::*;
use cli::input::CliError;
use cli::{Cli, Commands};

/// Exit status when a suite ran but some cases failed.
const SUITE_FAILED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", error_marker(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    match &cli.command {
        Commands::Missing { nums, in_place } => run_missing(cli, nums, *in_place),
        Commands::Intersect { a, b, shared } => run_intersect(cli, a, b, shared),
        Commands::Speed { hours, piles } => run_speed(cli, piles, *hours),
        Commands::Window { text } => run_window(cli, text),
        Commands::Intervals { intervals } => run_intervals(cli, intervals),
        Commands::Pattern { pattern, words } => run_pattern(cli, pattern, words),
        Commands::Check { file } => run_check(cli, file),
    }
}

/// Print `report` as JSON and return true, or return false for boxed output.
fn emit_json<T: Serialize>(cli: &Cli, report: &T) -> Result<bool, CliError> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(true);
    }
    Ok(false)
}

fn list_text(values: &[i32]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

// ============================================================================
// EXERCISES
// ============================================================================

#[derive(Serialize)]
struct MissingReport {
    n: usize,
    method: &'static str,
    missing: Vec<i32>,
}

fn run_missing(cli: &Cli, nums: &[i32], in_place: bool) -> Result<ExitCode, CliError> {
    let missing = if cli.strict {
        let mut seq = BoundedSequence::new(nums.to_vec())?;
        if in_place {
            seq.missing_in_place()
        } else {
            seq.missing()
        }
    } else if in_place {
        find_disappeared_numbers_in_place(&mut nums.to_vec())
    } else {
        find_disappeared_numbers(nums)
    };

    let report = MissingReport {
        n: nums.len(),
        method: if in_place { "sign-flip" } else { "counting" },
        missing,
    };
    log::info!("{} of 1..={} missing", report.missing.len(), report.n);

    if !emit_json(cli, &report)? {
        section_top("MISSING NUMBERS");
        field("input", &list_text(nums));
        field("range", &format!("1..={}", report.n));
        field("method", report.method);
        field("missing", &themed(CYAN, &[BOLD], &list_text(&report.missing)));
        section_bot();
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct IntersectReport {
    a: Vec<i32>,
    b: Vec<i32>,
    /// Nodes from the meeting point to the end, or `null`.
    meet: Option<Vec<i32>>,
}

fn run_intersect(cli: &Cli, a: &[i32], b: &[i32], shared: &[i32]) -> Result<ExitCode, CliError> {
    let tail = ListNode::chain(shared, None);
    let head_a = ListNode::chain(a, tail.clone());
    let head_b = ListNode::chain(b, tail);

    let meet = get_intersection_node(head_a.as_ref(), head_b.as_ref());
    let report = IntersectReport {
        a: values(head_a.as_ref()),
        b: values(head_b.as_ref()),
        meet: meet.as_ref().map(|node| values(Some(node))),
    };

    if !emit_json(cli, &report)? {
        section_top("INTERSECTION");
        field("chain a", &chain_text(&report.a));
        field("chain b", &chain_text(&report.b));
        let meet_text = match &report.meet {
            Some(suffix) => themed(CYAN, &[BOLD], &chain_text(suffix)),
            None => themed(YELLOW, &[], "none"),
        };
        field("meets at", &meet_text);
        section_bot();
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct SpeedReport {
    hours: u64,
    rate: u64,
    hours_at_rate: u64,
    feasible: bool,
}

fn run_speed(cli: &Cli, piles: &[u64], hours: u64) -> Result<ExitCode, CliError> {
    let rate = if cli.strict {
        Piles::new(piles.to_vec(), hours)?.min_rate()
    } else {
        min_eating_speed(piles, hours)
    };

    let hours_at_rate = hours_needed(piles, rate);
    let report = SpeedReport {
        hours,
        rate,
        hours_at_rate,
        feasible: hours_at_rate <= hours,
    };
    if !report.feasible {
        log::warn!(
            "no rate finishes {} piles in {} hours; reporting the upper bound",
            piles.len(),
            hours
        );
    }

    if !emit_json(cli, &report)? {
        let piles_text: Vec<String> = piles.iter().map(|p| p.to_string()).collect();
        section_top("MINIMUM SPEED");
        field("piles", &format!("[{}]", piles_text.join(", ")));
        field("budget", &format!("{} h", hours));
        field("rate", &themed(CYAN, &[BOLD], &rate.to_string()));
        field("takes", &format!("{} h", hours_at_rate));
        field("feasible", &verdict(report.feasible));
        section_bot();
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct WindowReport<'a> {
    length: usize,
    run: &'a str,
}

fn run_window(cli: &Cli, text: &str) -> Result<ExitCode, CliError> {
    let run = longest_unique_run(text);
    let report = WindowReport {
        length: run.chars().count(),
        run,
    };

    if !emit_json(cli, &report)? {
        section_top("LONGEST UNIQUE RUN");
        field("text", &format!("{:?}", text));
        field("run", &themed(CYAN, &[BOLD], &format!("{:?}", report.run)));
        field("length", &report.length.to_string());
        section_bot();
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct IntervalsReport {
    removals: usize,
    kept: Vec<Interval>,
}

fn run_intervals(cli: &Cli, intervals: &[Interval]) -> Result<ExitCode, CliError> {
    let report = if cli.strict {
        let set = IntervalSet::new(intervals.to_vec())?;
        IntervalsReport {
            removals: set.removals(),
            kept: set.kept(),
        }
    } else {
        IntervalsReport {
            removals: erase_overlap_intervals(&mut intervals.to_vec()),
            kept: kept_intervals(intervals),
        }
    };

    if !emit_json(cli, &report)? {
        let kept: Vec<String> = report.kept.iter().map(|i| i.to_string()).collect();
        section_top("OVERLAP REMOVAL");
        field("intervals", &intervals.len().to_string());
        field("remove", &themed(CYAN, &[BOLD], &report.removals.to_string()));
        field("keep", &kept.join(" "));
        section_bot();
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct PatternReport<'a> {
    matches: bool,
    mapping: Vec<(char, &'a str)>,
}

fn run_pattern(cli: &Cli, pattern: &str, words: &str) -> Result<ExitCode, CliError> {
    let pairs = bijection(pattern, words);
    let report = PatternReport {
        matches: pairs.is_some(),
        mapping: pairs.unwrap_or_default(),
    };

    if !emit_json(cli, &report)? {
        section_top("WORD PATTERN");
        field("pattern", &format!("{:?}", pattern));
        field("words", &format!("{:?}", words));
        field("matches", &verdict(report.matches));
        for (symbol, word) in &report.mapping {
            field("", &format!("{} ↔ {}", symbol, word));
        }
        section_bot();
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SUITES
// ============================================================================

#[cfg(feature = "parallel")]
fn create_progress_bar(len: usize) -> ProgressBar {
    if !atty::is(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len}")
    {
        bar.set_style(style.progress_chars("━━╸"));
    }
    bar.set_prefix("Checking");
    bar
}

#[cfg(feature = "parallel")]
fn run_cases(suite: &drillbook::Suite, show_progress: bool) -> SuiteReport {
    let bar = if show_progress {
        create_progress_bar(suite.cases.len())
    } else {
        ProgressBar::hidden()
    };
    let report = run_suite_with(suite, |_| bar.inc(1));
    bar.finish_and_clear();
    report
}

#[cfg(not(feature = "parallel"))]
fn run_cases(suite: &drillbook::Suite, _show_progress: bool) -> SuiteReport {
    run_suite_with(suite, |_| {})
}

fn outcome_row(outcome: &Outcome) {
    let head = format!(
        "{} {} {}",
        pass_badge(outcome.passed),
        pad_right(outcome.exercise, 9),
        outcome.name
    );
    row(&head);
    if !outcome.passed {
        row(&format!(
            "     expected {}, got {}",
            outcome.expected,
            themed(RED, &[], &outcome.actual.to_string())
        ));
    }
}

fn run_check(cli: &Cli, file: &Path) -> Result<ExitCode, CliError> {
    let suite = load_suite(file)?;
    log::info!("loaded {} cases from {}", suite.cases.len(), file.display());

    let report = run_cases(&suite, !cli.json);

    if !emit_json(cli, &report)? {
        section_top("SUITE");
        for outcome in &report.outcomes {
            outcome_row(outcome);
        }
        section_bot();
        println!(
            "{} passed, {} failed",
            themed(GREEN, &[BOLD], &report.passed.to_string()),
            themed(
                if report.failed > 0 { RED } else { GRAY },
                &[BOLD],
                &report.failed.to_string()
            ),
        );
    }

    if report.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(SUITE_FAILED))
    }
}
