// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console rendering for `gt run` and `gt summarize`.
//!
//! Progress goes to stderr so `--output json` leaves stdout parseable.

use std::fmt::Write;

use clap::ValueEnum;
use gt_core::{CompatibilityAnalysis, ExecutionResult, RunReport, SuiteKind};
use gt_report::{LoadWarning, STDERR_EXCERPT_CHARS};
use gt_runner::{SuiteObserver, SuiteSpec};

use crate::color::{Painter, Stream};

const RULE_WIDTH: usize = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints a line as each suite starts and finishes.
pub struct ConsoleProgress;

impl SuiteObserver for ConsoleProgress {
    fn suite_started(&self, _kind: SuiteKind, spec: &SuiteSpec) {
        let paint = Painter::for_stream(Stream::Stderr);
        eprintln!("\n{} {}...", paint.heading("Running"), spec.description);
        eprintln!("{}", paint.muted(&format!("Command: {}", spec.command.join(" "))));
    }

    fn suite_finished(&self, _kind: SuiteKind, result: &ExecutionResult) {
        eprintln!(
            "{} {} ({:.2}s)",
            Painter::for_stream(Stream::Stderr).status(result.success),
            result.description,
            result.duration_seconds
        );
    }
}

/// Full console report for one run.
pub fn format_run_report(report: &RunReport) -> String {
    let paint = Painter::for_stream(Stream::Stdout);
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "{}", paint.heading("GAUNTLET TEST REPORT"));
    let _ = writeln!(out, "{rule}");

    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "  Total Suites:   {}", report.total());
    let _ = writeln!(out, "  Successful:     {}", report.succeeded());
    let _ = writeln!(out, "  Failed:         {}", report.failed());
    let _ = writeln!(out, "  Success Rate:   {:.1}%", report.success_rate() * 100.0);
    let _ = writeln!(out, "  Total Duration: {:.2}s", report.total_duration_seconds());

    let _ = writeln!(out, "\nEnvironment:");
    let _ = writeln!(out, "  Label:    {}", report.environment_label());
    let _ = writeln!(out, "  Platform: {}", report.platform());
    if let Some(descriptor) = report.descriptor() {
        let _ = writeln!(out, "  Descriptor: {descriptor}");
    }

    let _ = writeln!(out, "\nResults:");
    if report.results().is_empty() {
        let _ = writeln!(out, "  (no suites ran)");
    }
    for result in report.results() {
        let _ = writeln!(
            out,
            "  {} {} ({:.2}s)",
            paint.status(result.success),
            result.description,
            result.duration_seconds
        );
        if !result.success && !result.stderr.is_empty() {
            let _ = writeln!(out, "    Error: {}", result.stderr_excerpt(STDERR_EXCERPT_CHARS));
        }
    }

    let _ = writeln!(out, "\n{rule}");
    if report.interrupted() {
        let _ = writeln!(out, "Run interrupted before every selected suite finished.");
    }
    if report.passed() {
        let _ = writeln!(out, "All completed suites passed.");
    } else {
        let _ = writeln!(out, "{} suite(s) failed. Please review the results.", report.failed());
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Closing summary printed by `gt summarize`.
pub fn format_summary(analysis: &CompatibilityAnalysis, warnings: &[LoadWarning]) -> String {
    let paint = Painter::for_stream(Stream::Stdout);
    let mut out = String::new();

    if !warnings.is_empty() {
        let _ = writeln!(out, "\nSkipped {} file(s):", warnings.len());
        for warning in warnings {
            let _ = writeln!(out, "  {warning}");
        }
    }

    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "  Total Runs:   {}", analysis.runs_total());
    let _ = writeln!(out, "  Successful:   {}", analysis.runs_passed());
    let _ = writeln!(out, "  Failed:       {}", analysis.runs_failed());
    let _ = writeln!(out, "  Success Rate: {:.1}%", analysis.success_rate() * 100.0);

    let _ = writeln!(out, "\nEnvironments:");
    for (label, report) in analysis.reports_by_environment() {
        let _ = writeln!(
            out,
            "  {} {label} ({}/{} suites)",
            paint.status(report.passed()),
            report.succeeded(),
            report.total()
        );
    }

    if analysis.all_passed() {
        let _ = writeln!(out, "\nAll test runs passed successfully!");
    } else {
        let _ = writeln!(out, "\n{} test run(s) failed.", analysis.runs_failed());
    }
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
