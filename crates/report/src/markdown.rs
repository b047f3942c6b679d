// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown narrative for run reports and compatibility analyses.
//!
//! Sections are emitted in a fixed order. The only branching in the prose is
//! on whether anything failed.

use chrono::{DateTime, Utc};
use gt_core::{CompatibilityAnalysis, ExecutionResult, RunReport};

use crate::Document;

/// Stderr longer than this many characters is cut for display.
pub const STDERR_EXCERPT_CHARS: usize = 200;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render `doc` as Markdown. `generated_at` is the only input not taken
/// from the document itself.
pub fn render_markdown<'a>(doc: impl Into<Document<'a>>, generated_at: DateTime<Utc>) -> String {
    let mut md = Markdown::default();
    match doc.into() {
        Document::Run(report) => run_report(&mut md, report, generated_at),
        Document::Compatibility(analysis) => compatibility(&mut md, analysis, generated_at),
    }
    md.finish()
}

fn run_report(md: &mut Markdown, report: &RunReport, generated_at: DateTime<Utc>) {
    md.header("Gauntlet Test Run Report", generated_at);

    md.heading(2, "Executive Summary");
    md.line(format!("- **Total Suites:** {}", report.total()));
    md.line(format!("- **Successful:** {}", report.succeeded()));
    md.line(format!("- **Failed:** {}", report.failed()));
    md.line(format!("- **Success Rate:** {:.1}%", report.success_rate() * 100.0));
    md.line(format!("- **Total Duration:** {:.2}s", report.total_duration_seconds()));
    md.line(format!("- **Environment:** {}", report.environment_label()));
    md.blank();
    if report.passed() {
        md.line("**All completed suites passed.**");
    } else {
        md.line(format!("**{} suite(s) failed.**", report.failed()));
    }
    md.blank();

    md.heading(2, "Suite Results");
    suite_lines(md, report.results());
    md.blank();

    if report.interrupted() {
        md.line("> **Interrupted:** the run was stopped before every selected suite finished.");
        md.blank();
    }

    recommendations(md, report.passed());
    md.footer();
}

fn compatibility(md: &mut Markdown, analysis: &CompatibilityAnalysis, generated_at: DateTime<Utc>) {
    md.header("Gauntlet Compatibility Summary", generated_at);

    md.heading(2, "Executive Summary");
    md.line(format!("- **Total Test Runs:** {}", analysis.runs_total()));
    md.line(format!("- **Successful Runs:** {}", analysis.runs_passed()));
    md.line(format!("- **Failed Runs:** {}", analysis.runs_failed()));
    md.line(format!("- **Success Rate:** {:.1}%", analysis.success_rate() * 100.0));
    if analysis.auxiliary_files() > 0 {
        md.line(format!("- **Auxiliary Result Files:** {}", analysis.auxiliary_files()));
    }
    md.blank();
    if analysis.all_passed() {
        md.line("**All test runs passed successfully!**");
    } else {
        md.line(format!("**{} test run(s) failed.**", analysis.runs_failed()));
    }
    md.blank();

    md.heading(2, "Environment Compatibility");
    md.line("| Environment | Status | Suites | Duration |");
    md.line("|-------------|--------|--------|----------|");
    for (label, report) in analysis.reports_by_environment() {
        md.line(format!(
            "| {} | {} | {}/{} | {:.2}s |",
            table_cell(label),
            status(report.passed()),
            report.succeeded(),
            report.total(),
            report.total_duration_seconds(),
        ));
    }
    md.blank();

    md.heading(2, "Detailed Results");
    for (label, report) in analysis.reports_by_environment() {
        md.heading(3, label);
        md.line(format!("- **Status:** {}", status(report.passed())));
        if !report.platform().is_empty() {
            md.line(format!("- **Platform:** {}", report.platform()));
        }
        if let Some(descriptor) = report.descriptor() {
            md.line(format!("- **Descriptor:** {descriptor}"));
        }
        md.line(format!("- **Total Suites:** {}", report.total()));
        md.line(format!("- **Successful:** {}", report.succeeded()));
        md.line(format!("- **Failed:** {}", report.failed()));
        md.line(format!("- **Duration:** {:.2}s", report.total_duration_seconds()));
        if report.interrupted() {
            md.line("- **Interrupted:** yes");
        }
        md.blank();
        md.heading(4, "Suite Results");
        suite_lines(md, report.results());
        md.blank();
    }

    recommendations(md, analysis.all_passed());
    md.footer();
}

fn suite_lines(md: &mut Markdown, results: &[ExecutionResult]) {
    if results.is_empty() {
        md.line("- No suites were run.");
        return;
    }
    for result in results {
        md.line(format!(
            "- {} {} ({:.2}s)",
            status(result.success),
            result.description,
            result.duration_seconds
        ));
        if !result.success && !result.stderr.is_empty() {
            md.line(format!("  - Error: `{}`", inline_code(&result.stderr_excerpt(STDERR_EXCERPT_CHARS))));
        }
    }
}

fn recommendations(md: &mut Markdown, passed: bool) {
    md.heading(2, "Recommendations");
    if passed {
        md.line("- **Ready:** every completed suite passed in every environment.");
        md.line("- **Consider:** running extended stability suites before release.");
    } else {
        md.line("- **Investigate:** review the failed suites above to find root causes.");
        md.line("- **Debug:** compare error excerpts across environments.");
    }
    md.blank();
}

fn status(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Keep an excerpt on one line inside a code span.
fn inline_code(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            '`' => '\'',
            c => c,
        })
        .collect()
}

fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[derive(Default)]
struct Markdown {
    lines: Vec<String>,
}

impl Markdown {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn heading(&mut self, level: usize, text: &str) {
        self.line(format!("{} {text}", "#".repeat(level)));
        self.blank();
    }

    fn header(&mut self, title: &str, generated_at: DateTime<Utc>) {
        self.line(format!("# {title}"));
        self.line(format!("**Generated:** {}", generated_at.format(TIMESTAMP_FORMAT)));
        self.blank();
    }

    fn footer(&mut self) {
        self.line("---");
        self.line(format!("*Report generated by gauntlet {}*", env!("CARGO_PKG_VERSION")));
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
