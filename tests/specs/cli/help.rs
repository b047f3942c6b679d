//! CLI help output specs
//!
//! Verify help text and argument validation for all commands.

use crate::prelude::*;

#[test]
fn gt_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn gt_help_lists_commands() {
    cli().args(&["--help"]).passes().stdout_has("run").stdout_has("summarize");
}

#[test]
fn gt_run_help_lists_selection_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--api-only")
        .stdout_has("--performance-only")
        .stdout_has("--stability-only")
        .stdout_has("--install-deps")
        .stdout_has("--save-report");
}

#[test]
fn gt_summarize_help_shows_formats() {
    cli()
        .args(&["summarize", "--help"])
        .passes()
        .stdout_has("RESULTS_DIR")
        .stdout_has("--output-dir")
        .stdout_has("markdown");
}

#[test]
fn gt_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn selection_flags_conflict() {
    cli().args(&["run", "--api-only", "--performance-only"]).exits(2).stderr_has("cannot be used with");
}

#[test]
fn summarize_requires_results_dir() {
    cli().args(&["summarize"]).exits(2).stderr_has("RESULTS_DIR");
}
