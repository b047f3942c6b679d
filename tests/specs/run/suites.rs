//! Specs for `gt run` suite execution and exit codes.

use crate::prelude::*;

#[test]
fn all_suites_passing_exits_zero() {
    let temp = Project::with_suites("echo api-ok", "echo perf-ok", "echo stab-ok");

    temp.gt()
        .args(&["run"])
        .passes()
        .stdout_has("Total Suites:   3")
        .stdout_has("PASS API Compatibility Tests")
        .stdout_has("PASS Performance Benchmark Tests")
        .stdout_has("PASS Stability Tests")
        .stdout_has("Success Rate:   100.0%")
        .stdout_has("All completed suites passed.");
}

#[test]
fn failing_suite_exits_one_and_later_suites_still_run() {
    let temp = Project::with_suites("exit 0", "echo regression >&2; exit 4", "exit 0");

    temp.gt()
        .args(&["run"])
        .exits(1)
        .stdout_has("FAIL Performance Benchmark Tests")
        .stdout_has("Error: regression")
        .stdout_has("PASS Stability Tests")
        .stdout_has("1 suite(s) failed.");
}

#[test]
fn progress_goes_to_stderr() {
    let temp = Project::with_suites("exit 0", "exit 0", "exit 0");

    temp.gt()
        .args(&["run", "--api-only"])
        .passes()
        .stderr_has("Running API Compatibility Tests...")
        .stderr_has("Command: sh -c exit 0");
}

#[test]
fn api_only_runs_single_suite() {
    let temp = Project::with_suites("exit 0", "exit 1", "exit 1");

    temp.gt()
        .args(&["run", "--api-only"])
        .passes()
        .stdout_has("Total Suites:   1")
        .stdout_lacks("Stability Tests");
}

#[test]
fn stability_only_reports_its_failure() {
    let temp = Project::with_suites("exit 0", "exit 0", "exit 9");

    temp.gt().args(&["run", "--stability-only"]).exits(1).stdout_has("FAIL Stability Tests");
}

#[test]
fn timeout_flag_kills_slow_suite() {
    let temp = Project::with_suites("sleep 10", "exit 0", "exit 0");

    temp.gt()
        .args(&["run", "--api-only", "--timeout", "0.5"])
        .exits(1)
        .stdout_has("FAIL API Compatibility Tests (0.50s)")
        .stdout_has("Command timed out after 0.5 seconds");
}

#[test]
fn timeout_env_var_applies() {
    let temp = Project::with_suites("sleep 10", "exit 0", "exit 0");

    temp.gt()
        .args(&["run", "--api-only"])
        .env("GT_TIMEOUT_SECS", "0.5")
        .exits(1)
        .stdout_has("Command timed out after 0.5 seconds");
}

#[test]
fn missing_program_is_a_failed_suite() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
[suites.api]
command = ["gt-definitely-missing-program"]
"#,
    );

    temp.gt()
        .args(&["run", "--api-only"])
        .exits(1)
        .stdout_has("FAIL API Compatibility Tests")
        .stdout_has("failed to spawn");
}

#[test]
fn invalid_config_is_a_single_line_error() {
    let temp = Project::empty();
    temp.file(
        "gauntlet.toml",
        r#"
[suites.unit]
command = ["true"]
"#,
    );

    temp.gt().args(&["run"]).exits(1).stderr_has("error: invalid config");
}

#[test]
fn explicit_config_flag_is_used() {
    let temp = Project::empty();
    temp.file(
        "ci/gauntlet-ci.toml",
        r#"
[suites.api]
description = "Smoke Tests"
command = ["sh", "-c", "exit 0"]
"#,
    );

    temp.gt()
        .args(&["run", "--api-only", "--config", "ci/gauntlet-ci.toml"])
        .passes()
        .stdout_has("PASS Smoke Tests");
}

#[test]
fn install_failure_aborts_before_suites() {
    let temp = Project::empty();
    temp.catalog("touch api-ran", "exit 0", "exit 0", "echo no-index >&2; exit 1");

    temp.gt()
        .args(&["run", "--install-deps"])
        .exits(1)
        .stderr_has("Failed to install dependencies: no-index");
    assert!(!temp.exists("api-ran"));
}

#[test]
fn install_success_continues_to_suites() {
    let temp = Project::empty();
    temp.catalog("touch api-ran", "exit 0", "exit 0", "touch installed");

    temp.gt()
        .args(&["run", "--install-deps", "--api-only"])
        .passes()
        .stderr_has("Dependencies installed successfully");
    assert!(temp.exists("installed"));
    assert!(temp.exists("api-ran"));
}
