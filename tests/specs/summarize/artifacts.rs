//! Specs for `gt summarize` aggregation, artifacts, and exit codes.

use crate::prelude::*;

const PASSING_REPORT: &str = r#"{
  "summary": {"total": 1, "succeeded": 1, "failed": 0, "success_rate": 1.0, "total_duration_seconds": 1.5},
  "results": [
    {"description": "API Compatibility Tests", "success": true, "exit_code": 0,
     "stdout": "", "stderr": "", "duration_seconds": 1.5}
  ],
  "environment_label": "3.12",
  "platform": "linux-x86_64",
  "interrupted": false,
  "generated_at": "2026-01-01T00:00:00Z",
  "timestamp": 1767225600.0
}"#;

/// Report as written by the earlier Python runner.
const LEGACY_FAILING_REPORT: &str = r#"{
  "summary": {"total_tests": 2, "successful_tests": 1, "failed_tests": 1,
              "success_rate": 50.0, "total_duration": 3.0},
  "results": [
    {"success": true, "returncode": 0, "stdout": "", "stderr": "", "duration": 1.0,
     "description": "API Compatibility Tests"},
    {"success": false, "returncode": 1, "stdout": "", "stderr": "AssertionError: drift",
     "duration": 2.0, "description": "Stability Tests"}
  ],
  "timestamp": 1767225600.0,
  "python_version": "3.9.18 (main, Jan 1 2026)",
  "platform": "linux"
}"#;

#[test]
fn all_passing_runs_exit_zero_and_write_both_artifacts() {
    let temp = Project::empty();
    temp.file("results/py312/test-report-3.12.json", PASSING_REPORT);
    temp.file("results/py313/test-report-3.13.json", PASSING_REPORT);

    temp.gt()
        .args(&["summarize", "results", "--output-dir", "summary"])
        .passes()
        .stdout_has("Loaded 2 run report(s)")
        .stdout_has("Total Runs:   2")
        .stdout_has("All test runs passed successfully!");

    let markdown = temp.read("summary/summary-report.md");
    assert!(markdown.contains("| 3.12 | PASS | 1/1 | 1.50s |"));
    assert!(markdown.contains("| 3.13 | PASS | 1/1 | 1.50s |"));

    let json = temp.json("summary/summary-report.json");
    assert_eq!(json["metadata"]["tool"], "gauntlet");
    assert_eq!(json["analysis"]["runs_total"], 2);
    assert_eq!(json["results"]["3.13"]["environment_label"], "3.13");
}

#[test]
fn any_failed_run_exits_one() {
    let temp = Project::empty();
    temp.file("results/test-report-3.12.json", PASSING_REPORT);
    temp.file("results/test-report-3.9.json", LEGACY_FAILING_REPORT);

    temp.gt()
        .args(&["summarize", "results"])
        .exits(1)
        .stdout_has("Success Rate: 50.0%")
        .stdout_has("FAIL 3.9 (1/2 suites)")
        .stdout_has("1 test run(s) failed.");

    let markdown = temp.read("summary-report.md");
    assert!(markdown.contains("- **Descriptor:** 3.9.18 (main, Jan 1 2026)"));
    assert!(markdown.contains("  - Error: `AssertionError: drift`"));
}

#[test]
fn malformed_reports_are_skipped() {
    let temp = Project::empty();
    temp.file("results/test-report-3.12.json", PASSING_REPORT);
    temp.file("results/test-report-3.8.json", "{ truncated");
    temp.file("results/junit-3.12.xml", "<testsuite/>");

    temp.gt()
        .args(&["summarize", "results", "--format", "json"])
        .passes()
        .stdout_has("Skipped 1 file(s):")
        .stdout_has("test-report-3.8.json");

    assert!(!temp.exists("summary-report.md"));
    let json = temp.json("summary-report.json");
    assert_eq!(json["analysis"]["runs_total"], 1);
    assert_eq!(json["analysis"]["auxiliary_files"], 1);
}

#[test]
fn empty_results_dir_exits_one() {
    let temp = Project::empty();
    temp.file("results/notes.txt", "nothing here");

    temp.gt().args(&["summarize", "results"]).exits(1).stderr_has("no test reports found");
    assert!(!temp.exists("summary-report.md"));
}

#[test]
fn missing_results_dir_exits_one() {
    let temp = Project::empty();
    temp.gt().args(&["summarize", "nope"]).exits(1).stderr_has("does not exist");
}

#[test]
fn run_then_summarize_round_trip() {
    let temp = Project::with_suites("exit 0", "exit 0", "exit 0");

    temp.gt().args(&["run", "--report-file", "results/test-report-a.json", "--env-label", "a"]).passes();
    temp.gt().args(&["run", "--report-file", "results/test-report-b.json", "--env-label", "b"]).passes();

    temp.gt()
        .args(&["summarize", "results", "--format", "markdown"])
        .passes()
        .stdout_has("PASS a (3/3 suites)")
        .stdout_has("PASS b (3/3 suites)");
    assert!(temp.read("summary-report.md").contains("## Environment Compatibility"));
}
