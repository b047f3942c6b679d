//! Specs for `gt run` report persistence and JSON output.

use crate::prelude::*;

#[test]
fn save_report_writes_labelled_file() {
    let temp = Project::with_suites("exit 0", "echo slow >&2; exit 1", "exit 0");

    temp.gt()
        .args(&["run", "--save-report", "--env-label", "3.11"])
        .exits(1)
        .stderr_has("Test report saved to: test-report-3.11.json");

    let report = temp.json("test-report-3.11.json");
    assert_eq!(report["summary"]["total"], 3);
    assert_eq!(report["summary"]["succeeded"], 2);
    assert_eq!(report["summary"]["failed"], 1);
    assert_eq!(report["environment_label"], "3.11");
    assert_eq!(report["interrupted"], false);
    assert_eq!(report["results"][1]["description"], "Performance Benchmark Tests");
    assert_eq!(report["results"][1]["stderr"], "slow\n");
}

#[test]
fn report_file_implies_save() {
    let temp = Project::with_suites("exit 0", "exit 0", "exit 0");

    temp.gt().args(&["run", "--api-only", "--report-file", "out/run.json"]).passes();

    let report = temp.json("out/run.json");
    assert_eq!(report["summary"]["total"], 1);
    assert_eq!(report["environment_label"], "local");
}

#[test]
fn env_label_and_descriptor_from_environment() {
    let temp = Project::with_suites("exit 0", "exit 0", "exit 0");

    temp.gt()
        .args(&["run", "--api-only", "--save-report"])
        .env("GT_ENV_LABEL", "ci-3.12")
        .env("GT_ENV_DESCRIPTOR", "CPython 3.12.4")
        .passes()
        .stdout_has("Label:    ci-3.12")
        .stdout_has("Descriptor: CPython 3.12.4");

    let report = temp.json("test-report-ci-3.12.json");
    assert_eq!(report["descriptor"], "CPython 3.12.4");
}

#[test]
fn json_output_prints_enveloped_report() {
    let temp = Project::with_suites("echo hello", "exit 0", "exit 0");

    let stdout = temp.gt().args(&["run", "--api-only", "--output", "json"]).passes().stdout();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(doc["metadata"]["tool"], "gauntlet");
    assert_eq!(doc["metadata"]["schema_version"], "1.0.0");
    assert_eq!(doc["report"]["summary"]["total"], 1);
    assert_eq!(doc["report"]["results"][0]["stdout"], "hello\n");
}

#[test]
fn no_report_file_unless_requested() {
    let temp = Project::with_suites("exit 0", "exit 0", "exit 0");
    temp.gt().args(&["run", "--api-only"]).passes();
    assert!(!temp.exists("test-report-local.json"));
}
