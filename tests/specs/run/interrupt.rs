//! Specs for operator interruption of `gt run`.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::prelude::*;

/// SIGINT mid-run stops the orchestrator, keeps finished results, marks the
/// report as interrupted, and exits 130.
#[cfg(unix)]
#[test]
fn interrupt_keeps_partial_report_and_exits_130() {
    let temp = Project::with_suites("exit 0", "touch started; sleep 30", "touch stability-ran");

    let child = Command::new(gt_bin())
        .args(["run", "--save-report", "--env-label", "int"])
        .current_dir(temp.path())
        .env_remove("GT_CONFIG")
        .env_remove("GT_TIMEOUT_SECS")
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(20);
    while !temp.exists("started") {
        assert!(Instant::now() < deadline, "performance suite never started");
        std::thread::sleep(Duration::from_millis(50));
    }
    std::thread::sleep(Duration::from_millis(200));

    let started = Instant::now();
    let status = Command::new("kill").args(["-INT", &child.id().to_string()]).status().unwrap();
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(130));
    assert!(started.elapsed() < Duration::from_secs(10), "interrupt should not wait for the suite");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Tests interrupted by user"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Run interrupted"));
    assert!(stdout.contains("All completed suites passed."));
    assert!(!temp.exists("stability-ran"));

    let report = temp.json("test-report-int.json");
    assert_eq!(report["interrupted"], true);
    assert_eq!(report["summary"]["total"], 1);
    assert_eq!(report["results"][0]["description"], "API Compatibility Tests");
}
