// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{ExecutionResult, FakeClock, RunReport};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for the result model.
pub mod strategies {
    use crate::ExecutionResult;
    use proptest::prelude::*;

    pub fn arb_execution_result() -> impl Strategy<Value = ExecutionResult> {
        (prop_oneof![Just(0), 1..=5i32, Just(-1)], 0.0..600.0f64, ".{0,300}").prop_map(
            |(exit_code, duration_seconds, stderr)| ExecutionResult {
                description: "suite".to_string(),
                success: exit_code == 0,
                exit_code,
                stdout: String::new(),
                stderr,
                duration_seconds,
            },
        )
    }

    pub fn arb_results() -> impl Strategy<Value = Vec<ExecutionResult>> {
        prop::collection::vec(arb_execution_result(), 0..8)
    }
}

// ── Factories ───────────────────────────────────────────────────────────

pub fn passing(description: &str, duration_seconds: f64) -> ExecutionResult {
    ExecutionResult {
        description: description.to_string(),
        success: true,
        exit_code: 0,
        stdout: String::new(),
        stderr: String::new(),
        duration_seconds,
    }
}

pub fn failing(description: &str, stderr: &str, duration_seconds: f64) -> ExecutionResult {
    ExecutionResult {
        success: false,
        exit_code: 1,
        stderr: stderr.to_string(),
        ..passing(description, duration_seconds)
    }
}

/// Report with `passed` passing and `failed` failing suites, stamped by a [`FakeClock`].
pub fn report_with(label: &str, passed: usize, failed: usize) -> RunReport {
    let mut results = Vec::new();
    for i in 0..passed {
        results.push(passing(&format!("Passing Suite {}", i + 1), 1.0));
    }
    for i in 0..failed {
        results.push(failing(&format!("Failing Suite {}", i + 1), "AssertionError", 2.0));
    }
    RunReport::build(results, label, &FakeClock::new())
}
