// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-environment compatibility analysis.

use indexmap::IndexMap;
use serde::Serialize;

use crate::report::RunReport;

/// Aggregate outcome across run reports from different environments.
///
/// Holds one report per environment label, in the order the labels were
/// first discovered. A run counts as failed iff its report has any failed
/// result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityAnalysis {
    environment_labels: Vec<String>,
    runs_total: usize,
    runs_passed: usize,
    runs_failed: usize,
    success_rate: f64,
    /// Auxiliary result files (e.g. JUnit XML) seen during discovery.
    auxiliary_files: usize,
    #[serde(skip)]
    reports_by_environment: IndexMap<String, RunReport>,
}

impl CompatibilityAnalysis {
    pub fn from_reports(reports_by_environment: IndexMap<String, RunReport>) -> Self {
        let runs_total = reports_by_environment.len();
        let runs_passed = reports_by_environment.values().filter(|r| r.passed()).count();
        let runs_failed = runs_total - runs_passed;
        let success_rate =
            if runs_total > 0 { runs_passed as f64 / runs_total as f64 } else { 0.0 };
        Self {
            environment_labels: reports_by_environment.keys().cloned().collect(),
            runs_total,
            runs_passed,
            runs_failed,
            success_rate,
            auxiliary_files: 0,
            reports_by_environment,
        }
    }

    pub fn with_auxiliary_files(mut self, count: usize) -> Self {
        self.auxiliary_files = count;
        self
    }

    pub fn environment_labels(&self) -> &[String] {
        &self.environment_labels
    }

    pub fn reports_by_environment(&self) -> &IndexMap<String, RunReport> {
        &self.reports_by_environment
    }

    pub fn runs_total(&self) -> usize {
        self.runs_total
    }

    pub fn runs_passed(&self) -> usize {
        self.runs_passed
    }

    pub fn runs_failed(&self) -> usize {
        self.runs_failed
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    pub fn auxiliary_files(&self) -> usize {
        self.auxiliary_files
    }

    pub fn all_passed(&self) -> bool {
        self.runs_failed == 0
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
