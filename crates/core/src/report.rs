// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run report: the aggregate of one orchestration pass.
//!
//! A [`RunReport`] is built once from a finalized, ordered list of
//! [`ExecutionResult`]s and is immutable afterwards. Its summary counts are
//! always derived from the results, including when a persisted report is
//! decoded: a file whose recorded summary disagrees with its results is
//! rejected at the JSON boundary.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::result::ExecutionResult;

/// Derived counts for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(alias = "total_tests")]
    pub total: usize,
    #[serde(alias = "successful_tests")]
    pub succeeded: usize,
    #[serde(alias = "failed_tests")]
    pub failed: usize,
    /// `succeeded / total`, or 0 for an empty run.
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default, alias = "total_duration")]
    pub total_duration_seconds: f64,
}

impl RunSummary {
    pub fn from_results(results: &[ExecutionResult]) -> Self {
        let total = results.len();
        let succeeded = results.iter().filter(|r| r.success).count();
        let failed = total - succeeded;
        let success_rate = if total > 0 { succeeded as f64 / total as f64 } else { 0.0 };
        let total_duration_seconds = results.iter().map(|r| r.duration_seconds).sum();
        Self { total, succeeded, failed, success_rate, total_duration_seconds }
    }
}

/// Errors raised while decoding a persisted run report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportFormatError {
    #[error("summary {field} is {recorded} but results imply {derived}")]
    SummaryMismatch { field: &'static str, recorded: usize, derived: usize },

    #[error("result {index} ({description}) has success={success} but exit code {exit_code}")]
    OutcomeMismatch { index: usize, description: String, success: bool, exit_code: i32 },
}

/// Aggregate outcome of one orchestration invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RunReportRecord")]
pub struct RunReport {
    summary: RunSummary,
    results: Vec<ExecutionResult>,
    environment_label: String,
    platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptor: Option<String>,
    interrupted: bool,
    generated_at: DateTime<Utc>,
    /// Unix seconds, kept alongside `generated_at` for older readers.
    timestamp: f64,
}

impl RunReport {
    /// Fold `results` into a report with default metadata.
    pub fn build(
        results: Vec<ExecutionResult>,
        environment_label: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        RunReportBuilder::new(results, environment_label).build(clock)
    }

    pub fn total(&self) -> usize {
        self.summary.total
    }

    pub fn succeeded(&self) -> usize {
        self.summary.succeeded
    }

    pub fn failed(&self) -> usize {
        self.summary.failed
    }

    pub fn success_rate(&self) -> f64 {
        self.summary.success_rate
    }

    pub fn total_duration_seconds(&self) -> f64 {
        self.summary.total_duration_seconds
    }

    /// Results in invocation order.
    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    pub fn environment_label(&self) -> &str {
        &self.environment_label
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Opaque environment descriptor (e.g. interpreter version string).
    pub fn descriptor(&self) -> Option<&str> {
        self.descriptor.as_deref()
    }

    /// True when the run was stopped by the operator before every
    /// selected suite ran.
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// A run passes iff none of its results failed.
    pub fn passed(&self) -> bool {
        self.summary.failed == 0
    }

    /// Replace the environment label (the file name is authoritative on load).
    pub fn with_environment_label(mut self, label: impl Into<String>) -> Self {
        self.environment_label = label.into();
        self
    }
}

/// Builder for [`RunReport`] metadata beyond the results themselves.
pub struct RunReportBuilder {
    results: Vec<ExecutionResult>,
    environment_label: String,
    platform: String,
    descriptor: Option<String>,
    interrupted: bool,
}

impl RunReportBuilder {
    pub fn new(results: Vec<ExecutionResult>, environment_label: impl Into<String>) -> Self {
        Self {
            results,
            environment_label: environment_label.into(),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            descriptor: None,
            interrupted: false,
        }
    }

    /// Override the `<os>-<arch>` platform string.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn descriptor(mut self, descriptor: Option<String>) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// Mark the run as cut short by an interrupt.
    pub fn interrupted(mut self, interrupted: bool) -> Self {
        self.interrupted = interrupted;
        self
    }

    pub fn build(self, clock: &impl Clock) -> RunReport {
        let now = clock.now();
        RunReport {
            summary: RunSummary::from_results(&self.results),
            results: self.results,
            environment_label: self.environment_label,
            platform: self.platform,
            descriptor: self.descriptor,
            interrupted: self.interrupted,
            generated_at: now,
            timestamp: now.timestamp_millis() as f64 / 1000.0,
        }
    }
}

/// On-disk shape accepted when decoding. Also accepts the field names
/// written by the earlier Python runner.
#[derive(Deserialize)]
struct RunReportRecord {
    summary: RunSummary,
    results: Vec<ExecutionResult>,
    #[serde(default)]
    environment_label: String,
    #[serde(default)]
    platform: String,
    #[serde(default, alias = "python_version")]
    descriptor: Option<String>,
    #[serde(default)]
    interrupted: bool,
    #[serde(default)]
    generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    timestamp: f64,
}

impl TryFrom<RunReportRecord> for RunReport {
    type Error = ReportFormatError;

    fn try_from(record: RunReportRecord) -> Result<Self, Self::Error> {
        // A result passes iff its exit code is zero.
        if let Some((index, result)) =
            record.results.iter().enumerate().find(|(_, r)| r.success != (r.exit_code == 0))
        {
            return Err(ReportFormatError::OutcomeMismatch {
                index,
                description: result.description.clone(),
                success: result.success,
                exit_code: result.exit_code,
            });
        }

        let derived = RunSummary::from_results(&record.results);
        let checks = [
            ("total", record.summary.total, derived.total),
            ("succeeded", record.summary.succeeded, derived.succeeded),
            ("failed", record.summary.failed, derived.failed),
        ];
        for (field, recorded, derived) in checks {
            if recorded != derived {
                return Err(ReportFormatError::SummaryMismatch { field, recorded, derived });
            }
        }

        let generated_at = record
            .generated_at
            .or_else(|| Utc.timestamp_millis_opt((record.timestamp * 1000.0) as i64).single())
            .unwrap_or_default();

        Ok(RunReport {
            summary: derived,
            results: record.results,
            environment_label: record.environment_label,
            platform: record.platform,
            descriptor: record.descriptor,
            interrupted: record.interrupted,
            generated_at,
            timestamp: record.timestamp,
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
