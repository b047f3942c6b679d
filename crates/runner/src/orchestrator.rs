// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential suite orchestration.
//!
//! Suites run one at a time in catalog order. A failing suite never stops
//! the sequence; only cancellation does, and a cancelled run is reported as
//! [`RunOutcome::Interrupted`] with the results collected so far.

use std::time::Duration;

use gt_core::{ExecutionResult, Selection, SuiteKind};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::catalog::{SuiteCatalog, SuiteSpec};
use crate::command::CommandRunner;
use crate::config::RunnerConfig;

/// How an orchestration pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every selected suite ran (some may have failed).
    Completed,
    /// Cancelled before every selected suite ran.
    Interrupted,
}

/// Results of one orchestration pass, in invocation order.
#[derive(Debug, Clone)]
pub struct SuiteRun {
    pub results: Vec<ExecutionResult>,
    pub outcome: RunOutcome,
}

impl SuiteRun {
    pub fn interrupted(&self) -> bool {
        self.outcome == RunOutcome::Interrupted
    }
}

/// Progress hooks for callers that display suites as they run.
pub trait SuiteObserver {
    fn suite_started(&self, _kind: SuiteKind, _spec: &SuiteSpec) {}
    fn suite_finished(&self, _kind: SuiteKind, _result: &ExecutionResult) {}
}

impl SuiteObserver for () {}

/// Runs the selected suites from a [`SuiteCatalog`].
#[derive(Debug, Clone)]
pub struct SuiteOrchestrator {
    runner: CommandRunner,
    catalog: SuiteCatalog,
    timeout: Duration,
}

impl SuiteOrchestrator {
    pub fn new(runner: CommandRunner, config: RunnerConfig) -> Self {
        Self { runner, catalog: config.catalog, timeout: config.timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run every suite in `selection`, in catalog order.
    pub async fn run_suites(&self, selection: Selection, cancel: &CancellationToken) -> SuiteRun {
        self.run_suites_observed(selection, cancel, &()).await
    }

    /// Like [`run_suites`](Self::run_suites), reporting progress to `observer`.
    pub async fn run_suites_observed(
        &self,
        selection: Selection,
        cancel: &CancellationToken,
        observer: &impl SuiteObserver,
    ) -> SuiteRun {
        let mut results = Vec::with_capacity(selection.suites().len());

        for &kind in selection.suites() {
            let spec = self.catalog.suite(kind);
            observer.suite_started(kind, spec);
            info!(suite = %kind, "running {}", spec.description);

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                result = self.runner.run(&spec.command, &spec.description, self.timeout) => Some(result),
            };
            let Some(result) = result else {
                warn!(suite = %kind, completed = results.len(), "run interrupted");
                return SuiteRun { results, outcome: RunOutcome::Interrupted };
            };

            if result.success {
                info!(suite = %kind, duration_secs = result.duration_seconds, "suite passed");
            } else {
                warn!(suite = %kind, exit_code = result.exit_code, "suite failed");
            }
            observer.suite_finished(kind, &result);
            results.push(result);
        }

        SuiteRun { results, outcome: RunOutcome::Completed }
    }

    /// Run the dependency install command. `None` if cancelled first.
    pub async fn install(&self, cancel: &CancellationToken) -> Option<ExecutionResult> {
        info!("installing test dependencies");
        tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = self.runner.run(self.catalog.install(), "Installing test dependencies", self.timeout) => Some(result),
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
