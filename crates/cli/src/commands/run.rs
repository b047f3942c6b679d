// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt run`: execute the selected suites and report the outcome.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use gt_core::{RunReport, RunReportBuilder, Selection, SystemClock};
use gt_report::{discover::REPORT_PREFIX, render_json, STDERR_EXCERPT_CHARS};
use gt_runner::{env, CommandRunner, RunnerConfig, SuiteOrchestrator};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::{format_run_report, ConsoleProgress, OutputFormat};

/// Environment label when neither `--env-label` nor `GT_ENV_LABEL` is set.
pub const DEFAULT_ENV_LABEL: &str = "local";

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selection").args(["api_only", "performance_only", "stability_only"])
))]
pub struct RunArgs {
    /// Run only the API compatibility suite
    #[arg(long)]
    pub api_only: bool,

    /// Run only the performance benchmark suite
    #[arg(long)]
    pub performance_only: bool,

    /// Run only the stability suite
    #[arg(long)]
    pub stability_only: bool,

    /// Install test dependencies before running any suite
    #[arg(long)]
    pub install_deps: bool,

    /// Save the run report as test-report-<label>.json
    #[arg(long)]
    pub save_report: bool,

    /// Save the run report to PATH (implies --save-report)
    #[arg(long, value_name = "PATH")]
    pub report_file: Option<PathBuf>,

    /// Environment label recorded in the report (default: $GT_ENV_LABEL or "local")
    #[arg(long, value_name = "LABEL")]
    pub env_label: Option<String>,

    /// Per-suite timeout in seconds (default: $GT_TIMEOUT_SECS, config, or 300)
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Suite catalog file (default: $GT_CONFIG or ./gauntlet.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Console output format
    #[arg(long, short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

impl RunArgs {
    pub fn selection(&self) -> Selection {
        Selection::from_flags(self.api_only, self.performance_only, self.stability_only)
    }

    pub fn env_label(&self) -> String {
        self.env_label
            .clone()
            .or_else(env::env_label)
            .unwrap_or_else(|| DEFAULT_ENV_LABEL.to_string())
    }

    /// Where the report is saved, if saving was requested.
    pub fn report_path(&self, label: &str) -> Option<PathBuf> {
        match &self.report_file {
            Some(path) => Some(path.clone()),
            None if self.save_report => Some(PathBuf::from(format!("{REPORT_PREFIX}{label}.json"))),
            None => None,
        }
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("`{s}` is not a number of seconds"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be positive, got {s}"));
    }
    Ok(Duration::from_secs_f64(secs))
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let config = RunnerConfig::load(args.config.as_deref(), args.timeout)?;
    let orchestrator = SuiteOrchestrator::new(CommandRunner::new(), config);

    let cancel = CancellationToken::new();
    let listener = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, stopping run");
                cancel.cancel();
            }
        })
    };

    let result = execute(&args, &orchestrator, &cancel).await;
    listener.abort();
    result
}

async fn execute(
    args: &RunArgs,
    orchestrator: &SuiteOrchestrator,
    cancel: &CancellationToken,
) -> Result<()> {
    if args.install_deps {
        eprintln!("Installing test dependencies...");
        match orchestrator.install(cancel).await {
            None => return Err(ExitError::interrupted().into()),
            Some(result) if !result.success => {
                return Err(ExitError::new(
                    EXIT_FAILURE,
                    format!(
                        "Failed to install dependencies: {}",
                        result.stderr_excerpt(STDERR_EXCERPT_CHARS).trim()
                    ),
                )
                .into());
            }
            Some(_) => eprintln!("Dependencies installed successfully"),
        }
    }

    let selection = args.selection();
    info!(%selection, timeout_secs = orchestrator.timeout().as_secs_f64(), "starting run");
    let run = orchestrator.run_suites_observed(selection, cancel, &ConsoleProgress).await;

    let interrupted = run.interrupted();
    let label = args.env_label();
    let report = RunReportBuilder::new(run.results, label.as_str())
        .descriptor(env::env_descriptor())
        .interrupted(interrupted)
        .build(&SystemClock);

    match args.output {
        OutputFormat::Text => print!("{}", format_run_report(&report)),
        OutputFormat::Json => println!("{}", render_json(&report, report.generated_at())?),
    }

    if let Some(path) = args.report_path(&label) {
        save_report(&report, &path)?;
        eprintln!("Test report saved to: {}", path.display());
    }

    if report.interrupted() {
        return Err(ExitError::interrupted().into());
    }
    if !report.passed() {
        return Err(ExitError::silent(EXIT_FAILURE).into());
    }
    Ok(())
}

/// Persist `report` in the form `gt summarize` loads.
pub fn save_report(report: &RunReport, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let text = serde_json::to_string_pretty(report)?;
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
