// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gt summarize`: fold saved run reports into summary artifacts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use gt_core::{Clock, SystemClock};
use gt_report::{
    aggregate, render_json, render_markdown, Aggregation, SUMMARY_JSON_FILE, SUMMARY_MARKDOWN_FILE,
};

use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::format_summary;

/// Which summary artifacts to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Json,
    #[default]
    Both,
}

impl ReportFormat {
    pub fn markdown(self) -> bool {
        matches!(self, Self::Markdown | Self::Both)
    }

    pub fn json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Directory holding saved test-report-<label>.json files (searched recursively)
    pub results_dir: PathBuf,

    /// Directory the summary artifacts are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Summary artifacts to write
    #[arg(long, value_enum, default_value_t)]
    pub format: ReportFormat,
}

pub fn handle(args: SummarizeArgs) -> Result<()> {
    println!("Loading test results from: {}", args.results_dir.display());
    let Aggregation { analysis, warnings } = aggregate(&args.results_dir)?;
    println!("Loaded {} run report(s)", analysis.runs_total());

    for path in write_artifacts(&analysis, &args.output_dir, args.format)? {
        println!("Report saved to: {}", path.display());
    }
    print!("{}", format_summary(&analysis, &warnings));

    if !analysis.all_passed() {
        return Err(ExitError::silent(EXIT_FAILURE).into());
    }
    Ok(())
}

/// Render and write the requested artifacts, returning the paths written.
pub fn write_artifacts(
    analysis: &gt_core::CompatibilityAnalysis,
    output_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let generated_at = SystemClock.now();
    let mut written = Vec::new();
    if format.markdown() {
        let path = output_dir.join(SUMMARY_MARKDOWN_FILE);
        write(&path, &render_markdown(analysis, generated_at))?;
        written.push(path);
    }
    if format.json() {
        let path = output_dir.join(SUMMARY_JSON_FILE);
        write(&path, &render_json(analysis, generated_at)?)?;
        written.push(path);
    }
    Ok(written)
}

fn write(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
#[path = "summarize_tests.rs"]
mod tests;
