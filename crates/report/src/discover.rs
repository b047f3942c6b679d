// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discover persisted run reports and fold them into a compatibility analysis.
//!
//! Reports are found by extension under the results directory (recursively)
//! and labelled by file name: `test-report-<label>.json`. Files that do not
//! follow the convention, cannot be read, or fail to decode are skipped with
//! a [`LoadWarning`]; the scan carries on with whatever loads. When two files
//! carry the same label, the one loaded later replaces the earlier report
//! (paths are visited in sorted order, so this is deterministic).

use std::fmt;
use std::path::{Path, PathBuf};

use gt_core::{CompatibilityAnalysis, RunReport};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::error::ReportError;

/// File name prefix of a persisted run report.
pub const REPORT_PREFIX: &str = "test-report-";

/// A file that was skipped during discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not load {}: {}", self.path.display(), self.reason)
    }
}

/// Everything found under a results directory.
#[derive(Debug, Default)]
pub struct LoadedReports {
    pub reports: IndexMap<String, RunReport>,
    pub warnings: Vec<LoadWarning>,
    /// Non-JSON result files (`*.xml`) seen during the scan.
    pub auxiliary_files: usize,
}

/// Outcome of [`aggregate`].
#[derive(Debug)]
pub struct Aggregation {
    pub analysis: CompatibilityAnalysis,
    pub warnings: Vec<LoadWarning>,
}

/// Label encoded in a report file name, if it follows the convention.
pub fn label_from_file_name(path: &Path) -> Option<&str> {
    path.file_name()?
        .to_str()?
        .strip_prefix(REPORT_PREFIX)?
        .strip_suffix(".json")
        .filter(|label| !label.is_empty())
}

/// Recursively load every `test-report-<label>.json` under `dir`.
pub fn discover_and_load(dir: &Path) -> Result<LoadedReports, ReportError> {
    if !dir.is_dir() {
        return Err(ReportError::MissingDirectory { dir: dir.to_path_buf() });
    }

    let mut loaded = LoadedReports {
        auxiliary_files: find(dir, "xml")?.len(),
        ..LoadedReports::default()
    };
    let json_files = find(dir, "json")?;
    info!(
        dir = %dir.display(),
        json = json_files.len(),
        xml = loaded.auxiliary_files,
        "scanned results directory"
    );

    for path in json_files {
        let Some(label) = label_from_file_name(&path) else {
            loaded.skip(path, format!("file name does not match {REPORT_PREFIX}<label>.json"));
            continue;
        };
        let label = label.to_string();

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                loaded.skip(path, e.to_string());
                continue;
            }
        };
        let report = match serde_json::from_str::<RunReport>(&text) {
            Ok(report) => report.with_environment_label(label.clone()),
            Err(e) => {
                loaded.skip(path, e.to_string());
                continue;
            }
        };

        if loaded.reports.insert(label.clone(), report).is_some() {
            warn!(label = %label, path = %path.display(), "duplicate environment label, keeping later report");
        }
        debug!(label = %label, path = %path.display(), "loaded run report");
    }

    Ok(loaded)
}

/// Load reports under `dir` and build the cross-environment analysis.
///
/// Fails with [`ReportError::NoReports`] when nothing loads.
pub fn aggregate(dir: &Path) -> Result<Aggregation, ReportError> {
    let loaded = discover_and_load(dir)?;
    if loaded.reports.is_empty() {
        return Err(ReportError::NoReports { dir: dir.to_path_buf() });
    }
    let analysis = CompatibilityAnalysis::from_reports(loaded.reports)
        .with_auxiliary_files(loaded.auxiliary_files);
    Ok(Aggregation { analysis, warnings: loaded.warnings })
}

impl LoadedReports {
    fn skip(&mut self, path: PathBuf, reason: String) {
        warn!(path = %path.display(), reason = %reason, "skipping result file");
        self.warnings.push(LoadWarning { path, reason });
    }
}

/// Files with `extension` anywhere under `dir`, in sorted order.
fn find(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ReportError> {
    let root = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{root}/**/*.{extension}");
    // Unreadable entries are skipped
    Ok(glob::glob(&pattern)?.filter_map(Result::ok).filter(|p| p.is_file()).collect())
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
