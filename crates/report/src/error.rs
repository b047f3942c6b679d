// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Whole-operation aggregation failures.
///
/// Per-file problems are not errors; they surface as `LoadWarning`s.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("results directory {} does not exist", dir.display())]
    MissingDirectory { dir: PathBuf },

    #[error("no test reports found in {}", dir.display())]
    NoReports { dir: PathBuf },

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
