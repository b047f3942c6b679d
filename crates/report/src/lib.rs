// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt-report: Cross-run aggregation and report rendering
//!
//! Rendering is pure. Callers decide where (and whether) the rendered text
//! is written.

pub mod discover;
mod error;
pub mod json;
pub mod markdown;

pub use discover::{aggregate, discover_and_load, Aggregation, LoadWarning, LoadedReports};
pub use error::ReportError;
pub use json::{render_json, SCHEMA_VERSION, TOOL_NAME};
pub use markdown::{render_markdown, STDERR_EXCERPT_CHARS};

use gt_core::{CompatibilityAnalysis, RunReport};

/// Summary artifact file names.
pub const SUMMARY_MARKDOWN_FILE: &str = "summary-report.md";
pub const SUMMARY_JSON_FILE: &str = "summary-report.json";

/// Anything the renderers accept.
#[derive(Debug, Clone, Copy)]
pub enum Document<'a> {
    Run(&'a RunReport),
    Compatibility(&'a CompatibilityAnalysis),
}

impl<'a> From<&'a RunReport> for Document<'a> {
    fn from(report: &'a RunReport) -> Self {
        Document::Run(report)
    }
}

impl<'a> From<&'a CompatibilityAnalysis> for Document<'a> {
    fn from(analysis: &'a CompatibilityAnalysis) -> Self {
        Document::Compatibility(analysis)
    }
}
