// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical JSON document: the full data plus a metadata envelope.

use chrono::{DateTime, Utc};
use gt_core::{CompatibilityAnalysis, RunReport};
use indexmap::IndexMap;
use serde::Serialize;

use crate::Document;

/// Tool identifier written into every envelope.
pub const TOOL_NAME: &str = "gauntlet";

/// Version of the envelope layout.
pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Serialize)]
struct Envelope<'a> {
    metadata: Metadata,
    #[serde(flatten)]
    body: Body<'a>,
}

#[derive(Serialize)]
struct Metadata {
    generated_at: DateTime<Utc>,
    tool: &'static str,
    schema_version: &'static str,
    tool_version: &'static str,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Body<'a> {
    Run {
        report: &'a RunReport,
    },
    Compatibility {
        analysis: &'a CompatibilityAnalysis,
        results: &'a IndexMap<String, RunReport>,
    },
}

/// Render `doc` as pretty-printed JSON. Nothing is truncated.
pub fn render_json<'a>(
    doc: impl Into<Document<'a>>,
    generated_at: DateTime<Utc>,
) -> serde_json::Result<String> {
    let body = match doc.into() {
        Document::Run(report) => Body::Run { report },
        Document::Compatibility(analysis) => Body::Compatibility {
            analysis,
            results: analysis.reports_by_environment(),
        },
    };
    let envelope = Envelope {
        metadata: Metadata {
            generated_at,
            tool: TOOL_NAME,
            schema_version: SCHEMA_VERSION,
            tool_version: env!("CARGO_PKG_VERSION"),
        },
        body,
    };
    serde_json::to_string_pretty(&envelope)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
