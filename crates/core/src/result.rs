// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of one suite command invocation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exit code recorded when the command never produced one of its own
/// (spawn failure, timeout, wait error).
pub const INTERNAL_FAILURE_EXIT_CODE: i32 = -1;

/// Record of a single suite command execution.
///
/// Output is stored in full; truncation happens only when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Human-readable label, e.g. "API Compatibility Tests".
    pub description: String,
    /// True iff the process exited with code zero.
    pub success: bool,
    /// Process exit code, or [`INTERNAL_FAILURE_EXIT_CODE`].
    #[serde(alias = "returncode")]
    pub exit_code: i32,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    /// Wall-clock duration. Equals the timeout for killed commands.
    #[serde(alias = "duration")]
    pub duration_seconds: f64,
}

impl ExecutionResult {
    /// A command that ran to completion and produced its own exit code.
    pub fn completed(
        description: impl Into<String>,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            description: description.into(),
            success: exit_code == 0,
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            duration_seconds: duration.as_secs_f64(),
        }
    }

    /// A command that was killed for exceeding `timeout`.
    pub fn timed_out(description: impl Into<String>, timeout: Duration) -> Self {
        Self {
            description: description.into(),
            success: false,
            exit_code: INTERNAL_FAILURE_EXIT_CODE,
            stdout: String::new(),
            stderr: format!("Command timed out after {} seconds", timeout.as_secs_f64()),
            duration_seconds: timeout.as_secs_f64(),
        }
    }

    /// A command that could not be started (or waited on).
    pub fn spawn_failed(description: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            description: description.into(),
            success: false,
            exit_code: INTERNAL_FAILURE_EXIT_CODE,
            stdout: String::new(),
            stderr: error.to_string(),
            duration_seconds: 0.0,
        }
    }

    /// First `limit` characters of stderr, with `...` appended when cut.
    pub fn stderr_excerpt(&self, limit: usize) -> String {
        truncate_chars(&self.stderr, limit)
    }
}

/// Truncate to `limit` characters (not bytes), appending `...` when cut.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
