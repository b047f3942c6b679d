// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration error types.
//!
//! Command execution has no error type: every invocation failure is folded
//! into a failed `ExecutionResult`.

use std::path::PathBuf;

/// Errors that can occur while resolving the suite catalog.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config {}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("{name} has an empty command")]
    EmptyCommand { name: String },

    #[error("invalid timeout {value}: must be a positive number of seconds")]
    InvalidTimeout { value: f64 },
}
