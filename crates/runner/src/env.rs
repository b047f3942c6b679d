// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;
use std::time::Duration;

/// Interpreter used by the built-in suite catalog (`GT_PYTHON`, default `python3`).
pub fn python() -> String {
    std::env::var("GT_PYTHON").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "python3".into())
}

/// Per-suite timeout override in seconds (`GT_TIMEOUT_SECS`).
///
/// Unparseable or non-positive values are ignored.
pub fn timeout() -> Option<Duration> {
    std::env::var("GT_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map(Duration::from_secs_f64)
}

/// Explicit catalog file (`GT_CONFIG`).
pub fn config_path() -> Option<PathBuf> {
    std::env::var("GT_CONFIG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Environment label when none is given on the command line (`GT_ENV_LABEL`).
pub fn env_label() -> Option<String> {
    std::env::var("GT_ENV_LABEL").ok().filter(|s| !s.is_empty())
}

/// Opaque environment descriptor recorded in run reports (`GT_ENV_DESCRIPTOR`).
pub fn env_descriptor() -> Option<String> {
    std::env::var("GT_ENV_DESCRIPTOR").ok().filter(|s| !s.is_empty())
}
