// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging lifecycle.
//!
//! `main` starts logging once and stops it before exiting. Library crates
//! only emit `tracing` events and never install a subscriber.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installed global subscriber. Dropping it (or calling [`Logging::stop`])
/// flushes any buffered file output.
#[must_use = "logs written to a file are lost unless the lifecycle is stopped"]
pub struct Logging {
    guard: Option<WorkerGuard>,
}

impl Logging {
    /// Install the subscriber, writing to stderr or appending to `log_file`.
    pub fn start(log_file: Option<&Path>) -> Result<Self> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

        let guard = match log_file {
            Some(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir)
                        .with_context(|| format!("failed to create {}", dir.display()))?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("failed to open log file {}", path.display()))?;
                let (writer, guard) = tracing_appender::non_blocking(file);
                subscriber
                    .with_ansi(false)
                    .with_writer(writer)
                    .try_init()
                    .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;
                Some(guard)
            }
            None => {
                subscriber
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;
                None
            }
        };
        Ok(Self { guard })
    }

    /// Flush and release the log writer.
    pub fn stop(self) {
        drop(self.guard);
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
