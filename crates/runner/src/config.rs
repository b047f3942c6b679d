// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration: catalog file discovery and timeout precedence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::catalog::{CatalogFile, SuiteCatalog};
use crate::env;
use crate::error::ConfigError;

/// Per-suite timeout when nothing overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Catalog file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "gauntlet.toml";

/// Resolved settings for one orchestration pass.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub catalog: SuiteCatalog,
    pub timeout: Duration,
}

impl RunnerConfig {
    /// Resolve the catalog and timeout.
    ///
    /// Catalog file: `explicit` > `GT_CONFIG` > `./gauntlet.toml` (if it exists).
    /// Timeout: `cli_timeout` > `GT_TIMEOUT_SECS` > file `timeout_secs` > 300s.
    pub fn load(explicit: Option<&Path>, cli_timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let path = match explicit.map(Path::to_path_buf).or_else(env::config_path) {
            Some(path) => Some(path),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
        };
        let text = match &path {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .map_err(|source| ConfigError::Read { path: path.clone(), source })?,
            ),
            None => None,
        };
        let origin = path.unwrap_or_else(|| PathBuf::from("<builtin>"));
        Self::resolve(text.as_deref(), &origin, cli_timeout.or_else(env::timeout))
    }

    /// Build from optional catalog text. `timeout_override` wins over the file.
    pub fn resolve(
        text: Option<&str>,
        origin: &Path,
        timeout_override: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let mut catalog = SuiteCatalog::builtin(&env::python());
        let mut timeout = DEFAULT_TIMEOUT;

        if let Some(text) = text {
            let file: CatalogFile = toml::from_str(text)
                .map_err(|source| ConfigError::Parse { path: origin.to_path_buf(), source })?;
            if let Some(secs) = file.timeout_secs {
                if !secs.is_finite() || secs <= 0.0 {
                    return Err(ConfigError::InvalidTimeout { value: secs });
                }
                timeout = Duration::from_secs_f64(secs);
            }
            catalog.apply(file)?;
            debug!(path = %origin.display(), "loaded suite catalog");
        }

        if let Some(t) = timeout_override {
            timeout = t;
        }
        Ok(Self { catalog, timeout })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
