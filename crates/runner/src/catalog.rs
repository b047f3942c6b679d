// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed catalog of suites and the commands that run them.

use gt_core::SuiteKind;
use serde::Deserialize;

use crate::error::ConfigError;

/// How to invoke one suite.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteSpec {
    pub description: String,
    /// argv, program first. Never empty.
    pub command: Vec<String>,
}

/// Commands for every [`SuiteKind`], plus the dependency install step.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteCatalog {
    api: SuiteSpec,
    performance: SuiteSpec,
    stability: SuiteSpec,
    install: Vec<String>,
}

impl SuiteCatalog {
    /// Built-in pytest commands, run with the given interpreter.
    pub fn builtin(python: &str) -> Self {
        let pytest = |extra: &[&str]| {
            let mut argv = vec![python.to_string(), "-m".into(), "pytest".into()];
            argv.extend(extra.iter().map(|s| s.to_string()));
            argv
        };
        Self {
            api: SuiteSpec {
                description: SuiteKind::Api.description().into(),
                command: pytest(&["test_api_compatibility.py", "-v", "--tb=short"]),
            },
            performance: SuiteSpec {
                description: SuiteKind::Performance.description().into(),
                command: pytest(&[
                    "test_performance.py",
                    "-v",
                    "--benchmark-only",
                    "--benchmark-sort=mean",
                ]),
            },
            stability: SuiteSpec {
                description: SuiteKind::Stability.description().into(),
                command: pytest(&["test_stability.py", "-v", "--tb=short"]),
            },
            install: [python, "-m", "pip", "install", "-r", "requirements.txt"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn suite(&self, kind: SuiteKind) -> &SuiteSpec {
        match kind {
            SuiteKind::Api => &self.api,
            SuiteKind::Performance => &self.performance,
            SuiteKind::Stability => &self.stability,
        }
    }

    /// Command for `--install-deps`.
    pub fn install(&self) -> &[String] {
        &self.install
    }

    /// Overlay a parsed catalog file onto this catalog.
    pub(crate) fn apply(&mut self, file: CatalogFile) -> Result<(), ConfigError> {
        if let Some(install) = file.install {
            self.install = non_empty("install", install.command)?;
        }
        let overrides = [
            (SuiteKind::Api, file.suites.api),
            (SuiteKind::Performance, file.suites.performance),
            (SuiteKind::Stability, file.suites.stability),
        ];
        for (kind, entry) in overrides {
            let Some(entry) = entry else { continue };
            let command = non_empty(&format!("suite `{kind}`"), entry.command)?;
            let spec = match kind {
                SuiteKind::Api => &mut self.api,
                SuiteKind::Performance => &mut self.performance,
                SuiteKind::Stability => &mut self.stability,
            };
            spec.command = command;
            if let Some(description) = entry.description {
                spec.description = description;
            }
        }
        Ok(())
    }
}

fn non_empty(name: &str, command: Vec<String>) -> Result<Vec<String>, ConfigError> {
    if command.first().is_none_or(|program| program.is_empty()) {
        return Err(ConfigError::EmptyCommand { name: name.to_string() });
    }
    Ok(command)
}

/// On-disk catalog (`gauntlet.toml`).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogFile {
    pub(crate) timeout_secs: Option<f64>,
    pub(crate) install: Option<CommandEntry>,
    #[serde(default)]
    pub(crate) suites: SuiteEntries,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SuiteEntries {
    api: Option<SuiteEntry>,
    performance: Option<SuiteEntry>,
    stability: Option<SuiteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SuiteEntry {
    description: Option<String>,
    command: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CommandEntry {
    command: Vec<String>,
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
