// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suite identities and selection.

use serde::{Deserialize, Serialize};

/// One of the fixed, externally executed test suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteKind {
    Api,
    Performance,
    Stability,
}

crate::labels! {
    SuiteKind {
        Api => "api",
        Performance => "performance",
        Stability => "stability",
    }
}

impl SuiteKind {
    /// Catalog order: API, then performance, then stability.
    pub const ALL: [SuiteKind; 3] = [SuiteKind::Api, SuiteKind::Performance, SuiteKind::Stability];

    /// Default human-readable description recorded in results.
    pub fn description(self) -> &'static str {
        match self {
            SuiteKind::Api => "API Compatibility Tests",
            SuiteKind::Performance => "Performance Benchmark Tests",
            SuiteKind::Stability => "Stability Tests",
        }
    }
}

/// Which suites a run invokes. Resolved once at the entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    Api,
    Performance,
    Stability,
    #[default]
    All,
}

crate::labels! {
    Selection {
        Api => "api",
        Performance => "performance",
        Stability => "stability",
        All => "all",
    }
}

impl Selection {
    /// Resolve `--api-only` / `--performance-only` / `--stability-only`.
    ///
    /// Flags are checked in catalog order; the first set flag wins.
    pub fn from_flags(api_only: bool, performance_only: bool, stability_only: bool) -> Self {
        if api_only {
            Selection::Api
        } else if performance_only {
            Selection::Performance
        } else if stability_only {
            Selection::Stability
        } else {
            Selection::All
        }
    }

    /// Suites to invoke, in catalog order.
    pub fn suites(self) -> &'static [SuiteKind] {
        match self {
            Selection::Api => &[SuiteKind::Api],
            Selection::Performance => &[SuiteKind::Performance],
            Selection::Stability => &[SuiteKind::Stability],
            Selection::All => &SuiteKind::ALL,
        }
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
