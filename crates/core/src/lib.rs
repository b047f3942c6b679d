// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt-core: Data model for the gauntlet test orchestrator

pub mod macros;

pub mod analysis;
pub mod clock;
pub mod report;
pub mod result;
pub mod suite;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use analysis::CompatibilityAnalysis;
pub use clock::{Clock, FakeClock, SystemClock};
pub use result::{ExecutionResult, INTERNAL_FAILURE_EXIT_CODE};
pub use report::{ReportFormatError, RunReport, RunReportBuilder, RunSummary};
pub use suite::{Selection, SuiteKind};
