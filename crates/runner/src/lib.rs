// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gt-runner: Subprocess execution and suite sequencing
//!
//! [`CommandRunner`] runs one external command under a wall-clock timeout and
//! always returns an [`gt_core::ExecutionResult`]. [`SuiteOrchestrator`]
//! walks the [`SuiteCatalog`] for a [`gt_core::Selection`], one suite at a
//! time, and stops early only on operator interruption.

pub mod catalog;
pub mod command;
pub mod config;
pub mod env;
mod error;
pub mod orchestrator;

pub use catalog::{SuiteCatalog, SuiteSpec};
pub use command::CommandRunner;
pub use config::{RunnerConfig, DEFAULT_CONFIG_FILE, DEFAULT_TIMEOUT};
pub use error::ConfigError;
pub use orchestrator::{RunOutcome, SuiteObserver, SuiteOrchestrator, SuiteRun};
