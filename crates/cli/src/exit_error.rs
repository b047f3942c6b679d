// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` can stop logging before the process terminates.

use std::fmt;

/// A suite or run failed.
pub const EXIT_FAILURE: i32 = 1;

/// The operator interrupted the run.
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    /// Printed to stderr by `main`; empty when the command already reported.
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit with `code` without printing anything further.
    pub fn silent(code: i32) -> Self {
        Self::new(code, "")
    }

    pub fn interrupted() -> Self {
        Self::new(EXIT_INTERRUPTED, "Tests interrupted by user")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "exit status {}", self.code)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ExitError {}
