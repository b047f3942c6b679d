// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock source for report timestamps

use chrono::{DateTime, TimeZone, Utc};

/// Source of "now" for anything that stamps a report.
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for deterministic timestamps
#[derive(Clone, Copy, Debug)]
pub struct FakeClock {
    now: DateTime<Utc>,
}

impl FakeClock {
    /// Fixed at 2026-01-01T00:00:00Z.
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap_or_default())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
