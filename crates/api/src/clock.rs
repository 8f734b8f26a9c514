// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, OffsetDateTime};

/// Source of the current date and time.
///
/// Handlers never read ambient time directly; they take a clock so the
/// date-sensitive submission rules are deterministic under test. "Today"
/// is a wall-clock calendar date in the caller's local timezone, never a
/// date re-derived through UTC conversion.
pub trait Clock {
    /// Returns the current timestamp.
    fn now(&self) -> OffsetDateTime;

    /// Returns the current wall-clock calendar date.
    fn today(&self) -> Date {
        self.now().date()
    }
}

/// The production clock, backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        // Local wall-clock time; falls back to UTC when the local offset
        // cannot be determined (e.g., restricted environments).
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}
