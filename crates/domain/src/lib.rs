// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod period;
mod submission;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use calendar::{
    CalendarException, DAILY_QUOTA_HOURS, ExceptionKind, Holiday, WorkCalendar, expected_hours,
    expected_hours_to_date, is_working_day,
};
pub use error::DomainError;
pub use period::{Period, PeriodAction, PeriodKey, PeriodRecord, PeriodStatus};
pub use submission::{
    FINAL_WINDOW_DAYS, SUBMISSION_TOLERANCE_HOURS, SubmissionCheck, SubmissionDenial,
    SubmissionSummary, evaluate_submission, month_logged_hours,
};
pub use types::{ManagerChain, MonthRef, TimeEntry, UserId};
