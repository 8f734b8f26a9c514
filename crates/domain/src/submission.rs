// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission gating for a monthly period.
//!
//! This module decides whether a month may be submitted right now and
//! produces the confirmation summary shown before final submission. It is
//! pure: a "no" is a value carrying the numbers the caller needs to render
//! guidance, never an error.

use crate::types::{MonthRef, TimeEntry};
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// The allowed shortfall, in hours, for early submission.
pub const SUBMISSION_TOLERANCE_HOURS: f64 = 40.0;

/// The length, in calendar days, of the end-of-month submission window.
pub const FINAL_WINDOW_DAYS: u8 = 7;

/// The confirmation summary computed for an allowed submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    /// Expected working hours for the month.
    pub expected_hours: f64,
    /// Hours actually logged in the month.
    pub logged_hours: f64,
    /// `expected - logged`; positive means under, negative means over.
    pub difference: f64,
}

/// The outcome of a denied submission attempt.
///
/// Carries the numbers and rule descriptions the caller needs to explain
/// why submission is not open yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDenial {
    /// Expected working hours for the month.
    pub expected_hours: f64,
    /// Hours actually logged in the month.
    pub logged_hours: f64,
    /// `expected - logged`; how far the logged total is under expectation.
    pub shortfall: f64,
}

impl SubmissionDenial {
    /// The three rules under which a month may be submitted, in evaluation
    /// order, for caller-rendered guidance.
    pub const RULE_DESCRIPTIONS: [&'static str; 3] = [
        "the month has already ended",
        "today falls within the final 7 days of the month",
        "logged hours are within 40 hours of the expected total",
    ];
}

impl std::fmt::Display for SubmissionDenial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Submission is not open yet: expected {:.2} hours, logged {:.2} hours, \
             {:.2} hours short. A month may be submitted once any of the following \
             holds: {}; {}; {}.",
            self.expected_hours,
            self.logged_hours,
            self.shortfall,
            Self::RULE_DESCRIPTIONS[0],
            Self::RULE_DESCRIPTIONS[1],
            Self::RULE_DESCRIPTIONS[2],
        )
    }
}

/// The result of evaluating the submission rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionCheck {
    /// Submission is allowed; the summary is shown before confirmation.
    Allowed(SubmissionSummary),
    /// Submission is denied; the denial explains what is missing.
    Denied(SubmissionDenial),
}

impl SubmissionCheck {
    /// Returns true if submission is allowed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

/// Returns whether `today` is strictly after the last day of the month.
fn month_closed(month: MonthRef, today: Date) -> bool {
    month.is_past(today)
}

/// Returns whether `today` falls within the last [`FINAL_WINDOW_DAYS`]
/// calendar days of the month, inclusive.
///
/// The rule only applies when evaluating the current month: `today` must
/// itself lie inside the target month.
fn in_final_stretch(month: MonthRef, today: Date) -> bool {
    if !month.contains(today) {
        return false;
    }
    let window_start: Date = month
        .last_day()
        .checked_sub(Duration::days(i64::from(FINAL_WINDOW_DAYS) - 1))
        .unwrap_or(month.first_day());
    today >= window_start
}

/// Returns whether the logged total is within tolerance of the expected
/// total.
fn near_complete(logged_hours: f64, expected_hours: f64) -> bool {
    logged_hours >= expected_hours - SUBMISSION_TOLERANCE_HOURS
}

/// Evaluates the submission rules for one month.
///
/// The month may be submitted if any of the following holds, evaluated in
/// this order:
/// 1. `today` is strictly after the month's last calendar day
/// 2. `today` falls within the month's final 7 calendar days (inclusive)
///    and the month is the current month
/// 3. logged hours are within 40 hours of the expected total
///
/// # Arguments
///
/// * `month` - The target month
/// * `today` - The current wall-clock date
/// * `logged_hours` - The hours logged in the month
/// * `expected_hours` - The expected hours for the full month
#[must_use]
pub fn evaluate_submission(
    month: MonthRef,
    today: Date,
    logged_hours: f64,
    expected_hours: f64,
) -> SubmissionCheck {
    let allowed: bool = month_closed(month, today)
        || in_final_stretch(month, today)
        || near_complete(logged_hours, expected_hours);

    if allowed {
        SubmissionCheck::Allowed(SubmissionSummary {
            expected_hours,
            logged_hours,
            difference: expected_hours - logged_hours,
        })
    } else {
        SubmissionCheck::Denied(SubmissionDenial {
            expected_hours,
            logged_hours,
            shortfall: expected_hours - logged_hours,
        })
    }
}

/// Sums the hours of all entries falling inside the given month.
#[must_use]
pub fn month_logged_hours(entries: &[TimeEntry], month: MonthRef) -> f64 {
    entries
        .iter()
        .filter(|entry| month.contains(entry.date))
        .map(TimeEntry::hours)
        .sum()
}
