// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Months are addressed by a 0-based index (0 = January) on this
//! boundary; the conversion to the internal month type happens in the
//! handlers and nowhere else.

use crate::error::ApiError;
use time::{Date, OffsetDateTime};
use timecard_domain::{PeriodRecord, SubmissionSummary};

/// Expected-hours information for one month.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpectedHoursResponse {
    /// The calendar year.
    pub year: i32,
    /// The 0-based month index (0 = January).
    pub month: u8,
    /// Expected working hours, rounded to two decimals.
    pub expected_hours: f64,
}

/// Working-day classification for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WorkingDayResponse {
    /// The classified date.
    pub date: Date,
    /// Whether the date is a working day.
    pub working: bool,
}

/// The submission summary shown before final confirmation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubmissionSummaryInfo {
    /// Expected working hours for the month.
    pub expected_hours: f64,
    /// Hours actually logged in the month.
    pub logged_hours: f64,
    /// `expected - logged`; positive means under, negative means over.
    pub difference: f64,
}

impl From<SubmissionSummary> for SubmissionSummaryInfo {
    fn from(summary: SubmissionSummary) -> Self {
        Self {
            expected_hours: summary.expected_hours,
            logged_hours: summary.logged_hours,
            difference: summary.difference,
        }
    }
}

/// The answer to "may this month be submitted right now?".
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanSubmitResponse {
    /// Whether submission is allowed.
    pub allowed: bool,
    /// When denied: the caller-renderable explanation.
    pub reason: Option<String>,
    /// When allowed: the confirmation summary.
    pub summary: Option<SubmissionSummaryInfo>,
}

/// A period record as exposed on the API boundary.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PeriodInfo {
    /// The canonical period identifier.
    pub period_id: i64,
    /// The owning user.
    pub user_id: i64,
    /// The calendar year.
    pub year: i32,
    /// The 0-based month index (0 = January).
    pub month: u8,
    /// The lifecycle status.
    pub status: String,
    /// The approver resolved at submission time, if any.
    pub approver_id: Option<i64>,
    /// The reason given on rejection, if the period is rejected.
    pub rejection_reason: Option<String>,
    /// When the record last changed.
    pub updated_at: OffsetDateTime,
}

impl PeriodInfo {
    /// Builds the API view of a persisted period record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the record has not been assigned its
    /// canonical identifier yet; handlers only construct this view after a
    /// successful upsert.
    pub fn from_record(record: &PeriodRecord) -> Result<Self, ApiError> {
        let period_id: i64 = record.period_id.ok_or_else(|| ApiError::Internal {
            message: String::from("period record is missing its canonical identifier"),
        })?;
        Ok(Self {
            period_id,
            user_id: record.key.user_id.value(),
            year: record.key.month.year(),
            month: record.key.month.index0(),
            status: record.status.as_str().to_string(),
            approver_id: record.approver_id.map(|id| id.value()),
            rejection_reason: record.rejection_reason.clone(),
            updated_at: record.updated_at,
        })
    }
}

/// Entry lock information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntryLockResponse {
    /// Whether the entry's owning period forbids editing and deleting.
    pub locked: bool,
}
