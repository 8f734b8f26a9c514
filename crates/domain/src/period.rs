// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Period status tracking and transition rules.
//!
//! A period is one user's claim over one calendar month. Status changes are
//! actor-initiated only; the system never advances a period based on time
//! alone.

use crate::error::DomainError;
use crate::types::{MonthRef, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The lifecycle status of a period.
///
/// `Open` is the implicit default: a month with no store record behaves as
/// an open period (see [`Period::Virtual`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// The month is editable; no submission has been made.
    #[default]
    Open,
    /// The month awaits a decision by the resolved approver.
    Submitted,
    /// The month has been approved. Terminal from this machine's
    /// perspective; reopening is an administrative data edit, out of scope.
    Approved,
    /// The month was sent back with a reason and is editable again.
    Rejected,
}

impl PeriodStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "open" => Ok(Self::Open),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::RecordInvariantViolation {
                reason: format!("unknown period status '{s}'"),
            }),
        }
    }

    /// Returns true if time entries belonging to this period must not be
    /// edited or deleted.
    ///
    /// A period locks its entries the moment it is handed to an approver
    /// and stays locked once approved.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Submitted | Self::Approved)
    }

    /// Returns true if this status is terminal (no action is permitted).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Returns whether the given action is permitted from this status.
    ///
    /// The transition table:
    /// - Submit: `Open` or `Rejected`
    /// - Approve: `Submitted`
    /// - Reject: `Submitted`
    #[must_use]
    pub const fn permits(&self, action: PeriodAction) -> bool {
        match action {
            PeriodAction::Submit => matches!(self, Self::Open | Self::Rejected),
            PeriodAction::Approve | PeriodAction::Reject => matches!(self, Self::Submitted),
        }
    }

    /// Validates that the given action is permitted from this status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the action is not
    /// permitted. Callers must surface this error; an illegal action is
    /// never a silent no-op.
    pub const fn validate_action(&self, action: PeriodAction) -> Result<(), DomainError> {
        if self.permits(action) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: *self,
                action,
            })
        }
    }
}

impl FromStr for PeriodStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An action that may be requested against a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodAction {
    /// Hand the month to the resolved approver (or auto-approve).
    Submit,
    /// Accept a submitted month.
    Approve,
    /// Send a submitted month back with a reason.
    Reject,
}

impl PeriodAction {
    /// Returns the string representation of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for PeriodAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The unique identity of a period: one user, one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    /// The owning user.
    pub user_id: UserId,
    /// The calendar month.
    pub month: MonthRef,
}

impl PeriodKey {
    /// Creates a new `PeriodKey`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owning user
    /// * `month` - The calendar month
    #[must_use]
    pub const fn new(user_id: UserId, month: MonthRef) -> Self {
        Self { user_id, month }
    }
}

/// A materialized period record, as stored by the persistence collaborator.
///
/// `period_id` is `None` until the record has been persisted for the first
/// time; the store assigns the canonical identifier on first upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// The canonical identifier assigned by the store.
    /// `None` indicates the record has not been persisted yet.
    pub period_id: Option<i64>,
    /// The unique key of this period.
    pub key: PeriodKey,
    /// The lifecycle status.
    pub status: PeriodStatus,
    /// The approver resolved at submission time. Frozen: later delegation
    /// changes do not move an in-flight submission.
    pub approver_id: Option<UserId>,
    /// The reason given on rejection. Present if and only if the status is
    /// `Rejected`; cleared on resubmission.
    pub rejection_reason: Option<String>,
    /// When this record last changed.
    pub updated_at: OffsetDateTime,
}

impl PeriodRecord {
    /// Validates the record's internal invariants.
    ///
    /// # Invariants
    ///
    /// - `rejection_reason` is present and non-empty iff the status is
    ///   `Rejected`
    /// - `approver_id` is present whenever the status is `Submitted`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RecordInvariantViolation` naming the violated
    /// invariant.
    pub fn validate(&self) -> Result<(), DomainError> {
        let has_reason: bool = self
            .rejection_reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty());

        if (self.status == PeriodStatus::Rejected) != has_reason {
            return Err(DomainError::RecordInvariantViolation {
                reason: format!(
                    "rejection reason must be present exactly when status is 'rejected' \
                     (status is '{}')",
                    self.status
                ),
            });
        }

        if self.status == PeriodStatus::Submitted && self.approver_id.is_none() {
            return Err(DomainError::RecordInvariantViolation {
                reason: String::from("a submitted period must carry its resolved approver"),
            });
        }

        Ok(())
    }
}

/// A period as seen by the transition layer.
///
/// The store only materializes a record once a month is first submitted.
/// Rather than passing `Option<PeriodRecord>` around and null-checking, the
/// absent case is an explicit variant: a `Virtual` period behaves exactly
/// like an open record that has never been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Period {
    /// A period backed by a store record.
    Real(PeriodRecord),
    /// A period with no store record yet; implicitly `Open`.
    Virtual(PeriodKey),
}

impl Period {
    /// Builds a `Period` from the result of a store fetch.
    #[must_use]
    pub fn from_fetch(key: PeriodKey, record: Option<PeriodRecord>) -> Self {
        record.map_or(Self::Virtual(key), Self::Real)
    }

    /// Returns the unique key of this period.
    #[must_use]
    pub const fn key(&self) -> PeriodKey {
        match self {
            Self::Real(record) => record.key,
            Self::Virtual(key) => *key,
        }
    }

    /// Returns the lifecycle status. A virtual period is `Open`.
    #[must_use]
    pub const fn status(&self) -> PeriodStatus {
        match self {
            Self::Real(record) => record.status,
            Self::Virtual(_) => PeriodStatus::Open,
        }
    }

    /// Returns the backing record, if one exists.
    #[must_use]
    pub const fn record(&self) -> Option<&PeriodRecord> {
        match self {
            Self::Real(record) => Some(record),
            Self::Virtual(_) => None,
        }
    }

    /// Returns true if time entries belonging to this period must not be
    /// edited or deleted.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.status().is_locked()
    }
}
