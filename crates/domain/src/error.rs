// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::period::{PeriodAction, PeriodStatus};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// An action was attempted that the period's current status does not permit.
    InvalidTransition {
        /// The status the period was in.
        from: PeriodStatus,
        /// The action that was attempted.
        action: PeriodAction,
    },
    /// A rejection was attempted without a reason.
    EmptyRejectionReason,
    /// A 0-based month index outside 0..=11 was supplied.
    InvalidMonthIndex {
        /// The invalid index.
        index: u8,
    },
    /// A year outside the supported calendar range was supplied.
    InvalidYear {
        /// The invalid year.
        year: i32,
    },
    /// A time entry carried a negative or non-finite hour count.
    InvalidHours {
        /// The invalid hour count.
        hours: f64,
    },
    /// A period record violated one of its internal invariants.
    RecordInvariantViolation {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, action } => {
                write!(f, "Cannot {action} a period in status '{from}'")
            }
            Self::EmptyRejectionReason => {
                write!(f, "A rejection requires a non-empty reason")
            }
            Self::InvalidMonthIndex { index } => {
                write!(f, "Invalid month index: {index}. Must be between 0 and 11")
            }
            Self::InvalidYear { year } => {
                write!(f, "Invalid year: {year}. Must be between 1900 and 2200")
            }
            Self::InvalidHours { hours } => {
                write!(f, "Invalid hour count: {hours}. Must be finite and non-negative")
            }
            Self::RecordInvariantViolation { reason } => {
                write!(f, "Period record invariant violated: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
