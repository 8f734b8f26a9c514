// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use timecard::CoreError;
use timecard_domain::DomainError;
use timecard_store::StoreError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. A submission denial carries the numbers the caller needs to
/// render guidance; a store failure is propagated, never papered over with
/// stale data.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The requested state change is not legal from the period's current
    /// status.
    InvalidTransition {
        /// The status the period was in.
        from: String,
        /// The action that was attempted.
        action: String,
    },
    /// The submission validator said "not yet". This is the expected
    /// outcome of an early submission attempt, distinct from an illegal
    /// transition.
    SubmissionDenied {
        /// Expected working hours for the month.
        expected_hours: f64,
        /// Hours actually logged in the month.
        logged_hours: f64,
        /// How far the logged total is under expectation.
        shortfall: f64,
        /// Caller-renderable explanation including the three rules.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The persistence collaborator could not be reached.
    StoreUnavailable {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidTransition { from, action } => {
                write!(f, "Cannot {action} a period in status '{from}'")
            }
            Self::SubmissionDenied { message, .. } => {
                write!(f, "{message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Store unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTransition { from, action } => ApiError::InvalidTransition {
            from: from.as_str().to_string(),
            action: action.as_str().to_string(),
        },
        DomainError::EmptyRejectionReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("A rejection requires a non-empty reason"),
        },
        DomainError::InvalidMonthIndex { index } => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month index: {index}. Must be between 0 and 11"),
        },
        DomainError::InvalidYear { year } => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Invalid year: {year}. Must be between 1900 and 2200"),
        },
        DomainError::InvalidHours { hours } => ApiError::InvalidInput {
            field: String::from("hours"),
            message: format!("Invalid hour count: {hours}. Must be finite and non-negative"),
        },
        DomainError::RecordInvariantViolation { reason } => ApiError::Internal {
            message: format!("Period record invariant violated: {reason}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { reason } => Self::StoreUnavailable { message: reason },
            StoreError::NotFound { what } => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message: what,
            },
        }
    }
}
