// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur at the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached or the request failed in transit.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Description of the failure.
        reason: String,
    },
    /// A record that was required does not exist.
    #[error("{what} not found")]
    NotFound {
        /// Description of the missing record.
        what: String,
    },
}

impl StoreError {
    /// Convenience constructor for an unavailability failure.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
