// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use timecard_domain::{ManagerChain, WorkCalendar};

/// A command represents user or manager intent as data only.
///
/// Commands are the only way to request period state changes. A `Submit`
/// command carries everything the transition needs that was fetched from
/// the store beforehand; `apply` itself performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit the period to its resolved approver.
    Submit {
        /// Hours logged in the target month.
        logged_hours: f64,
        /// The current wall-clock date.
        today: Date,
        /// The manager relation fetched for the submitting user.
        chain: ManagerChain,
        /// The working-day configuration snapshot.
        calendar: WorkCalendar,
    },
    /// Approve a submitted period.
    Approve,
    /// Reject a submitted period with a reason.
    Reject {
        /// The reason given to the period's owner. Must be non-empty.
        reason: String,
    },
}
