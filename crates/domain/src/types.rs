// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Represents a user identifier.
///
/// User identity is opaque to this core; the identifier is assigned by the
/// external store and carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId {
    /// The numeric identifier value.
    value: i64,
}

impl UserId {
    /// Creates a new `UserId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The numeric identifier value
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents one calendar month of one calendar year.
///
/// This is the internal month value type. The external contract addresses
/// months by a 0-based index (0 = January); conversion happens only at the
/// API boundary via [`MonthRef::from_index0`] and [`MonthRef::index0`].
/// Internally every computation works on real [`time::Date`] values, never
/// on raw year/month integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    /// The calendar year (e.g., 2025).
    year: i32,
    /// The calendar month.
    month: Month,
}

// Hash over the year and month number, consistent with the derived
// equality.
impl std::hash::Hash for MonthRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        u8::from(self.month).hash(state);
    }
}

impl MonthRef {
    /// Creates a new `MonthRef`.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year (must be between 1900 and 2200)
    /// * `month` - The calendar month
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYear` if the year is outside the
    /// supported range.
    pub const fn new(year: i32, month: Month) -> Result<Self, DomainError> {
        if year < 1900 || year > 2200 {
            return Err(DomainError::InvalidYear { year });
        }
        Ok(Self { year, month })
    }

    /// Creates a `MonthRef` from a year and a 0-based month index.
    ///
    /// This is the only place the external 0-based month convention is
    /// translated into the internal month type.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year (must be between 1900 and 2200)
    /// * `index0` - The 0-based month index (0 = January, 11 = December)
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not in 0..=11 or the year is out of
    /// range.
    pub fn from_index0(year: i32, index0: u8) -> Result<Self, DomainError> {
        if index0 > 11 {
            return Err(DomainError::InvalidMonthIndex { index: index0 });
        }
        let month: Month =
            Month::try_from(index0 + 1).map_err(|_| DomainError::InvalidMonthIndex { index: index0 })?;
        Self::new(year, month)
    }

    /// Creates the `MonthRef` containing a given date.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the 0-based month index (0 = January).
    #[must_use]
    pub fn index0(&self) -> u8 {
        u8::from(self.month) - 1
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn first_day(&self) -> Date {
        // The year range is validated at construction, so day 1 always exists.
        Date::from_calendar_date(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn last_day(&self) -> Date {
        let next_first: Date = self.next().first_day();
        next_first.previous_day().unwrap_or(Date::MAX)
    }

    /// Returns the month immediately following this one.
    #[must_use]
    pub fn next(&self) -> Self {
        let year: i32 = if self.month == Month::December {
            self.year + 1
        } else {
            self.year
        };
        Self {
            year,
            month: self.month.next(),
        }
    }

    /// Returns an iterator over every date of the month, in order.
    pub fn days(self) -> impl Iterator<Item = Date> {
        let last: Date = self.last_day();
        std::iter::successors(Some(self.first_day()), move |day| {
            day.next_day().filter(|next| *next <= last)
        })
    }

    /// Returns whether the given date falls inside this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns whether this month lies strictly in the past relative to
    /// `today` (today is after the month's last day).
    #[must_use]
    pub fn is_past(&self, today: Date) -> bool {
        today > self.last_day()
    }

    /// Returns whether this month lies strictly in the future relative to
    /// `today` (today is before the month's first day).
    #[must_use]
    pub fn is_future(&self, today: Date) -> bool {
        today < self.first_day()
    }
}

impl std::fmt::Display for MonthRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, u8::from(self.month))
    }
}

/// One logged-hours record for a user, date, and project.
///
/// Entries are aggregated per month and compared against the expected-hours
/// total. Whether an entry may still be edited is decided by the owning
/// period's lock state, exposed through `Period::is_locked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The user who logged the hours.
    pub user_id: UserId,
    /// The project the hours were logged against.
    pub project_id: i64,
    /// The calendar date the hours were worked.
    pub date: Date,
    /// The hour count (validated non-negative at construction).
    hours: f64,
    /// Free-form description of the work.
    pub description: String,
}

impl TimeEntry {
    /// Creates a new `TimeEntry`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user who logged the hours
    /// * `project_id` - The project the hours were logged against
    /// * `date` - The calendar date the hours were worked
    /// * `hours` - The hour count (must be finite and non-negative)
    /// * `description` - Free-form description of the work
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHours` if the hour count is negative,
    /// NaN, or infinite.
    pub fn new(
        user_id: UserId,
        project_id: i64,
        date: Date,
        hours: f64,
        description: String,
    ) -> Result<Self, DomainError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(DomainError::InvalidHours { hours });
        }
        Ok(Self {
            user_id,
            project_id,
            date,
            hours,
            description,
        })
    }

    /// Returns the hour count.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.hours
    }
}

/// The manager relation for a single user, as reported by the store.
///
/// `delegate_id` is the stand-in manager configured by the user's manager,
/// not by the user. Both fields are optional: a user at the top of the
/// hierarchy has neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerChain {
    /// The user's direct manager, if any.
    pub manager_id: Option<UserId>,
    /// The manager's currently active delegate, if any.
    pub delegate_id: Option<UserId>,
}

impl ManagerChain {
    /// Creates a new `ManagerChain`.
    ///
    /// # Arguments
    ///
    /// * `manager_id` - The user's direct manager, if any
    /// * `delegate_id` - The manager's currently active delegate, if any
    #[must_use]
    pub const fn new(manager_id: Option<UserId>, delegate_id: Option<UserId>) -> Self {
        Self {
            manager_id,
            delegate_id,
        }
    }

    /// Resolves the effective approver for the user this chain belongs to.
    ///
    /// The rule is single-hop by design: the manager's delegate stands in
    /// for the manager, but a delegate's own delegate is never chased. A
    /// user without a manager has no approver and their submissions
    /// auto-approve.
    ///
    /// # Returns
    ///
    /// * `Some(UserId)` - the delegate if one is set, else the manager
    /// * `None` - the user has no manager
    #[must_use]
    pub const fn resolve_approver(&self) -> Option<UserId> {
        match (self.manager_id, self.delegate_id) {
            (None, _) => None,
            (Some(manager), None) => Some(manager),
            (Some(_), Some(delegate)) => Some(delegate),
        }
    }
}
