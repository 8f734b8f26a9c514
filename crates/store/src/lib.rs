// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence boundary for the Timecard approval core.
//!
//! The backing store is an external relational database reached over a
//! network API; this crate owns only the boundary. Every call is treated
//! as potentially slow and potentially failing, with no ordering
//! guarantees between independent periods.
//!
//! ## Contract
//!
//! - `upsert_period` is atomic on the unique `(user, year, month)` key
//!   with last-write-wins semantics on status and approver fields
//! - Period reads and writes never fall back to stale data; failures
//!   propagate as [`StoreError`]
//! - Holiday and exception reads may be degraded to empty sets by the
//!   *caller* (the calendar engine documents that fallback); the store
//!   itself reports failures honestly
//!
//! [`MemoryStore`] is the in-process reference implementation, used by
//! tests and by embedding callers that do not need a remote store.

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

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use time::Date;
use timecard_domain::{
    CalendarException, Holiday, ManagerChain, MonthRef, PeriodRecord, TimeEntry, UserId,
};

/// The operations the approval core consumes from the persistence
/// collaborator.
///
/// Shapes only: wire format, pooling, and retries belong to the
/// implementation. The core never retries; a failure surfaces to the
/// caller unchanged.
pub trait PeriodStore {
    /// Fetches a user's time entries, optionally restricted to an
    /// inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached.
    fn fetch_entries(
        &self,
        user_id: UserId,
        range: Option<(Date, Date)>,
    ) -> Result<Vec<TimeEntry>, StoreError>;

    /// Fetches the global holiday set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached.
    fn fetch_holidays(&self) -> Result<Vec<Holiday>, StoreError>;

    /// Fetches the global calendar exception set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached.
    fn fetch_calendar_exceptions(&self) -> Result<Vec<CalendarException>, StoreError>;

    /// Fetches the period record for a user and month, if one exists.
    ///
    /// Absence of a record is not an error: it means the period has never
    /// been submitted and behaves as open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached.
    fn fetch_period(
        &self,
        user_id: UserId,
        month: MonthRef,
    ) -> Result<Option<PeriodRecord>, StoreError>;

    /// Fetches a period record by its canonical identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached.
    fn fetch_period_by_id(&self, period_id: i64) -> Result<Option<PeriodRecord>, StoreError>;

    /// Atomically inserts or replaces the period record for its
    /// `(user, year, month)` key and returns the stored row.
    ///
    /// The store assigns `period_id` on first insert; the identifier is
    /// stable across subsequent upserts of the same key. Two concurrent
    /// upserts of the same key resolve last-write-wins and never create a
    /// second row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached.
    fn upsert_period(&mut self, record: PeriodRecord) -> Result<PeriodRecord, StoreError>;

    /// Fetches the manager relation for a user: the direct manager and the
    /// manager's currently active delegate.
    ///
    /// A user unknown to the hierarchy yields an empty chain (no manager,
    /// no delegate).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached.
    fn fetch_manager_chain(&self, user_id: UserId) -> Result<ManagerChain, StoreError>;
}
