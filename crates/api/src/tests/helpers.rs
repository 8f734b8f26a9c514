// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use time::macros::datetime;
use time::{Date, OffsetDateTime};
use timecard::Actor;
use timecard_domain::{
    CalendarException, Holiday, ManagerChain, MonthRef, PeriodRecord, TimeEntry, UserId,
};
use timecard_store::{MemoryStore, PeriodStore, StoreError};

pub const OWNER: i64 = 7;
pub const MANAGER: i64 = 40;
pub const DELEGATE: i64 = 41;

/// A clock pinned to a fixed instant, so the date-sensitive rules are
/// deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: OffsetDateTime,
}

impl FixedClock {
    pub const fn at(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Pinned to a date after February 2025, so February submissions pass
    /// the "month closed" rule.
    pub fn after_february() -> Self {
        Self::at(datetime!(2025-03-03 09:30 UTC))
    }

    /// Pinned to the 10th of February 2025, outside every submission rule
    /// when nothing is logged.
    pub fn mid_february() -> Self {
        Self::at(datetime!(2025-02-10 09:30 UTC))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.now
    }
}

/// A store whose calendar reads always fail, for exercising the
/// weekends-only degradation path. Everything else delegates to the
/// wrapped [`MemoryStore`].
#[derive(Debug, Default)]
pub struct BrokenCalendarStore {
    pub inner: MemoryStore,
}

impl PeriodStore for BrokenCalendarStore {
    fn fetch_entries(
        &self,
        user_id: UserId,
        range: Option<(Date, Date)>,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.inner.fetch_entries(user_id, range)
    }

    fn fetch_holidays(&self) -> Result<Vec<Holiday>, StoreError> {
        Err(StoreError::unavailable("holiday endpoint timed out"))
    }

    fn fetch_calendar_exceptions(&self) -> Result<Vec<CalendarException>, StoreError> {
        Err(StoreError::unavailable("exception endpoint timed out"))
    }

    fn fetch_period(
        &self,
        user_id: UserId,
        month: MonthRef,
    ) -> Result<Option<PeriodRecord>, StoreError> {
        self.inner.fetch_period(user_id, month)
    }

    fn fetch_period_by_id(&self, period_id: i64) -> Result<Option<PeriodRecord>, StoreError> {
        self.inner.fetch_period_by_id(period_id)
    }

    fn upsert_period(&mut self, record: PeriodRecord) -> Result<PeriodRecord, StoreError> {
        self.inner.upsert_period(record)
    }

    fn fetch_manager_chain(&self, user_id: UserId) -> Result<ManagerChain, StoreError> {
        self.inner.fetch_manager_chain(user_id)
    }
}

/// A store that is down entirely: every call fails.
#[derive(Debug, Default)]
pub struct DownStore;

impl PeriodStore for DownStore {
    fn fetch_entries(
        &self,
        _user_id: UserId,
        _range: Option<(Date, Date)>,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn fetch_holidays(&self) -> Result<Vec<Holiday>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn fetch_calendar_exceptions(&self) -> Result<Vec<CalendarException>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn fetch_period(
        &self,
        _user_id: UserId,
        _month: MonthRef,
    ) -> Result<Option<PeriodRecord>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn fetch_period_by_id(&self, _period_id: i64) -> Result<Option<PeriodRecord>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn upsert_period(&mut self, _record: PeriodRecord) -> Result<PeriodRecord, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn fetch_manager_chain(&self, _user_id: UserId) -> Result<ManagerChain, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

pub fn create_employee_actor() -> Actor {
    Actor::new(String::from("user-7"), String::from("employee"))
}

pub fn create_manager_actor() -> Actor {
    Actor::new(String::from("user-40"), String::from("manager"))
}

/// A store with the owner reporting to a manager, and no calendar
/// configuration.
pub fn store_with_manager() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set_manager_chain(
        UserId::new(OWNER),
        ManagerChain::new(Some(UserId::new(MANAGER)), None),
    );
    store
}

/// Adds one 8-hour entry on the given date for the owner.
pub fn log_day(store: &mut MemoryStore, date: Date) {
    store.add_entry(
        TimeEntry::new(
            UserId::new(OWNER),
            700,
            date,
            8.0,
            String::from("development"),
        )
        .unwrap(),
    );
}
