// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PeriodStore;
use crate::error::StoreError;
use std::collections::HashMap;
use time::Date;
use timecard_domain::{
    CalendarException, Holiday, ManagerChain, MonthRef, PeriodKey, PeriodRecord, TimeEntry, UserId,
};
use tracing::debug;

/// In-memory reference implementation of [`PeriodStore`].
///
/// Deterministic and dependency-free: period identifiers are assigned from
/// a monotonic counter, and the upsert keeps the identifier stable across
/// rewrites of the same `(user, year, month)` key. Used by tests and by
/// embedding callers that do not need a remote store.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Vec<TimeEntry>,
    holidays: Vec<Holiday>,
    exceptions: Vec<CalendarException>,
    periods: HashMap<PeriodKey, PeriodRecord>,
    chains: HashMap<UserId, ManagerChain>,
    next_period_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            holidays: Vec::new(),
            exceptions: Vec::new(),
            periods: HashMap::new(),
            chains: HashMap::new(),
            next_period_id: 1,
        }
    }

    /// Adds a time entry.
    pub fn add_entry(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    /// Adds a holiday.
    pub fn add_holiday(&mut self, holiday: Holiday) {
        self.holidays.push(holiday);
    }

    /// Adds a calendar exception, replacing any existing exception for the
    /// same date (upsert-by-date).
    pub fn add_calendar_exception(&mut self, exception: CalendarException) {
        self.exceptions.retain(|e| e.date != exception.date);
        self.exceptions.push(exception);
    }

    /// Sets the manager relation for a user.
    pub fn set_manager_chain(&mut self, user_id: UserId, chain: ManagerChain) {
        self.chains.insert(user_id, chain);
    }

    /// Returns the number of stored period rows.
    #[must_use]
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodStore for MemoryStore {
    fn fetch_entries(
        &self,
        user_id: UserId,
        range: Option<(Date, Date)>,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        let matches: Vec<TimeEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .filter(|entry| match range {
                Some((start, end)) => entry.date >= start && entry.date <= end,
                None => true,
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    fn fetch_holidays(&self) -> Result<Vec<Holiday>, StoreError> {
        Ok(self.holidays.clone())
    }

    fn fetch_calendar_exceptions(&self) -> Result<Vec<CalendarException>, StoreError> {
        Ok(self.exceptions.clone())
    }

    fn fetch_period(
        &self,
        user_id: UserId,
        month: MonthRef,
    ) -> Result<Option<PeriodRecord>, StoreError> {
        Ok(self.periods.get(&PeriodKey::new(user_id, month)).cloned())
    }

    fn fetch_period_by_id(&self, period_id: i64) -> Result<Option<PeriodRecord>, StoreError> {
        Ok(self
            .periods
            .values()
            .find(|record| record.period_id == Some(period_id))
            .cloned())
    }

    fn upsert_period(&mut self, record: PeriodRecord) -> Result<PeriodRecord, StoreError> {
        let mut stored: PeriodRecord = record;
        let key: PeriodKey = stored.key;

        // The identifier belongs to the key, not to the caller: a rewrite
        // keeps the existing id, a first insert draws a fresh one.
        match self.periods.get(&key) {
            Some(existing) => stored.period_id = existing.period_id,
            None => {
                stored.period_id = Some(self.next_period_id);
                self.next_period_id += 1;
            }
        }

        debug!(
            user_id = key.user_id.value(),
            month = %key.month,
            status = stored.status.as_str(),
            "Upserting period record"
        );

        self.periods.insert(key, stored.clone());
        Ok(stored)
    }

    fn fetch_manager_chain(&self, user_id: UserId) -> Result<ManagerChain, StoreError> {
        Ok(self.chains.get(&user_id).copied().unwrap_or_default())
    }
}
