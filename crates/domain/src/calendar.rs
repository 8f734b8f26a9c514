// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expected-working-hours calculation for a month or partial month.
//!
//! This module provides pure, deterministic calendar calculations based on
//! weekends, a holiday set, and explicit per-date exceptions.
//!
//! ## Invariants
//!
//! - An exception always wins over the weekend/holiday default
//! - At most one exception exists per date (upsert-by-date on build)
//! - All dates are wall-clock calendar dates; no timezone conversion is
//!   performed anywhere in this module
//! - Missing holiday or exception data degrades to weekends-only

use crate::types::MonthRef;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use time::{Date, Weekday};

/// The fixed daily working-hour quota.
pub const DAILY_QUOTA_HOURS: f64 = 8.8;

/// A globally non-working date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday date.
    pub date: Date,
    /// The holiday name (informational).
    pub name: String,
}

impl Holiday {
    /// Creates a new `Holiday`.
    #[must_use]
    pub const fn new(date: Date, name: String) -> Self {
        Self { date, name }
    }
}

/// The effect of a calendar exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExceptionKind {
    /// The date is forced non-working (e.g., a bridge day).
    #[serde(rename = "OFFDAY")]
    OffDay,
    /// The date is forced working (e.g., a compensating Saturday).
    #[serde(rename = "WORKDAY")]
    WorkDay,
}

impl ExceptionKind {
    /// Returns the string representation used by the external contract.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OffDay => "OFFDAY",
            Self::WorkDay => "WORKDAY",
        }
    }
}

impl FromStr for ExceptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFFDAY" => Ok(Self::OffDay),
            "WORKDAY" => Ok(Self::WorkDay),
            _ => Err(format!("unknown calendar exception kind '{s}'")),
        }
    }
}

/// An explicit per-date override of the working-day default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarException {
    /// The date the exception applies to.
    pub date: Date,
    /// Whether the date is forced working or forced non-working.
    pub kind: ExceptionKind,
    /// The exception name (informational).
    pub name: String,
}

impl CalendarException {
    /// Creates a new `CalendarException`.
    #[must_use]
    pub const fn new(date: Date, kind: ExceptionKind, name: String) -> Self {
        Self { date, kind, name }
    }
}

/// An immutable snapshot of the working-day configuration.
///
/// Built once from fetched holiday and exception lists, then read for the
/// duration of one computation. Administrative mutation happens elsewhere;
/// this type never changes after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkCalendar {
    /// Dates that are holidays.
    holidays: HashSet<Date>,
    /// Per-date overrides. At most one per date.
    exceptions: HashMap<Date, ExceptionKind>,
}

impl WorkCalendar {
    /// Builds a snapshot from fetched holiday and exception lists.
    ///
    /// Exceptions are keyed by date; if the input carries duplicates for a
    /// date the last one wins, mirroring the store's upsert-by-date
    /// semantics.
    #[must_use]
    pub fn new(holidays: &[Holiday], exceptions: &[CalendarException]) -> Self {
        let holiday_dates: HashSet<Date> = holidays.iter().map(|h| h.date).collect();
        let mut exception_map: HashMap<Date, ExceptionKind> = HashMap::new();
        for exception in exceptions {
            exception_map.insert(exception.date, exception.kind);
        }
        Self {
            holidays: holiday_dates,
            exceptions: exception_map,
        }
    }

    /// Returns the empty calendar: no holidays, no exceptions.
    ///
    /// This is the documented fallback when holiday/exception data cannot
    /// be fetched; working days degrade to weekdays-only.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns whether the given date is a holiday.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns the exception in force on the given date, if any.
    #[must_use]
    pub fn exception_on(&self, date: Date) -> Option<ExceptionKind> {
        self.exceptions.get(&date).copied()
    }
}

/// Returns whether the given date falls on a weekend.
const fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Determines whether a date is a working day.
///
/// Resolution order:
/// 1. An exception for the exact date decides unconditionally
///    (`WorkDay` forces working, `OffDay` forces non-working)
/// 2. Otherwise the date is working iff it is neither a weekend day
///    (Saturday/Sunday) nor a holiday
///
/// The date is treated as a wall-clock calendar date in the ordinary
/// Gregorian calendar; no timezone reinterpretation occurs.
#[must_use]
pub fn is_working_day(date: Date, calendar: &WorkCalendar) -> bool {
    if let Some(kind) = calendar.exception_on(date) {
        return kind == ExceptionKind::WorkDay;
    }
    !is_weekend(date) && !calendar.is_holiday(date)
}

/// Rounds an hour total half-up at the cent level.
fn round_to_cents(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Counts working days of a month up to and including `cutoff`, then
/// applies the daily quota and cent rounding.
fn expected_hours_through(month: MonthRef, cutoff: Date, calendar: &WorkCalendar) -> f64 {
    let mut working_days: u32 = 0;
    for day in month.days() {
        if day > cutoff {
            break;
        }
        if is_working_day(day, calendar) {
            working_days += 1;
        }
    }
    round_to_cents(f64::from(working_days) * DAILY_QUOTA_HOURS)
}

/// Computes the expected working hours for a full month.
///
/// Every date from day 1 to the last day of the month inclusive is
/// classified; working days are multiplied by [`DAILY_QUOTA_HOURS`] and the
/// total is rounded half-up at the cent level.
#[must_use]
pub fn expected_hours(month: MonthRef, calendar: &WorkCalendar) -> f64 {
    expected_hours_through(month, month.last_day(), calendar)
}

/// Computes the expected working hours for a month up to today.
///
/// - A month strictly in the past yields the same value as
///   [`expected_hours`]
/// - A month strictly in the future yields 0
/// - The current month is counted from day 1 through `today` inclusive,
///   with the same classification and rounding rules
#[must_use]
pub fn expected_hours_to_date(month: MonthRef, today: Date, calendar: &WorkCalendar) -> f64 {
    if month.is_past(today) {
        expected_hours(month, calendar)
    } else if month.is_future(today) {
        0.0
    } else {
        expected_hours_through(month, today, calendar)
    }
}
