// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::event::Actor;
use time::macros::{date, datetime};
use time::{Date, Month, OffsetDateTime};
use timecard_domain::{
    ManagerChain, MonthRef, Period, PeriodKey, PeriodRecord, PeriodStatus, UserId, WorkCalendar,
};

pub const OWNER: UserId = UserId::new(7);
pub const MANAGER: UserId = UserId::new(40);
pub const DELEGATE: UserId = UserId::new(41);

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("user-7"), String::from("employee"))
}

pub fn create_manager_actor() -> Actor {
    Actor::new(String::from("user-40"), String::from("manager"))
}

pub fn february_2025() -> MonthRef {
    MonthRef::new(2025, Month::February).unwrap()
}

pub fn test_key() -> PeriodKey {
    PeriodKey::new(OWNER, february_2025())
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2025-03-03 09:30 UTC)
}

/// A date safely after February 2025, so the "month closed" rule allows
/// submission regardless of logged hours.
pub fn after_month_end() -> Date {
    date!(2025 - 03 - 03)
}

pub fn open_period() -> Period {
    Period::Virtual(test_key())
}

pub fn record_with_status(status: PeriodStatus) -> PeriodRecord {
    PeriodRecord {
        period_id: Some(11),
        key: test_key(),
        status,
        approver_id: match status {
            PeriodStatus::Submitted | PeriodStatus::Approved => Some(MANAGER),
            PeriodStatus::Open | PeriodStatus::Rejected => None,
        },
        rejection_reason: if status == PeriodStatus::Rejected {
            Some(String::from("timesheet incomplete"))
        } else {
            None
        },
        updated_at: datetime!(2025-02-20 08:00 UTC),
    }
}

/// A submit command evaluated after month end with an empty calendar, so
/// the validator always allows it.
pub fn submit_command(chain: ManagerChain) -> Command {
    Command::Submit {
        logged_hours: 160.0,
        today: after_month_end(),
        chain,
        calendar: WorkCalendar::empty(),
    }
}

pub fn chain_with_manager() -> ManagerChain {
    ManagerChain::new(Some(MANAGER), None)
}

pub fn chain_with_delegate() -> ManagerChain {
    ManagerChain::new(Some(MANAGER), Some(DELEGATE))
}

pub fn chain_without_manager() -> ManagerChain {
    ManagerChain::new(None, None)
}
