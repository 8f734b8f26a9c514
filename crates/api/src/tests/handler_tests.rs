// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    BrokenCalendarStore, DownStore, FixedClock, MANAGER, OWNER, create_employee_actor,
    create_manager_actor, log_day, store_with_manager,
};
use crate::error::ApiError;
use crate::handlers::{
    approve_period, can_submit, get_expected_hours, get_expected_hours_to_date,
    get_is_working_day, is_entry_locked, reject_period, submit_period,
};
use time::macros::date;
use timecard_domain::{
    CalendarException, ExceptionKind, Holiday, ManagerChain, TimeEntry, UserId,
};
use timecard_store::MemoryStore;

#[test]
fn test_expected_hours_february_2025() {
    let store = MemoryStore::new();
    let response = get_expected_hours(&store, 2025, 1).unwrap();
    assert!((response.expected_hours - 176.0).abs() < f64::EPSILON);
    assert_eq!(response.year, 2025);
    assert_eq!(response.month, 1);
}

#[test]
fn test_expected_hours_honours_store_calendar() {
    let mut store = MemoryStore::new();
    store.add_holiday(Holiday::new(date!(2025 - 02 - 05), String::from("founders day")));
    let response = get_expected_hours(&store, 2025, 1).unwrap();
    assert!((response.expected_hours - 167.2).abs() < f64::EPSILON);
}

#[test]
fn test_expected_hours_rejects_bad_month_index() {
    let store = MemoryStore::new();
    let err = get_expected_hours(&store, 2025, 12).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_expected_hours_to_date_future_month_is_zero() {
    let store = MemoryStore::new();
    let clock = FixedClock::mid_february();
    let response = get_expected_hours_to_date(&store, &clock, 2025, 2).unwrap();
    assert!(response.expected_hours.abs() < f64::EPSILON);
}

#[test]
fn test_expected_hours_to_date_past_month_is_full_month() {
    let store = MemoryStore::new();
    let clock = FixedClock::after_february();
    let response = get_expected_hours_to_date(&store, &clock, 2025, 1).unwrap();
    assert!((response.expected_hours - 176.0).abs() < f64::EPSILON);
}

#[test]
fn test_expected_hours_to_date_current_month_counts_through_today() {
    let store = MemoryStore::new();
    let clock = FixedClock::mid_february();
    // Feb 1-10, 2025 contains six weekdays (3rd through 7th, and the 10th).
    let response = get_expected_hours_to_date(&store, &clock, 2025, 1).unwrap();
    assert!((response.expected_hours - 52.8).abs() < f64::EPSILON);
}

#[test]
fn test_calendar_degrades_to_weekends_only_when_store_fails() {
    let broken = BrokenCalendarStore::default();
    let response = get_expected_hours(&broken, 2025, 1).unwrap();
    assert!((response.expected_hours - 176.0).abs() < f64::EPSILON);
}

#[test]
fn test_is_working_day_respects_exceptions() {
    let mut store = MemoryStore::new();
    store.add_calendar_exception(CalendarException::new(
        date!(2025 - 02 - 15),
        ExceptionKind::WorkDay,
        String::from("inventory Saturday"),
    ));

    let saturday = get_is_working_day(&store, date!(2025 - 02 - 15)).unwrap();
    assert!(saturday.working);

    let plain_sunday = get_is_working_day(&store, date!(2025 - 02 - 16)).unwrap();
    assert!(!plain_sunday.working);
}

#[test]
fn test_can_submit_closed_month_with_no_hours() {
    let store = store_with_manager();
    let clock = FixedClock::after_february();
    let response = can_submit(&store, &clock, OWNER, 2025, 1).unwrap();
    assert!(response.allowed);
    let summary = response.summary.unwrap();
    assert!((summary.expected_hours - 176.0).abs() < f64::EPSILON);
    assert!(summary.logged_hours.abs() < f64::EPSILON);
    assert!((summary.difference - 176.0).abs() < f64::EPSILON);
}

#[test]
fn test_can_submit_mid_month_with_no_hours_is_denied() {
    let store = store_with_manager();
    let clock = FixedClock::mid_february();
    let response = can_submit(&store, &clock, OWNER, 2025, 1).unwrap();
    assert!(!response.allowed);
    assert!(response.summary.is_none());
    let reason = response.reason.unwrap();
    assert!(reason.contains("176.00"));
    assert!(reason.contains("final 7 days"));
}

#[test]
fn test_can_submit_counts_logged_hours_against_tolerance() {
    let mut store = store_with_manager();
    // 17 working days logged at 8 hours: 136.0, exactly at the 40-hour line
    // against 176.0.
    let mut logged = 0;
    for day in timecard_domain::MonthRef::from_index0(2025, 1).unwrap().days() {
        if logged == 17 {
            break;
        }
        log_day(&mut store, day);
        logged += 1;
    }
    let clock = FixedClock::mid_february();
    let response = can_submit(&store, &clock, OWNER, 2025, 1).unwrap();
    assert!(response.allowed);
}

#[test]
fn test_submit_routes_to_manager() {
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();

    let info = submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();

    assert_eq!(info.status, "submitted");
    assert_eq!(info.approver_id, Some(MANAGER));
    assert_eq!(info.rejection_reason, None);
    assert_eq!(info.year, 2025);
    assert_eq!(info.month, 1);
}

#[test]
fn test_submit_resolves_delegate() {
    let mut store = store_with_manager();
    store.set_manager_chain(
        UserId::new(OWNER),
        ManagerChain::new(
            Some(UserId::new(MANAGER)),
            Some(UserId::new(super::helpers::DELEGATE)),
        ),
    );
    let clock = FixedClock::after_february();

    let info = submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    assert_eq!(info.approver_id, Some(super::helpers::DELEGATE));
}

#[test]
fn test_submit_without_manager_auto_approves() {
    let mut store = MemoryStore::new();
    let clock = FixedClock::after_february();

    let info = submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    assert_eq!(info.status, "approved");
    assert_eq!(info.approver_id, None);
}

#[test]
fn test_submit_denied_mid_month_is_a_denial_not_a_transition() {
    let mut store = store_with_manager();
    let clock = FixedClock::mid_february();

    let err = submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor())
        .unwrap_err();

    match err {
        ApiError::SubmissionDenied {
            expected_hours,
            logged_hours,
            shortfall,
            message,
        } => {
            assert!((expected_hours - 176.0).abs() < f64::EPSILON);
            assert!(logged_hours.abs() < f64::EPSILON);
            assert!((shortfall - 176.0).abs() < f64::EPSILON);
            assert!(message.contains("176.00"));
        }
        other => panic!("expected SubmissionDenied, got {other:?}"),
    }

    // Nothing was persisted.
    assert_eq!(store.period_count(), 0);
}

#[test]
fn test_submit_twice_is_invalid_transition() {
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();

    submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    let err = submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor())
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidTransition { .. }));
}

#[test]
fn test_approve_submitted_period() {
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();

    let submitted =
        submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    let approved = approve_period(&mut store, &clock, submitted.period_id, create_manager_actor())
        .unwrap();

    assert_eq!(approved.status, "approved");
    assert_eq!(approved.period_id, submitted.period_id);
}

#[test]
fn test_approve_twice_is_invalid_transition() {
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();

    let submitted =
        submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    approve_period(&mut store, &clock, submitted.period_id, create_manager_actor()).unwrap();

    let err = approve_period(&mut store, &clock, submitted.period_id, create_manager_actor())
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidTransition { .. }));
}

#[test]
fn test_approve_unknown_period_is_not_found() {
    let mut store = MemoryStore::new();
    let clock = FixedClock::after_february();

    let err = approve_period(&mut store, &clock, 999, create_manager_actor()).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_reject_then_resubmit_clears_reason() {
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();

    let submitted =
        submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();

    let rejected = reject_period(
        &mut store,
        &clock,
        submitted.period_id,
        "weeks 6 and 7 are empty",
        create_manager_actor(),
    )
    .unwrap();
    assert_eq!(rejected.status, "rejected");
    assert_eq!(
        rejected.rejection_reason,
        Some(String::from("weeks 6 and 7 are empty"))
    );

    let resubmitted =
        submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    assert_eq!(resubmitted.status, "submitted");
    assert_eq!(resubmitted.rejection_reason, None);
    assert_eq!(resubmitted.period_id, submitted.period_id);
}

#[test]
fn test_reject_with_empty_reason_is_invalid_input() {
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();

    let submitted =
        submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    let err = reject_period(
        &mut store,
        &clock,
        submitted.period_id,
        "   ",
        create_manager_actor(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_submission_survives_delegation_change() {
    // The approver is frozen at submission time; a delegation configured
    // afterwards does not move the in-flight submission.
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();

    let submitted =
        submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    assert_eq!(submitted.approver_id, Some(MANAGER));

    store.set_manager_chain(
        UserId::new(OWNER),
        ManagerChain::new(
            Some(UserId::new(MANAGER)),
            Some(UserId::new(super::helpers::DELEGATE)),
        ),
    );

    let refetched = approve_period(&mut store, &clock, submitted.period_id, create_manager_actor())
        .unwrap();
    assert_eq!(refetched.approver_id, Some(MANAGER));
}

#[test]
fn test_entry_lock_follows_period_status() {
    let mut store = store_with_manager();
    let clock = FixedClock::after_february();
    let entry = TimeEntry::new(
        UserId::new(OWNER),
        700,
        date!(2025 - 02 - 03),
        8.0,
        String::from("development"),
    )
    .unwrap();
    store.add_entry(entry.clone());

    // Open (virtual) period: editable.
    assert!(!is_entry_locked(&store, &entry).unwrap().locked);

    let submitted =
        submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    assert!(is_entry_locked(&store, &entry).unwrap().locked);

    reject_period(
        &mut store,
        &clock,
        submitted.period_id,
        "needs project codes",
        create_manager_actor(),
    )
    .unwrap();
    assert!(!is_entry_locked(&store, &entry).unwrap().locked);

    submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor()).unwrap();
    approve_period(&mut store, &clock, submitted.period_id, create_manager_actor()).unwrap();
    assert!(is_entry_locked(&store, &entry).unwrap().locked);
}

#[test]
fn test_period_reads_do_not_degrade_when_store_is_down() {
    let store = DownStore;
    let entry = TimeEntry::new(
        UserId::new(OWNER),
        700,
        date!(2025 - 02 - 03),
        8.0,
        String::from("development"),
    )
    .unwrap();

    let err = is_entry_locked(&store, &entry).unwrap_err();
    assert!(matches!(err, ApiError::StoreUnavailable { .. }));
}

#[test]
fn test_submit_propagates_store_failure() {
    let mut store = DownStore;
    let clock = FixedClock::after_february();
    let err = submit_period(&mut store, &clock, OWNER, 2025, 1, create_employee_actor())
        .unwrap_err();
    assert!(matches!(err, ApiError::StoreUnavailable { .. }));
}
