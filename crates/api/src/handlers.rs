// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the operations the core exposes.
//!
//! Handlers fetch what the transition layer needs from the store, run the
//! pure domain/core logic, persist the result, and translate every error
//! at this boundary. Calendar data alone degrades gracefully when the
//! store is unreachable; period reads and writes never do, because period
//! status is safety-critical to the approval workflow.

use crate::clock::Clock;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CanSubmitResponse, EntryLockResponse, ExpectedHoursResponse, PeriodInfo, SubmissionSummaryInfo,
    WorkingDayResponse,
};
use time::Date;
use timecard::{Actor, Command, TransitionOutcome, TransitionResult, apply};
use timecard_domain::{
    MonthRef, Period, PeriodKey, PeriodRecord, SubmissionCheck, TimeEntry, UserId, WorkCalendar,
    evaluate_submission, expected_hours, expected_hours_to_date, is_working_day,
    month_logged_hours,
};
use timecard_store::PeriodStore;
use tracing::{info, warn};

/// Converts the external `(year, 0-based month)` pair into the internal
/// month type. This is the only place the 0-based convention crosses the
/// boundary.
fn month_from_request(year: i32, month0: u8) -> Result<MonthRef, ApiError> {
    MonthRef::from_index0(year, month0).map_err(translate_domain_error)
}

/// Loads the working-day configuration snapshot.
///
/// Holiday/exception fetch failures degrade to the empty calendar
/// (weekends-only). This is the documented fallback for calendar data, not
/// an error: expected hours stay computable while the store is down.
fn load_calendar<S: PeriodStore>(store: &S) -> WorkCalendar {
    let holidays = match store.fetch_holidays() {
        Ok(holidays) => holidays,
        Err(err) => {
            warn!(error = %err, "Holiday fetch failed; degrading to weekends-only");
            Vec::new()
        }
    };
    let exceptions = match store.fetch_calendar_exceptions() {
        Ok(exceptions) => exceptions,
        Err(err) => {
            warn!(error = %err, "Calendar exception fetch failed; degrading to weekends-only");
            Vec::new()
        }
    };
    WorkCalendar::new(&holidays, &exceptions)
}

/// Sums the hours a user has logged in a month.
fn logged_hours_for_month<S: PeriodStore>(
    store: &S,
    user_id: UserId,
    month: MonthRef,
) -> Result<f64, ApiError> {
    let range: (Date, Date) = (month.first_day(), month.last_day());
    let entries: Vec<TimeEntry> = store.fetch_entries(user_id, Some(range))?;
    Ok(month_logged_hours(&entries, month))
}

/// Returns the expected working hours for a full month.
///
/// # Errors
///
/// Returns an error if the month reference is invalid.
pub fn get_expected_hours<S: PeriodStore>(
    store: &S,
    year: i32,
    month0: u8,
) -> Result<ExpectedHoursResponse, ApiError> {
    let month: MonthRef = month_from_request(year, month0)?;
    let calendar: WorkCalendar = load_calendar(store);
    Ok(ExpectedHoursResponse {
        year,
        month: month0,
        expected_hours: expected_hours(month, &calendar),
    })
}

/// Returns the expected working hours for a month up to today.
///
/// # Errors
///
/// Returns an error if the month reference is invalid.
pub fn get_expected_hours_to_date<S: PeriodStore, C: Clock>(
    store: &S,
    clock: &C,
    year: i32,
    month0: u8,
) -> Result<ExpectedHoursResponse, ApiError> {
    let month: MonthRef = month_from_request(year, month0)?;
    let calendar: WorkCalendar = load_calendar(store);
    Ok(ExpectedHoursResponse {
        year,
        month: month0,
        expected_hours: expected_hours_to_date(month, clock.today(), &calendar),
    })
}

/// Classifies a single date as working or non-working.
///
/// # Errors
///
/// This operation itself has no error conditions; the signature matches
/// the other calendar reads for uniformity.
pub fn get_is_working_day<S: PeriodStore>(
    store: &S,
    date: Date,
) -> Result<WorkingDayResponse, ApiError> {
    let calendar: WorkCalendar = load_calendar(store);
    Ok(WorkingDayResponse {
        date,
        working: is_working_day(date, &calendar),
    })
}

/// Answers whether a user may submit a month right now, with the
/// confirmation summary or the denial reason.
///
/// This is the read-only preview of the same evaluation `submit_period`
/// enforces; it performs no mutation.
///
/// # Errors
///
/// Returns an error if the month reference is invalid or entries cannot be
/// fetched.
pub fn can_submit<S: PeriodStore, C: Clock>(
    store: &S,
    clock: &C,
    user_id: i64,
    year: i32,
    month0: u8,
) -> Result<CanSubmitResponse, ApiError> {
    let month: MonthRef = month_from_request(year, month0)?;
    let user: UserId = UserId::new(user_id);
    let calendar: WorkCalendar = load_calendar(store);
    let logged: f64 = logged_hours_for_month(store, user, month)?;
    let expected: f64 = expected_hours(month, &calendar);

    let check: SubmissionCheck = evaluate_submission(month, clock.today(), logged, expected);
    let response = match check {
        SubmissionCheck::Allowed(summary) => CanSubmitResponse {
            allowed: true,
            reason: None,
            summary: Some(SubmissionSummaryInfo::from(summary)),
        },
        SubmissionCheck::Denied(denial) => CanSubmitResponse {
            allowed: false,
            reason: Some(denial.to_string()),
            summary: None,
        },
    };
    Ok(response)
}

/// Submits a user's month for approval.
///
/// This handler:
/// - Fetches the current period, logged hours, manager chain, and
///   calendar snapshot
/// - Applies the submit transition (validator gate, approver resolution)
/// - Persists the new record via the store's atomic upsert
///
/// # Errors
///
/// Returns an error if:
/// - The month reference is invalid
/// - The period is already submitted or approved (`InvalidTransition`)
/// - The validator denies the submission (`SubmissionDenied`)
/// - The store cannot be reached
pub fn submit_period<S: PeriodStore, C: Clock>(
    store: &mut S,
    clock: &C,
    user_id: i64,
    year: i32,
    month0: u8,
    actor: Actor,
) -> Result<PeriodInfo, ApiError> {
    let month: MonthRef = month_from_request(year, month0)?;
    let user: UserId = UserId::new(user_id);
    let key: PeriodKey = PeriodKey::new(user, month);

    let period: Period = Period::from_fetch(key, store.fetch_period(user, month)?);
    let logged: f64 = logged_hours_for_month(store, user, month)?;
    let chain = store.fetch_manager_chain(user)?;
    let calendar: WorkCalendar = load_calendar(store);

    let command = Command::Submit {
        logged_hours: logged,
        today: clock.today(),
        chain,
        calendar,
    };

    let outcome: TransitionOutcome =
        apply(&period, command, actor, clock.now()).map_err(translate_core_error)?;

    let result: TransitionResult = match outcome {
        TransitionOutcome::Applied(result) => result,
        TransitionOutcome::Denied(denial) => {
            info!(
                user_id = user.value(),
                month = %month,
                expected = denial.expected_hours,
                logged = denial.logged_hours,
                "Submission denied by validator"
            );
            return Err(ApiError::SubmissionDenied {
                expected_hours: denial.expected_hours,
                logged_hours: denial.logged_hours,
                shortfall: denial.shortfall,
                message: denial.to_string(),
            });
        }
    };

    let stored: PeriodRecord = store.upsert_period(result.record)?;
    info!(
        user_id = user.value(),
        month = %month,
        status = stored.status.as_str(),
        approver = ?stored.approver_id.map(|id| id.value()),
        "Period submitted"
    );
    PeriodInfo::from_record(&stored)
}

/// Approves a submitted period.
///
/// # Errors
///
/// Returns an error if:
/// - No period with the given identifier exists
/// - The period is not in the submitted status (`InvalidTransition`)
/// - The store cannot be reached
pub fn approve_period<S: PeriodStore, C: Clock>(
    store: &mut S,
    clock: &C,
    period_id: i64,
    actor: Actor,
) -> Result<PeriodInfo, ApiError> {
    review_period(store, clock, period_id, Command::Approve, actor)
}

/// Rejects a submitted period with a reason.
///
/// # Errors
///
/// Returns an error if:
/// - No period with the given identifier exists
/// - The reason is empty
/// - The period is not in the submitted status (`InvalidTransition`)
/// - The store cannot be reached
pub fn reject_period<S: PeriodStore, C: Clock>(
    store: &mut S,
    clock: &C,
    period_id: i64,
    reason: &str,
    actor: Actor,
) -> Result<PeriodInfo, ApiError> {
    review_period(
        store,
        clock,
        period_id,
        Command::Reject {
            reason: reason.to_string(),
        },
        actor,
    )
}

/// Shared implementation of the two review decisions.
fn review_period<S: PeriodStore, C: Clock>(
    store: &mut S,
    clock: &C,
    period_id: i64,
    command: Command,
    actor: Actor,
) -> Result<PeriodInfo, ApiError> {
    let record: PeriodRecord =
        store
            .fetch_period_by_id(period_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Period"),
                message: format!("no period with id {period_id}"),
            })?;
    let period = Period::Real(record);

    let outcome: TransitionOutcome =
        apply(&period, command, actor, clock.now()).map_err(translate_core_error)?;

    let result: TransitionResult = match outcome {
        TransitionOutcome::Applied(result) => result,
        // Only submit commands can be denied; review commands cannot reach
        // the validator.
        TransitionOutcome::Denied(_) => {
            return Err(ApiError::Internal {
                message: String::from("validator denial on a review command"),
            });
        }
    };

    let stored: PeriodRecord = store.upsert_period(result.record)?;
    info!(
        period_id,
        status = stored.status.as_str(),
        action = result.event.action.as_str(),
        "Period reviewed"
    );
    PeriodInfo::from_record(&stored)
}

/// Reports whether a time entry is locked against editing and deleting.
///
/// An entry is locked while its owning period is submitted or approved.
/// The owning period is addressed by the entry's user and the month of its
/// date. Store failures propagate: lock state is derived from period
/// status and must never be answered from stale data.
///
/// # Errors
///
/// Returns an error if the store cannot be reached.
pub fn is_entry_locked<S: PeriodStore>(
    store: &S,
    entry: &TimeEntry,
) -> Result<EntryLockResponse, ApiError> {
    let month: MonthRef = MonthRef::from_date(entry.date);
    let key: PeriodKey = PeriodKey::new(entry.user_id, month);
    let period: Period = Period::from_fetch(key, store.fetch_period(entry.user_id, month)?);
    Ok(EntryLockResponse {
        locked: period.is_locked(),
    })
}
