// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::event::{Actor, TransitionEvent};
use time::{Date, OffsetDateTime};
use timecard_domain::{
    DomainError, ManagerChain, Period, PeriodAction, PeriodRecord, PeriodStatus, SubmissionCheck,
    SubmissionDenial, UserId, WorkCalendar, evaluate_submission, expected_hours,
};

/// The result of a successful period transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The returned record has not been persisted yet; the
/// caller hands it to the store's atomic upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new period record after the transition.
    pub record: PeriodRecord,
    /// The event recording this transition.
    pub event: TransitionEvent,
}

/// The outcome of applying a command.
///
/// A validator denial is a normal outcome, not an error: the period was
/// simply not ready for submission. Illegal transitions, by contrast, are
/// errors and never silently ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The transition was applied; persist the record.
    Applied(TransitionResult),
    /// Submission was denied by the validator; nothing changed.
    Denied(SubmissionDenial),
}

/// Applies a command to a period, producing a new record and event.
///
/// This function is pure: all store data a command needs is carried on the
/// command itself, and the caller is responsible for persisting the
/// returned record.
///
/// # Arguments
///
/// * `period` - The current period (real record or virtual open period)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `now` - The current timestamp, stamped onto the new record
///
/// # Returns
///
/// * `Ok(TransitionOutcome::Applied)` with the new record and event
/// * `Ok(TransitionOutcome::Denied)` when the submission validator says
///   "not yet"
/// * `Err(CoreError)` if the command is not legal from the current status
///
/// # Errors
///
/// Returns an error if:
/// - The action is not permitted from the period's current status
/// - A rejection carries an empty reason
pub fn apply(
    period: &Period,
    command: Command,
    actor: Actor,
    now: OffsetDateTime,
) -> Result<TransitionOutcome, CoreError> {
    match command {
        Command::Submit {
            logged_hours,
            today,
            chain,
            calendar,
        } => apply_submit(period, logged_hours, today, &chain, &calendar, actor, now),
        Command::Approve => apply_approve(period, actor, now),
        Command::Reject { reason } => apply_reject(period, &reason, actor, now),
    }
}

/// Handles the submit command: validator gate, approver resolution, then
/// the transition to `Submitted` (or straight to `Approved` when no
/// approver exists).
fn apply_submit(
    period: &Period,
    logged_hours: f64,
    today: Date,
    chain: &ManagerChain,
    calendar: &WorkCalendar,
    actor: Actor,
    now: OffsetDateTime,
) -> Result<TransitionOutcome, CoreError> {
    let from: PeriodStatus = period.status();
    from.validate_action(PeriodAction::Submit)?;

    let key = period.key();
    let expected: f64 = expected_hours(key.month, calendar);
    let check: SubmissionCheck = evaluate_submission(key.month, today, logged_hours, expected);

    let summary = match check {
        SubmissionCheck::Denied(denial) => return Ok(TransitionOutcome::Denied(denial)),
        SubmissionCheck::Allowed(summary) => summary,
    };

    // The approver is frozen at submission time; later delegation changes
    // do not move an in-flight submission.
    let approver: Option<UserId> = chain.resolve_approver();
    let to: PeriodStatus = match approver {
        Some(_) => PeriodStatus::Submitted,
        None => PeriodStatus::Approved,
    };

    let record = PeriodRecord {
        period_id: period.record().and_then(|r| r.period_id),
        key,
        status: to,
        approver_id: approver,
        rejection_reason: None,
        updated_at: now,
    };

    let detail: String = match approver {
        Some(id) => format!(
            "routed to approver {id}; expected {:.2} h, logged {:.2} h",
            summary.expected_hours, summary.logged_hours
        ),
        None => format!(
            "auto-approved, no manager assigned; expected {:.2} h, logged {:.2} h",
            summary.expected_hours, summary.logged_hours
        ),
    };

    let event = TransitionEvent::new(actor, PeriodAction::Submit, from, to, now, Some(detail));

    Ok(TransitionOutcome::Applied(TransitionResult {
        record,
        event,
    }))
}

/// Handles the approve command.
fn apply_approve(
    period: &Period,
    actor: Actor,
    now: OffsetDateTime,
) -> Result<TransitionOutcome, CoreError> {
    let from: PeriodStatus = period.status();
    from.validate_action(PeriodAction::Approve)?;

    // A period that permits approval is always backed by a record: virtual
    // periods are open, and open periods failed validation above.
    let Some(current) = period.record() else {
        return Err(CoreError::DomainViolation(DomainError::InvalidTransition {
            from,
            action: PeriodAction::Approve,
        }));
    };

    let record = PeriodRecord {
        period_id: current.period_id,
        key: current.key,
        status: PeriodStatus::Approved,
        approver_id: current.approver_id,
        rejection_reason: None,
        updated_at: now,
    };

    let event = TransitionEvent::new(
        actor,
        PeriodAction::Approve,
        from,
        PeriodStatus::Approved,
        now,
        None,
    );

    Ok(TransitionOutcome::Applied(TransitionResult {
        record,
        event,
    }))
}

/// Handles the reject command.
fn apply_reject(
    period: &Period,
    reason: &str,
    actor: Actor,
    now: OffsetDateTime,
) -> Result<TransitionOutcome, CoreError> {
    let from: PeriodStatus = period.status();
    from.validate_action(PeriodAction::Reject)?;

    if reason.trim().is_empty() {
        return Err(CoreError::DomainViolation(DomainError::EmptyRejectionReason));
    }

    let Some(current) = period.record() else {
        return Err(CoreError::DomainViolation(DomainError::InvalidTransition {
            from,
            action: PeriodAction::Reject,
        }));
    };

    let record = PeriodRecord {
        period_id: current.period_id,
        key: current.key,
        status: PeriodStatus::Rejected,
        approver_id: current.approver_id,
        rejection_reason: Some(reason.trim().to_string()),
        updated_at: now,
    };

    let event = TransitionEvent::new(
        actor,
        PeriodAction::Reject,
        from,
        PeriodStatus::Rejected,
        now,
        Some(format!("reason: {}", reason.trim())),
    );

    Ok(TransitionOutcome::Applied(TransitionResult {
        record,
        event,
    }))
}
