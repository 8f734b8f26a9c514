// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use timecard_domain::{PeriodAction, PeriodStatus};

/// Represents the entity performing a period action.
///
/// An actor is any identifiable entity that initiates a transition: the
/// period's owner submitting, a manager reviewing, or a system process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "employee", "manager", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new `Actor`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// An immutable record of one successful period transition.
///
/// Every successful transition produces exactly one event capturing who
/// acted, what action was taken, the statuses before and after, and when.
/// Events are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    /// The actor who initiated this transition.
    pub actor: Actor,
    /// The action that was performed.
    pub action: PeriodAction,
    /// The status before the transition.
    pub from: PeriodStatus,
    /// The status after the transition.
    pub to: PeriodStatus,
    /// When the transition occurred.
    pub occurred_at: OffsetDateTime,
    /// Optional additional detail (resolved approver, rejection reason).
    pub detail: Option<String>,
}

impl TransitionEvent {
    /// Creates a new `TransitionEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the transition
    /// * `action` - The action that was performed
    /// * `from` - The status before the transition
    /// * `to` - The status after the transition
    /// * `occurred_at` - When the transition occurred
    /// * `detail` - Optional additional detail
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: PeriodAction,
        from: PeriodStatus,
        to: PeriodStatus,
        occurred_at: OffsetDateTime,
        detail: Option<String>,
    ) -> Self {
        Self {
            actor,
            action,
            from,
            to,
            occurred_at,
            detail,
        }
    }
}
