//! Individual validation rule implementations.
//!
//! Each rule is a pure function over task snapshots. Rules return `Ok(())` on
//! success or the specific [`TaskValidationError`] on failure.

use crate::task::{
    domain::{
        ClosingRequirement, HierarchyFacts, HierarchyViolation, ResolutionField, StatusGraph,
        Task, TaskAction, TaskStatus, TaskValidationError,
    },
    ports::validator::{TodoPolicy, ValidationResult},
};
use chrono::NaiveDate;

/// Validates that a changed deadline is not before `today`.
///
/// A deadline equal to `previous` is accepted even when it already lies in
/// the past.
///
/// # Errors
///
/// Returns [`TaskValidationError::DeadlinePast`] for a new deadline before
/// `today`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use taskwright::task::validation::rules::validate_deadline;
///
/// let today = NaiveDate::from_ymd_opt(2026, 5, 10).expect("valid date");
/// let yesterday = NaiveDate::from_ymd_opt(2026, 5, 9).expect("valid date");
///
/// assert!(validate_deadline(None, Some(yesterday), today).is_err());
/// assert!(validate_deadline(Some(yesterday), Some(yesterday), today).is_ok());
/// assert!(validate_deadline(None, Some(today), today).is_ok());
/// ```
pub fn validate_deadline(
    previous: Option<NaiveDate>,
    requested: Option<NaiveDate>,
    today: NaiveDate,
) -> ValidationResult<()> {
    let Some(deadline) = requested else {
        return Ok(());
    };
    if previous == Some(deadline) || deadline >= today {
        return Ok(());
    }
    Err(TaskValidationError::DeadlinePast { deadline, today })
}

/// Validates that `status` may be held by a task without a previous status.
///
/// # Errors
///
/// Returns [`TaskValidationError::IllegalStartStatus`] for statuses outside
/// [`StatusGraph::START_STATUSES`], or
/// [`TaskValidationError::IllegalTransition`] for deprecated statuses.
pub fn validate_start_status(status: TaskStatus) -> ValidationResult<()> {
    if StatusGraph::can_transition(None, status)? {
        Ok(())
    } else {
        Err(TaskValidationError::IllegalStartStatus { status })
    }
}

/// Validates a status change between two snapshots.
///
/// # Errors
///
/// Returns, in rule order:
/// - [`TaskValidationError::StatusCannotBecomeNull`] when a status is removed
/// - a start-status error when a status is first assigned
/// - [`TaskValidationError::IllegalTransition`] for a change outside the graph
/// - [`TaskValidationError::NoOpOnClosedStatus`] when a closed status is kept
pub fn validate_status_change(
    old: Option<TaskStatus>,
    new: Option<TaskStatus>,
) -> ValidationResult<()> {
    match (old, new) {
        (None, None) => Ok(()),
        (Some(from), None) => Err(TaskValidationError::StatusCannotBecomeNull { from }),
        (None, Some(status)) => validate_start_status(status),
        (Some(from), Some(to)) if from == to => {
            if to.is_closed() {
                Err(TaskValidationError::NoOpOnClosedStatus { status: to })
            } else {
                Ok(())
            }
        }
        (Some(from), Some(to)) => {
            if StatusGraph::can_transition(Some(from), to)? {
                Ok(())
            } else {
                Err(TaskValidationError::IllegalTransition {
                    from: Some(from),
                    to,
                })
            }
        }
    }
}

/// Validates that only a move to `RESOLVED` may change the resolution of a
/// task entering or staying in a closed status.
///
/// # Errors
///
/// Returns [`TaskValidationError::ResolutionLockedUnlessResolving`] when the
/// resolution differs from `old`.
pub fn validate_resolution_lock(old: &Task, candidate: &Task) -> ValidationResult<()> {
    let Some(status) = candidate.status() else {
        return Ok(());
    };
    if !status.is_closed() || status == TaskStatus::Resolved {
        return Ok(());
    }
    if old.resolution() == candidate.resolution() {
        return Ok(());
    }
    Err(TaskValidationError::ResolutionLockedUnlessResolving {
        status,
        current: old.resolution(),
        attempted: candidate.resolution(),
    })
}

/// Validates the closing information of a closed task.
///
/// Tasks that are not closed pass unchanged.
///
/// # Errors
///
/// Returns [`TaskValidationError::ClosingIncomplete`] when the resolution is
/// missing, the resolution comment is blank, or todos are outstanding.
pub fn validate_closing(task: &Task, todo_policy: TodoPolicy) -> ValidationResult<()> {
    let Some(status) = task.status().filter(|status| status.is_closed()) else {
        return Ok(());
    };
    let incomplete = |requirement| TaskValidationError::ClosingIncomplete {
        status,
        requirement,
    };

    if task.resolution().is_none() {
        return Err(incomplete(ClosingRequirement::Resolution));
    }
    if task
        .resolution_comment()
        .is_none_or(|comment| comment.trim().is_empty())
    {
        return Err(incomplete(ClosingRequirement::ResolutionComment));
    }
    if has_outstanding_todo(task.todo(), todo_policy) {
        return Err(incomplete(ClosingRequirement::TodosDone));
    }
    Ok(())
}

/// Validates a snapshot on its own, independent of any transition.
///
/// # Errors
///
/// Returns [`TaskValidationError::DeprecatedStatus`] for a deprecated status,
/// [`TaskValidationError::ResolutionWithoutClosedStatus`] when resolution data
/// is set on a task that is not closed, or a closing error for closed tasks.
pub fn validate_snapshot(task: &Task, todo_policy: TodoPolicy) -> ValidationResult<()> {
    if let Some(status) = task.status()
        && status.is_deprecated()
    {
        return Err(TaskValidationError::DeprecatedStatus { status });
    }

    if task.is_closed() {
        return validate_closing(task, todo_policy);
    }

    let unexpected = |field| TaskValidationError::ResolutionWithoutClosedStatus {
        status: task.status(),
        field,
    };
    if task.resolution().is_some() {
        return Err(unexpected(ResolutionField::Resolution));
    }
    if task.resolution_comment().is_some() {
        return Err(unexpected(ResolutionField::ResolutionComment));
    }
    Ok(())
}

/// Validates that a task may be deleted.
///
/// # Errors
///
/// Returns [`TaskValidationError::NotClosed`] unless the task is closed.
pub fn validate_deletable(task: &Task) -> ValidationResult<()> {
    match task.status() {
        Some(status) if status.is_closed() => Ok(()),
        status => Err(TaskValidationError::NotClosed { status }),
    }
}

/// Validates caller-supplied hierarchy facts for an action.
///
/// # Errors
///
/// Returns [`TaskValidationError::HierarchyBlocked`] when:
/// - an update closes a task whose children are not all closed
/// - a create or update targets a task whose parent is closed
/// - a delete targets a task with children
pub fn validate_hierarchy(
    task: &Task,
    facts: &HierarchyFacts,
    action: TaskAction,
) -> ValidationResult<()> {
    let blocked = |reason| TaskValidationError::HierarchyBlocked {
        task_id: task.id(),
        reason,
    };

    if action == TaskAction::Update && task.is_closed() && facts.has_not_yet_closed_children {
        return Err(blocked(HierarchyViolation::UnclosedChildren));
    }
    if matches!(action, TaskAction::Create | TaskAction::Update)
        && task.parent_id().is_some()
        && facts.is_parent_closed
    {
        return Err(blocked(HierarchyViolation::ParentClosed));
    }
    if action == TaskAction::Delete && facts.has_children {
        return Err(blocked(HierarchyViolation::HasChildren));
    }
    Ok(())
}

/// Returns `true` when `todo` still holds work under `policy`.
#[must_use]
pub fn has_outstanding_todo(todo: Option<&str>, policy: TodoPolicy) -> bool {
    match policy {
        TodoPolicy::NonEmptyText => todo.is_some_and(|text| !text.is_empty()),
        TodoPolicy::AnyText => todo.is_some(),
    }
}
