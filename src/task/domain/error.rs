//! Error types for task domain construction, parsing, and validation.

use super::{TaskId, TaskResolution, TaskStatus};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task resolutions from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task resolution: {0}")]
pub struct ParseTaskResolutionError(pub String);

/// Error returned while parsing importance values from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown importance: {0}")]
pub struct ParseImportanceError(pub String);

/// Error returned while parsing task sizes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task size: {0}")]
pub struct ParseTaskSizeError(pub String);

/// Resolution-related field that may only be set on a closed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionField {
    /// The resolution value.
    Resolution,
    /// The free-text resolution comment.
    ResolutionComment,
}

impl fmt::Display for ResolutionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resolution => "resolution",
            Self::ResolutionComment => "resolution comment",
        })
    }
}

/// Requirement that a closed task failed to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClosingRequirement {
    /// A resolution must be given.
    Resolution,
    /// A non-blank resolution comment must be given.
    ResolutionComment,
    /// Outstanding todos must be done and removed.
    TodosDone,
}

impl fmt::Display for ClosingRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resolution => "resolution is not given",
            Self::ResolutionComment => "resolution comment is empty",
            Self::TodosDone => "todo is not empty; finish the todos and move notes to the note field",
        })
    }
}

/// Hierarchy fact that blocked an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyViolation {
    /// The task is being closed while some children are still open.
    UnclosedChildren,
    /// The parent task is already closed.
    ParentClosed,
    /// The task still has children.
    HasChildren,
}

impl fmt::Display for HierarchyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnclosedChildren => "not all of its children are closed",
            Self::ParentClosed => "its parent is closed",
            Self::HasChildren => "it has children",
        })
    }
}

/// Errors produced by task validation rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// A host-supplied value is missing or malformed.
    #[error("invalid value for '{field}': {}", value_label(.value))]
    InvalidArgument {
        /// Name of the offending input.
        field: String,
        /// The supplied value, if any.
        value: Option<String>,
    },

    /// The status change is not part of the workflow graph.
    #[error("status {} cannot be changed to {to}", status_label(.from))]
    IllegalTransition {
        /// Current status, or `None` for a task being created.
        from: Option<TaskStatus>,
        /// Requested status.
        to: TaskStatus,
    },

    /// The task holds a status that is kept only for legacy records.
    #[error("status {status} is deprecated; select another one")]
    DeprecatedStatus {
        /// The deprecated status.
        status: TaskStatus,
    },

    /// The deadline was moved into the past.
    #[error("deadline {deadline} is before today ({today})")]
    DeadlinePast {
        /// Requested deadline.
        deadline: NaiveDate,
        /// Date the validation ran against.
        today: NaiveDate,
    },

    /// A task that had a status cannot lose it.
    #[error("status {from} cannot be changed to nothing")]
    StatusCannotBecomeNull {
        /// Status held before the update.
        from: TaskStatus,
    },

    /// The status is not allowed for a task without a previous status.
    #[error("start status cannot be {status}; select another one")]
    IllegalStartStatus {
        /// Requested start status.
        status: TaskStatus,
    },

    /// A closed task was updated while staying in the same closed status.
    #[error("task in closed status {status} cannot be changed without changing its status")]
    NoOpOnClosedStatus {
        /// The unchanged closed status.
        status: TaskStatus,
    },

    /// Resolution was changed by a transition to a closed status other than
    /// `RESOLVED`.
    #[error(
        "resolution cannot be changed from {} to {} unless the new status is RESOLVED (got {status})",
        resolution_label(.current),
        resolution_label(.attempted)
    )]
    ResolutionLockedUnlessResolving {
        /// Requested status.
        status: TaskStatus,
        /// Resolution held before the update.
        current: Option<TaskResolution>,
        /// Resolution requested by the update.
        attempted: Option<TaskResolution>,
    },

    /// Resolution data was supplied for a task that is not closed.
    #[error("status {} is not a closed status; {field} cannot be set", status_label(.status))]
    ResolutionWithoutClosedStatus {
        /// Status held by the task.
        status: Option<TaskStatus>,
        /// The field that must stay empty.
        field: ResolutionField,
    },

    /// A closed task is missing closing information.
    #[error("status {status} is a closed status, but {requirement}")]
    ClosingIncomplete {
        /// The closed status.
        status: TaskStatus,
        /// The unmet requirement.
        requirement: ClosingRequirement,
    },

    /// Only closed tasks may be deleted.
    #[error("task cannot be deleted while in status {}; close it first", status_label(.status))]
    NotClosed {
        /// Status held by the task.
        status: Option<TaskStatus>,
    },

    /// The task hierarchy forbids the operation.
    #[error("task {task_id} is blocked because {reason}")]
    HierarchyBlocked {
        /// Task being validated.
        task_id: TaskId,
        /// Blocking hierarchy fact.
        reason: HierarchyViolation,
    },
}

fn status_label(status: &Option<TaskStatus>) -> &'static str {
    status.map_or("<none>", TaskStatus::as_str)
}

fn resolution_label(resolution: &Option<TaskResolution>) -> &'static str {
    resolution.map_or("<none>", TaskResolution::as_str)
}

fn value_label(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<missing>")
}
