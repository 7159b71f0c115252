//! Validator port for task workflow rules.

use crate::task::domain::{
    HierarchyFacts, HierarchyQuestion, Task, TaskAction, TaskStatus, TaskValidationError,
};
use chrono::NaiveDate;
use serde::Deserialize;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, TaskValidationError>;

/// Port for task workflow validation.
///
/// Every operation is a pure function of its inputs: the caller supplies the
/// task snapshots, today's date, and the answers to
/// [`TaskValidator::questions_to_ask`]. Validation stops at the first broken
/// rule.
///
/// # Implementation Notes
///
/// Implementations should be stateless and thread-safe.
pub trait TaskValidator: Send + Sync {
    /// Validates the consistency of a single snapshot.
    ///
    /// Checks:
    /// - the status is not deprecated
    /// - resolution data is present only for closed statuses
    /// - closed tasks satisfy [`TaskValidator::validate_closing`]
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskValidationError`] encountered.
    fn validate(&self, task: &Task) -> ValidationResult<()>;

    /// Validates the closing information of a task in a closed status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::ClosingIncomplete`] naming the unmet
    /// requirement.
    fn validate_closing(&self, task: &Task) -> ValidationResult<()>;

    /// Validates a task that is about to be created.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::DeadlinePast`] for a deadline before
    /// `today`, or a transition error when the status is not a start status.
    fn validate_create(&self, candidate: &Task, today: NaiveDate) -> ValidationResult<()>;

    /// Validates a change from `old` to `candidate`.
    ///
    /// # Errors
    ///
    /// Returns the first deadline, status, or resolution rule violated by the
    /// change.
    fn validate_update(&self, old: &Task, candidate: &Task, today: NaiveDate)
    -> ValidationResult<()>;

    /// Validates that a task may be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::NotClosed`] unless the task is closed.
    fn validate_delete(&self, task: &Task) -> ValidationResult<()>;

    /// Validates the hierarchy facts gathered by the caller for `action`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::HierarchyBlocked`] when the hierarchy
    /// forbids the action.
    fn validate_question_answers(
        &self,
        task: &Task,
        facts: &HierarchyFacts,
        action: TaskAction,
    ) -> ValidationResult<()>;

    /// Returns the questions the caller must answer before calling
    /// [`TaskValidator::validate_question_answers`].
    fn questions_to_ask(&self) -> &'static [HierarchyQuestion] {
        &HierarchyQuestion::ALL
    }
}

/// How todo text is judged when a task is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPolicy {
    /// Any todo text blocks closing; an empty string counts as no todo.
    #[default]
    NonEmptyText,
    /// Any todo value, even an empty one, blocks closing.
    AnyText,
}

/// Configuration for task validation.
///
/// # Examples
///
/// ```
/// use taskwright::task::domain::TaskStatus;
/// use taskwright::task::ports::validator::{TaskValidationConfig, TodoPolicy};
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.default_status, TaskStatus::New);
/// assert_eq!(config.todo_policy, TodoPolicy::NonEmptyText);
///
/// let strict = TaskValidationConfig::strict();
/// assert_eq!(strict.todo_policy, TodoPolicy::AnyText);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskValidationConfig {
    /// Status given to tasks created without one.
    pub default_status: TaskStatus,
    /// How todo text is judged on closing.
    pub todo_policy: TodoPolicy,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            default_status: TaskStatus::DEFAULT,
            todo_policy: TodoPolicy::NonEmptyText,
        }
    }
}

impl TaskValidationConfig {
    /// Creates a configuration where any todo value blocks closing.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            default_status: TaskStatus::DEFAULT,
            todo_policy: TodoPolicy::AnyText,
        }
    }
}
