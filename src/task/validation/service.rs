//! Validation service implementation.
//!
//! Provides the default implementation of the [`TaskValidator`] port,
//! combining the individual rules in their required order.

use crate::task::{
    domain::{HierarchyFacts, Task, TaskAction},
    ports::validator::{TaskValidationConfig, TaskValidator, ValidationResult},
    validation::rules,
};
use chrono::NaiveDate;

/// Default implementation of the task validator.
///
/// Rules run in a fixed order and the first failure is returned.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskwright::task::domain::{Task, TaskStatus};
/// use taskwright::task::ports::TaskValidator;
/// use taskwright::task::validation::DefaultTaskValidator;
///
/// let today = NaiveDate::from_ymd_opt(2026, 5, 10).expect("valid date");
/// let task = Task::new("Plan sprint")
///     .expect("valid name")
///     .with_status(TaskStatus::New)
///     .with_deadline(today);
///
/// let validator = DefaultTaskValidator::new();
/// assert!(validator.validate(&task).is_ok());
/// assert!(validator.validate_create(&task, today).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: TaskValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: TaskValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskValidationConfig {
        &self.config
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, task: &Task) -> ValidationResult<()> {
        rules::validate_snapshot(task, self.config.todo_policy)
    }

    fn validate_closing(&self, task: &Task) -> ValidationResult<()> {
        rules::validate_closing(task, self.config.todo_policy)
    }

    fn validate_create(&self, candidate: &Task, today: NaiveDate) -> ValidationResult<()> {
        rules::validate_deadline(None, candidate.deadline(), today)?;
        candidate
            .status()
            .map_or(Ok(()), rules::validate_start_status)
    }

    fn validate_update(
        &self,
        old: &Task,
        candidate: &Task,
        today: NaiveDate,
    ) -> ValidationResult<()> {
        // A decided resolution supersedes deadline scrutiny.
        if candidate.resolution().is_none() {
            rules::validate_deadline(old.deadline(), candidate.deadline(), today)?;
        }
        rules::validate_status_change(old.status(), candidate.status())?;
        rules::validate_resolution_lock(old, candidate)
    }

    fn validate_delete(&self, task: &Task) -> ValidationResult<()> {
        rules::validate_deletable(task)
    }

    fn validate_question_answers(
        &self,
        task: &Task,
        facts: &HierarchyFacts,
        action: TaskAction,
    ) -> ValidationResult<()> {
        rules::validate_hierarchy(task, facts, action)
    }
}
