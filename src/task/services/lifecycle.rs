//! Service layer for validated task creation, update, transition, and
//! deletion.

use crate::task::{
    domain::{
        HierarchyFacts, HierarchyQuestion, ParseTaskResolutionError, ParseTaskStatusError,
        StatusGraph, Task, TaskAction, TaskId, TaskResolution, TaskStatus, TaskValidationError,
    },
    ports::{
        TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskValidationConfig,
        TaskValidator, ValidationResult,
    },
    validation::DefaultTaskValidator,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    target_status: String,
    resolution: Option<String>,
    resolution_comment: Option<String>,
}

impl TransitionTaskRequest {
    /// Creates a request targeting the given status name.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
            resolution: None,
            resolution_comment: None,
        }
    }

    /// Sets the resolution name recorded with the transition.
    #[must_use]
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    /// Sets the resolution comment recorded with the transition.
    #[must_use]
    pub fn with_resolution_comment(mut self, comment: impl Into<String>) -> Self {
        self.resolution_comment = Some(comment.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// A workflow rule rejected the operation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// The requested status name is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The requested resolution name is unknown.
    #[error(transparent)]
    InvalidResolution(#[from] ParseTaskResolutionError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Loads stored tasks, answers the validator's hierarchy questions from the
/// repository, and takes today's date from the injected clock before any rule
/// runs. Nothing is written unless every rule passes.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validator: DefaultTaskValidator,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default validation.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, TaskValidationConfig::default())
    }

    /// Creates a new task lifecycle service with custom validation.
    #[must_use]
    pub const fn with_config(
        repository: Arc<R>,
        clock: Arc<C>,
        config: TaskValidationConfig,
    ) -> Self {
        Self {
            repository,
            clock,
            validator: DefaultTaskValidator::with_config(config),
        }
    }

    /// Validates and stores a new task.
    ///
    /// A task without a status receives the configured default status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when a rule rejects the task
    /// or [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn create(&self, task: Task) -> TaskLifecycleResult<Task> {
        let candidate = if task.status().is_none() {
            task.with_status(self.validator.config().default_status)
        } else {
            task
        };
        let today = self.today();
        let facts = self.gather_facts(&candidate).await?;

        self.check(TaskAction::Create, &candidate, |validator| {
            validator.validate(&candidate)?;
            validator.validate_create(&candidate, today)?;
            validator.validate_question_answers(&candidate, &facts, TaskAction::Create)
        })?;

        self.repository.store(&candidate).await?;
        tracing::debug!(task_id = %candidate.id(), status = ?candidate.status(), "task created");
        Ok(candidate)
    }

    /// Validates `candidate` against the stored task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// candidate's ID, [`TaskLifecycleError::Validation`] when a rule rejects
    /// the change, or [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn update(&self, candidate: Task) -> TaskLifecycleResult<Task> {
        let old = self.require(candidate.id()).await?;
        let today = self.today();
        let facts = self.gather_facts(&candidate).await?;

        self.check(TaskAction::Update, &candidate, |validator| {
            validator.validate(&candidate)?;
            validator.validate_update(&old, &candidate, today)?;
            validator.validate_question_answers(&candidate, &facts, TaskAction::Update)
        })?;

        self.repository.update(&candidate).await?;
        tracing::debug!(
            task_id = %candidate.id(),
            from = ?old.status(),
            to = ?candidate.status(),
            "task updated"
        );
        Ok(candidate)
    }

    /// Moves a task to the requested status.
    ///
    /// Moving to a status that is not closed clears the stored resolution and
    /// resolution comment. Resolution values in the request are applied on
    /// top and are then subject to the normal rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] or
    /// [`TaskLifecycleError::InvalidResolution`] for unknown names, and the
    /// errors of [`TaskLifecycleService::update`] otherwise.
    pub async fn transition(&self, request: TransitionTaskRequest) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.target_status.as_str())?;
        let resolution = request
            .resolution
            .as_deref()
            .map(TaskResolution::try_from)
            .transpose()?;

        let mut candidate = self.require(request.task_id).await?.with_status(target);
        if !target.is_closed() {
            candidate = candidate.without_resolution().without_resolution_comment();
        }
        if let Some(value) = resolution {
            candidate = candidate.with_resolution(value);
        }
        if let Some(comment) = request.resolution_comment {
            candidate = candidate.with_resolution_comment(comment);
        }

        self.update(candidate).await
    }

    /// Deletes a closed task that has no children.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task,
    /// [`TaskLifecycleError::Validation`] when a rule rejects the deletion, or
    /// [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn delete(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.require(task_id).await?;
        let facts = self.gather_facts(&task).await?;

        self.check(TaskAction::Delete, &task, |validator| {
            validator.validate_delete(&task)?;
            validator.validate_question_answers(&task, &facts, TaskAction::Delete)
        })?;

        self.repository.delete(task_id).await?;
        tracing::debug!(%task_id, "task deleted");
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Returns the direct children of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_children(&self, task_id: TaskId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_children(task_id).await?)
    }

    /// Returns the statuses a user may pick next for a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task or
    /// [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn selectable_statuses(
        &self,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Vec<TaskStatus>> {
        let task = self.require(task_id).await?;
        Ok(StatusGraph::selectable_transitions(task.status()))
    }

    async fn require(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Answers every validator question from the repository.
    async fn gather_facts(&self, task: &Task) -> TaskRepositoryResult<HierarchyFacts> {
        let children = self.repository.find_children(task.id()).await?;
        let parent = match task.parent_id() {
            Some(parent_id) => self.repository.find_by_id(parent_id).await?,
            None => None,
        };

        let facts = self
            .validator
            .questions_to_ask()
            .iter()
            .fold(HierarchyFacts::default(), |facts, &question| {
                let answer = match question {
                    HierarchyQuestion::HasChildren => !children.is_empty(),
                    HierarchyQuestion::HasNotYetClosedChildren => {
                        children.iter().any(|child| !child.is_closed())
                    }
                    HierarchyQuestion::IsParentClosed => {
                        parent.as_ref().is_some_and(Task::is_closed)
                    }
                };
                facts.answer(question, answer)
            });
        Ok(facts)
    }

    fn check(
        &self,
        action: TaskAction,
        task: &Task,
        rules: impl FnOnce(&DefaultTaskValidator) -> ValidationResult<()>,
    ) -> TaskLifecycleResult<()> {
        rules(&self.validator).map_err(|error| {
            tracing::info!(task_id = %task.id(), %action, %error, "task {action} rejected");
            TaskLifecycleError::Validation(error)
        })
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
