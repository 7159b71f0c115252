//! Task record validated by the workflow rules.

use super::{Importance, TaskDomainError, TaskId, TaskResolution, TaskSize, TaskStatus, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of a task as seen by the workflow rules.
///
/// A task is built with [`Task::new`] and the `with_*` / `without_*` methods.
/// Callers produce update candidates by cloning the stored task and changing
/// the fields they need; the validator compares the two snapshots.
///
/// ```
/// use taskwright::task::domain::{Task, TaskResolution, TaskStatus};
///
/// let task = Task::new("Write release notes")
///     .expect("valid name")
///     .with_status(TaskStatus::InProgress);
/// let candidate = task
///     .clone()
///     .with_status(TaskStatus::Resolved)
///     .with_resolution(TaskResolution::Fixed)
///     .with_resolution_comment("published");
///
/// assert_eq!(candidate.id(), task.id());
/// assert!(candidate.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    name: String,
    group: Option<String>,
    since: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
    status: Option<TaskStatus>,
    resolution: Option<TaskResolution>,
    resolution_comment: Option<String>,
    sort_key: Option<i32>,
    importance: Option<Importance>,
    size: Option<TaskSize>,
    note: Option<String>,
    object: Option<String>,
    todo: Option<String>,
    asap: bool,
    repeat_every_x_days: Option<u32>,
    progress_estimation: Option<i32>,
    parent_id: Option<TaskId>,
    assignee: Option<UserId>,
    reporter: Option<UserId>,
}

/// Stored form of a [`Task`], checked through [`Task::from_parts`] on load.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    name: String,
    group: Option<String>,
    since: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
    status: Option<TaskStatus>,
    resolution: Option<TaskResolution>,
    resolution_comment: Option<String>,
    sort_key: Option<i32>,
    importance: Option<Importance>,
    size: Option<TaskSize>,
    note: Option<String>,
    object: Option<String>,
    todo: Option<String>,
    #[serde(default)]
    asap: bool,
    repeat_every_x_days: Option<u32>,
    progress_estimation: Option<i32>,
    parent_id: Option<TaskId>,
    assignee: Option<UserId>,
    reporter: Option<UserId>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self::from_parts(record.id, record.name)?;
        Ok(Self {
            group: record.group,
            since: record.since,
            deadline: record.deadline,
            status: record.status,
            resolution: record.resolution,
            resolution_comment: record.resolution_comment,
            sort_key: record.sort_key,
            importance: record.importance,
            size: record.size,
            note: record.note,
            object: record.object,
            todo: record.todo,
            asap: record.asap,
            repeat_every_x_days: record.repeat_every_x_days,
            progress_estimation: record.progress_estimation,
            parent_id: record.parent_id,
            assignee: record.assignee,
            reporter: record.reporter,
            ..task
        })
    }
}

impl Task {
    /// Creates a task with a fresh identifier and no optional fields set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, TaskDomainError> {
        Self::from_parts(TaskId::new(), name)
    }

    /// Creates a task with a known identifier, e.g. when reloading a record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] if the name is blank.
    pub fn from_parts(id: TaskId, name: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw_name = name.into();
        let normalized = raw_name.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyName);
        }

        Ok(Self {
            id,
            name: normalized.to_owned(),
            group: None,
            since: None,
            deadline: None,
            status: None,
            resolution: None,
            resolution_comment: None,
            sort_key: None,
            importance: None,
            size: None,
            note: None,
            object: None,
            todo: None,
            asap: false,
            repeat_every_x_days: None,
            progress_estimation: None,
            parent_id: None,
            assignee: None,
            reporter: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task group, if any.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Returns the date since which the task should be in progress.
    #[must_use]
    pub const fn since(&self) -> Option<NaiveDate> {
        self.since
    }

    /// Returns the date by which the task should be closed.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the lifecycle status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the resolution, if any.
    #[must_use]
    pub const fn resolution(&self) -> Option<TaskResolution> {
        self.resolution
    }

    /// Returns the resolution comment, if any.
    #[must_use]
    pub fn resolution_comment(&self) -> Option<&str> {
        self.resolution_comment.as_deref()
    }

    /// Returns the ordering hint, if any.
    #[must_use]
    pub const fn sort_key(&self) -> Option<i32> {
        self.sort_key
    }

    /// Returns the importance, if any.
    #[must_use]
    pub const fn importance(&self) -> Option<Importance> {
        self.importance
    }

    /// Returns the size estimate, if any.
    #[must_use]
    pub const fn size(&self) -> Option<TaskSize> {
        self.size
    }

    /// Returns the free-text note, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the object the task is about, if any.
    #[must_use]
    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    /// Returns the outstanding todo text, if any.
    #[must_use]
    pub fn todo(&self) -> Option<&str> {
        self.todo.as_deref()
    }

    /// Returns `true` when the task must be done as soon as possible.
    #[must_use]
    pub const fn asap(&self) -> bool {
        self.asap
    }

    /// Returns the repeat interval in days, if any.
    #[must_use]
    pub const fn repeat_every_x_days(&self) -> Option<u32> {
        self.repeat_every_x_days
    }

    /// Returns the progress estimate in percent, if any.
    #[must_use]
    pub const fn progress_estimation(&self) -> Option<i32> {
        self.progress_estimation
    }

    /// Returns the parent task identifier, if any.
    #[must_use]
    pub const fn parent_id(&self) -> Option<TaskId> {
        self.parent_id
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the reporting user, if any.
    #[must_use]
    pub const fn reporter(&self) -> Option<UserId> {
        self.reporter
    }

    /// Returns `true` when the task holds a closed status.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status.is_some_and(TaskStatus::is_closed)
    }

    /// Sets the group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the start date.
    #[must_use]
    pub fn with_since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Clears the deadline.
    #[must_use]
    pub fn without_deadline(mut self) -> Self {
        self.deadline = None;
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Clears the status.
    #[must_use]
    pub fn without_status(mut self) -> Self {
        self.status = None;
        self
    }

    /// Sets the resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: TaskResolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Clears the resolution.
    #[must_use]
    pub fn without_resolution(mut self) -> Self {
        self.resolution = None;
        self
    }

    /// Sets the resolution comment.
    #[must_use]
    pub fn with_resolution_comment(mut self, comment: impl Into<String>) -> Self {
        self.resolution_comment = Some(comment.into());
        self
    }

    /// Clears the resolution comment.
    #[must_use]
    pub fn without_resolution_comment(mut self) -> Self {
        self.resolution_comment = None;
        self
    }

    /// Sets the ordering hint.
    #[must_use]
    pub fn with_sort_key(mut self, sort_key: i32) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    /// Sets the importance.
    #[must_use]
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Sets the size estimate.
    #[must_use]
    pub fn with_size(mut self, size: TaskSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sets the object the task is about.
    #[must_use]
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Sets the outstanding todo text.
    #[must_use]
    pub fn with_todo(mut self, todo: impl Into<String>) -> Self {
        self.todo = Some(todo.into());
        self
    }

    /// Clears the outstanding todo text.
    #[must_use]
    pub fn without_todo(mut self) -> Self {
        self.todo = None;
        self
    }

    /// Sets the as-soon-as-possible flag.
    #[must_use]
    pub fn with_asap(mut self, asap: bool) -> Self {
        self.asap = asap;
        self
    }

    /// Sets the repeat interval in days.
    #[must_use]
    pub fn with_repeat_every_x_days(mut self, days: u32) -> Self {
        self.repeat_every_x_days = Some(days);
        self
    }

    /// Sets the progress estimate in percent.
    #[must_use]
    pub fn with_progress_estimation(mut self, percent: i32) -> Self {
        self.progress_estimation = Some(percent);
        self
    }

    /// Sets the parent task.
    #[must_use]
    pub fn with_parent(mut self, parent_id: TaskId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the assigned user.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the reporting user.
    #[must_use]
    pub fn with_reporter(mut self, reporter: UserId) -> Self {
        self.reporter = Some(reporter);
        self
    }
}
