//! Workflow graph over task statuses.
//!
//! The graph is fixed data: every status owns a hand-curated list of outgoing
//! transitions, and tasks without a status may only start in one of
//! [`StatusGraph::START_STATUSES`]. A task may always "move" to the status it
//! already holds unless that status is deprecated.

use super::{TaskStatus, TaskValidationError};

/// Read-only view of the task status workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusGraph;

impl StatusGraph {
    /// Statuses a task may hold immediately after creation.
    pub const START_STATUSES: [TaskStatus; 3] =
        [TaskStatus::Unconfirmed, TaskStatus::New, TaskStatus::Assigned];

    /// Returns the fixed outgoing transitions for `from`.
    ///
    /// Deprecated statuses keep their legacy rows so that help text can still
    /// describe them.
    #[must_use]
    pub const fn allowed_transitions(from: TaskStatus) -> &'static [TaskStatus] {
        use TaskStatus as S;
        match from {
            S::Confirmed => &[S::New, S::Assigned, S::Resolved],
            S::Open => &[S::InProgress],
            S::LongRunning => &[S::InProgress, S::Paused, S::Stalled, S::Blocked, S::Resolved],
            S::Unconfirmed => &[S::New, S::Assigned, S::Resolved],
            S::New => &[S::Assigned, S::InProgress, S::Resolved],
            S::Assigned => &[S::New, S::Resolved, S::InProgress],
            S::InProgress => &[S::Unconfirmed, S::Paused, S::Stalled, S::Blocked, S::Resolved],
            S::Paused => &[S::Stalled, S::Blocked, S::Reopened, S::Resolved],
            S::Stalled => &[S::Blocked, S::Reopened, S::Resolved],
            S::Blocked => &[S::Stalled, S::Reopened, S::Resolved],
            S::Reopened => &[S::New, S::Assigned, S::Resolved],
            S::Resolved => &[S::Unconfirmed, S::Reopened, S::Verified],
            S::Verified => &[S::Unconfirmed, S::Reopened, S::Resolved, S::Closed],
            S::Closed => &[S::Unconfirmed, S::Reopened, S::Resolved],
        }
    }

    /// Decides whether a task may move from `from` to `to`.
    ///
    /// `from` is `None` for a task that has no status yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::IllegalTransition`] when `to` is a
    /// deprecated status, even when `from` already equals it.
    pub fn can_transition(
        from: Option<TaskStatus>,
        to: TaskStatus,
    ) -> Result<bool, TaskValidationError> {
        if to.is_deprecated() {
            return Err(TaskValidationError::IllegalTransition { from, to });
        }
        let allowed = match from {
            Some(current) if current == to => true,
            Some(current) => Self::allowed_transitions(current).contains(&to),
            None => Self::START_STATUSES.contains(&to),
        };
        Ok(allowed)
    }

    /// Returns the statuses a user may pick for a task currently in `from`.
    ///
    /// The current status comes first when it may be kept, followed by its
    /// outgoing transitions. Deprecated statuses are never offered.
    #[must_use]
    pub fn selectable_transitions(from: Option<TaskStatus>) -> Vec<TaskStatus> {
        let Some(current) = from else {
            return Self::START_STATUSES.to_vec();
        };
        std::iter::once(current)
            .chain(Self::allowed_transitions(current).iter().copied())
            .filter(|status| !status.is_deprecated())
            .collect()
    }

    /// Renders the workflow as human-readable help, one status per line.
    ///
    /// ```
    /// use taskwright::task::domain::StatusGraph;
    ///
    /// let help = StatusGraph::render_help();
    /// assert!(help.contains("--OPEN-- >> IN_PROGRESS\n"));
    /// assert!(help.contains("NEW >> ASSIGNED / IN_PROGRESS / RESOLVED\n"));
    /// ```
    #[must_use]
    pub fn render_help() -> String {
        let mut help = String::new();
        for status in TaskStatus::ALL {
            help.push_str(&help_label(status));
            help.push_str(" >> ");
            let targets = Self::allowed_transitions(status)
                .iter()
                .map(|target| target.as_str())
                .collect::<Vec<_>>();
            help.push_str(&targets.join(" / "));
            help.push('\n');
        }
        help
    }
}

fn help_label(status: TaskStatus) -> String {
    if status.is_deprecated() {
        format!("--{status}--")
    } else {
        status.as_str().to_owned()
    }
}
