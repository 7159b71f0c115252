//! Task lifecycle status values.

use super::{ParseTaskStatusError, StatusGraph};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// The first three variants are legacy values. They remain parseable so that
/// already-persisted records can be read and displayed, but no task may move
/// into them and [`crate::task::ports::TaskValidator::validate`] rejects a task
/// that still holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Legacy: confirmed but not yet triaged.
    Confirmed,
    /// Legacy: open for work.
    Open,
    /// Legacy: work spanning a long period.
    LongRunning,
    /// Reported but not confirmed.
    Unconfirmed,
    /// Confirmed and waiting for an assignee.
    New,
    /// Assigned to someone.
    Assigned,
    /// Being worked on.
    InProgress,
    /// Work temporarily paused.
    Paused,
    /// Work stalled without an explicit blocker.
    Stalled,
    /// Work blocked by something else.
    Blocked,
    /// Reopened after being closed.
    Reopened,
    /// Resolved; awaiting verification.
    Resolved,
    /// Resolution verified.
    Verified,
    /// Closed for good.
    Closed,
}

impl TaskStatus {
    /// Every status in definition order.
    pub const ALL: [Self; 14] = [
        Self::Confirmed,
        Self::Open,
        Self::LongRunning,
        Self::Unconfirmed,
        Self::New,
        Self::Assigned,
        Self::InProgress,
        Self::Paused,
        Self::Stalled,
        Self::Blocked,
        Self::Reopened,
        Self::Resolved,
        Self::Verified,
        Self::Closed,
    ];

    /// Status offered for a task that is created without one.
    pub const DEFAULT: Self = Self::New;

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Open => "OPEN",
            Self::LongRunning => "LONG_RUNNING",
            Self::Unconfirmed => "UNCONFIRMED",
            Self::New => "NEW",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Paused => "PAUSED",
            Self::Stalled => "STALLED",
            Self::Blocked => "BLOCKED",
            Self::Reopened => "REOPENED",
            Self::Resolved => "RESOLVED",
            Self::Verified => "VERIFIED",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns `true` for the legacy statuses kept only for display.
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(self, Self::Confirmed | Self::Open | Self::LongRunning)
    }

    /// Returns `true` for statuses that mark the work as finished.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Resolved | Self::Verified | Self::Closed)
    }

    /// Returns the statuses this status may move to, in table order.
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        StatusGraph::allowed_transitions(self)
    }

    /// Returns `true` when moving from this status to `target` is permitted.
    ///
    /// Deprecated targets are never permitted.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(StatusGraph::can_transition(Some(self), target), Ok(true))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}
