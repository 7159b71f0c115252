//! Enumerated task attributes: resolution, importance, and size.

use super::{ParseImportanceError, ParseTaskResolutionError, ParseTaskSizeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome recorded when a task is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskResolution {
    /// The work was done.
    Fixed,
    /// The task did not describe a real problem.
    Invalid,
    /// The task will not be done.
    WontFix,
    /// Another task covers the same work.
    Duplicate,
    /// The reported problem could not be reproduced.
    WorksForMe,
    /// Not enough information to act on the task.
    Incomplete,
}

impl TaskResolution {
    /// Every resolution in definition order.
    pub const ALL: [Self; 6] = [
        Self::Fixed,
        Self::Invalid,
        Self::WontFix,
        Self::Duplicate,
        Self::WorksForMe,
        Self::Incomplete,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Invalid => "INVALID",
            Self::WontFix => "WONT_FIX",
            Self::Duplicate => "DUPLICATE",
            Self::WorksForMe => "WORKS_FOR_ME",
            Self::Incomplete => "INCOMPLETE",
        }
    }
}

impl fmt::Display for TaskResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskResolution {
    type Error = ParseTaskResolutionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|resolution| resolution.as_str() == normalized)
            .ok_or_else(|| ParseTaskResolutionError(value.to_owned()))
    }
}

/// How much a task matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Importance {
    /// Can be dropped.
    Lowest,
    /// Nice to have.
    Low,
    /// Regular work.
    Normal,
    /// Should be done soon.
    High,
    /// Must be done first.
    Highest,
}

impl Importance {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lowest => "LOWEST",
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::Highest => "HIGHEST",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Importance {
    type Error = ParseImportanceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LOWEST" => Ok(Self::Lowest),
            "LOW" => Ok(Self::Low),
            "NORMAL" => Ok(Self::Normal),
            "HIGH" => Ok(Self::High),
            "HIGHEST" => Ok(Self::Highest),
            _ => Err(ParseImportanceError(value.to_owned())),
        }
    }
}

/// Rough effort estimate of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskSize {
    /// Minutes of work.
    #[serde(rename = "XS")]
    ExtraSmall,
    /// A few hours.
    #[serde(rename = "S")]
    Small,
    /// About a day.
    #[serde(rename = "M")]
    Medium,
    /// Several days.
    #[serde(rename = "L")]
    Large,
    /// Weeks; consider splitting.
    #[serde(rename = "XL")]
    ExtraLarge,
}

impl TaskSize {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExtraSmall => "XS",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        }
    }
}

impl fmt::Display for TaskSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskSize {
    type Error = ParseTaskSizeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "XS" => Ok(Self::ExtraSmall),
            "S" => Ok(Self::Small),
            "M" => Ok(Self::Medium),
            "L" => Ok(Self::Large),
            "XL" => Ok(Self::ExtraLarge),
            _ => Err(ParseTaskSizeError(value.to_owned())),
        }
    }
}
