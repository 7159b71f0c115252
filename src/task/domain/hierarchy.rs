//! Hierarchy facts gathered by the caller before validation.
//!
//! The validator never looks at storage. Instead it lists the questions it
//! needs answered ([`HierarchyQuestion::ALL`]) and the caller hands back the
//! answers as a [`HierarchyFacts`] value.

use super::TaskValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

/// Operation being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// A new task is stored.
    Create,
    /// An existing task is changed.
    Update,
    /// An existing task is removed.
    Delete,
}

impl TaskAction {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question about the stored hierarchy around a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyQuestion {
    /// Does the task have any children?
    HasChildren,
    /// Does the task have children that are not closed?
    HasNotYetClosedChildren,
    /// Is the task's parent closed?
    IsParentClosed,
}

impl HierarchyQuestion {
    /// Every question, in the order callers are expected to answer them.
    pub const ALL: [Self; 3] = [
        Self::HasChildren,
        Self::HasNotYetClosedChildren,
        Self::IsParentClosed,
    ];

    /// Returns the identifier used by hosts that exchange answers as a map.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HasChildren => "hasChildren",
            Self::HasNotYetClosedChildren => "hasNotYetClosedChildren",
            Self::IsParentClosed => "isParentClosed(parentId)",
        }
    }

    /// Returns the key under which legacy hosts store the answer.
    ///
    /// The parent question is asked with an argument but answered under its
    /// bare name.
    #[must_use]
    pub const fn answer_key(self) -> &'static str {
        match self {
            Self::IsParentClosed => "isParentClosed",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for HierarchyQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers to every [`HierarchyQuestion`].
///
/// Unanswered questions default to `false`.
///
/// ```
/// use taskwright::task::domain::{HierarchyFacts, HierarchyQuestion};
///
/// let facts = HierarchyFacts::default().answer(HierarchyQuestion::HasChildren, true);
/// assert!(facts.get(HierarchyQuestion::HasChildren));
/// assert!(!facts.get(HierarchyQuestion::IsParentClosed));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyFacts {
    /// The task has at least one child.
    pub has_children: bool,
    /// At least one child of the task is not closed.
    pub has_not_yet_closed_children: bool,
    /// The task's parent is closed.
    pub is_parent_closed: bool,
}

impl HierarchyFacts {
    /// Records the answer to one question.
    #[must_use]
    pub const fn answer(mut self, question: HierarchyQuestion, value: bool) -> Self {
        match question {
            HierarchyQuestion::HasChildren => self.has_children = value,
            HierarchyQuestion::HasNotYetClosedChildren => {
                self.has_not_yet_closed_children = value;
            }
            HierarchyQuestion::IsParentClosed => self.is_parent_closed = value,
        }
        self
    }

    /// Returns the recorded answer to one question.
    #[must_use]
    pub const fn get(&self, question: HierarchyQuestion) -> bool {
        match question {
            HierarchyQuestion::HasChildren => self.has_children,
            HierarchyQuestion::HasNotYetClosedChildren => self.has_not_yet_closed_children,
            HierarchyQuestion::IsParentClosed => self.is_parent_closed,
        }
    }

    /// Builds facts from a string-keyed answer map.
    ///
    /// Answers are read under each [`HierarchyQuestion::answer_key`] and must
    /// be `"true"` or `"false"` (surrounding whitespace and letter case are
    /// ignored). A question without an answer is taken as `false`, so hosts
    /// only need to supply the facts the action depends on.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use taskwright::task::domain::HierarchyFacts;
    ///
    /// let answers = HashMap::from([("hasChildren".to_owned(), "true".to_owned())]);
    /// let facts = HierarchyFacts::from_answers(&answers).expect("valid answers");
    /// assert!(facts.has_children);
    /// assert!(!facts.is_parent_closed);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidArgument`] when an answer is
    /// present but is not a boolean.
    pub fn from_answers<S: BuildHasher>(
        answers: &HashMap<String, String, S>,
    ) -> Result<Self, TaskValidationError> {
        HierarchyQuestion::ALL
            .into_iter()
            .try_fold(Self::default(), |facts, question| {
                let key = question.answer_key();
                let Some(raw) = answers.get(key) else {
                    return Ok(facts);
                };
                let value =
                    parse_answer(raw).ok_or_else(|| TaskValidationError::InvalidArgument {
                        field: key.to_owned(),
                        value: Some(raw.clone()),
                    })?;
                Ok(facts.answer(question, value))
            })
    }
}

fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
