//! Domain model for the task workflow.
//!
//! The domain holds the status graph, the task record, and the hierarchy facts
//! the validator consumes. Nothing here touches storage or reads the clock.

mod attributes;
mod error;
mod graph;
mod hierarchy;
mod ids;
mod status;
mod task;

pub use attributes::{Importance, TaskResolution, TaskSize};
pub use error::{
    ClosingRequirement, HierarchyViolation, ParseImportanceError, ParseTaskResolutionError,
    ParseTaskSizeError, ParseTaskStatusError, ResolutionField, TaskDomainError,
    TaskValidationError,
};
pub use graph::StatusGraph;
pub use hierarchy::{HierarchyFacts, HierarchyQuestion, TaskAction};
pub use ids::{TaskId, UserId};
pub use status::TaskStatus;
pub use task::Task;
