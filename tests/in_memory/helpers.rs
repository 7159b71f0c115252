//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskwright::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskResolution, TaskStatus},
    services::{TaskLifecycleService, TransitionTaskRequest},
};

/// Service type backed by the in-memory repository.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a lifecycle service over a fresh repository.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds a task with the given name.
///
/// # Panics
///
/// Panics if `name` is blank.
pub fn named(name: &str) -> Task {
    Task::new(name).expect("valid task name")
}

/// Builds a closed task with complete closing information.
pub fn resolved(name: &str) -> Task {
    named(name)
        .with_status(TaskStatus::Resolved)
        .with_resolution(TaskResolution::Fixed)
        .with_resolution_comment("done")
}

/// Builds a request resolving a task as fixed.
pub fn resolve_request(task: &Task) -> TransitionTaskRequest {
    TransitionTaskRequest::new(task.id(), "RESOLVED")
        .with_resolution("FIXED")
        .with_resolution_comment("done")
}
