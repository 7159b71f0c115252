//! Then steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use rstest_bdd_macros::then;
use taskwright::task::{
    domain::{ClosingRequirement, TaskResolution, TaskStatus, TaskValidationError},
    services::TaskLifecycleError,
};

fn validation_error(world: &TaskWorkflowWorld) -> Result<&TaskValidationError, eyre::Report> {
    match world.last_error()? {
        TaskLifecycleError::Validation(error) => Ok(error),
        other => Err(eyre::eyre!("expected a validation error, got {other:?}")),
    }
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let actual = world.current()?.status();
    eyre::ensure!(
        actual == Some(expected),
        "expected status {expected}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the task resolution is "{resolution}""#)]
fn task_resolution_is(world: &TaskWorkflowWorld, resolution: String) -> Result<(), eyre::Report> {
    let expected = TaskResolution::try_from(resolution.as_str())?;
    let actual = world.current()?.resolution();
    eyre::ensure!(
        actual == Some(expected),
        "expected resolution {expected}, found {actual:?}"
    );
    Ok(())
}

#[then("the operation fails with a past deadline error")]
fn fails_with_past_deadline(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let error = validation_error(world)?;
    eyre::ensure!(
        matches!(error, TaskValidationError::DeadlinePast { .. }),
        "expected DeadlinePast, got {error:?}"
    );
    Ok(())
}

#[then("the operation fails because the resolution is missing")]
fn fails_with_missing_resolution(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let error = validation_error(world)?;
    eyre::ensure!(
        matches!(
            error,
            TaskValidationError::ClosingIncomplete {
                requirement: ClosingRequirement::Resolution,
                ..
            }
        ),
        "expected missing resolution, got {error:?}"
    );
    Ok(())
}

#[then("the operation fails with an illegal transition error")]
fn fails_with_illegal_transition(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let error = validation_error(world)?;
    eyre::ensure!(
        matches!(error, TaskValidationError::IllegalTransition { .. }),
        "expected IllegalTransition, got {error:?}"
    );
    Ok(())
}

#[then("the operation fails because the status is deprecated")]
fn fails_with_deprecated_status(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let error = validation_error(world)?;
    eyre::ensure!(
        matches!(error, TaskValidationError::DeprecatedStatus { .. }),
        "expected DeprecatedStatus, got {error:?}"
    );
    Ok(())
}

#[then("the operation fails because the resolution is locked")]
fn fails_with_locked_resolution(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let error = validation_error(world)?;
    eyre::ensure!(
        matches!(
            error,
            TaskValidationError::ResolutionLockedUnlessResolving { .. }
        ),
        "expected ResolutionLockedUnlessResolving, got {error:?}"
    );
    Ok(())
}

#[then("the operation fails because the task hierarchy blocks it")]
fn fails_with_hierarchy_block(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let error = validation_error(world)?;
    eyre::ensure!(
        matches!(error, TaskValidationError::HierarchyBlocked { .. }),
        "expected HierarchyBlocked, got {error:?}"
    );
    Ok(())
}

#[then("the operation fails because the task is not closed")]
fn fails_with_not_closed(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let error = validation_error(world)?;
    eyre::ensure!(
        matches!(error, TaskValidationError::NotClosed { .. }),
        "expected NotClosed, got {error:?}"
    );
    Ok(())
}

#[then("the task no longer exists")]
fn task_no_longer_exists(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(world.last_result, Some(Ok(()))),
        "expected the deletion to succeed, got {:?}",
        world.last_result
    );
    let task_id = world.current()?.id();
    let found = run_async(world.service.find_by_id(task_id))?;
    eyre::ensure!(found.is_none(), "task {task_id} is still stored");
    Ok(())
}
