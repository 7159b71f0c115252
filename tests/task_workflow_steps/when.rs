//! When steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use rstest_bdd_macros::when;
use taskwright::task::services::TransitionTaskRequest;

#[when("the task is created")]
fn create_task(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let task = world
        .pending_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending task in scenario world"))?;
    let result = run_async(world.service.create(task));
    world.record(result);
    Ok(())
}

#[when(r#"the task moves to "{status}""#)]
fn move_task(world: &mut TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let request = TransitionTaskRequest::new(world.current()?.id(), status);
    let result = run_async(world.service.transition(request));
    world.record(result);
    Ok(())
}

#[when(r#"the task is resolved as "{resolution}" with comment "{comment}""#)]
fn resolve_task(
    world: &mut TaskWorkflowWorld,
    resolution: String,
    comment: String,
) -> Result<(), eyre::Report> {
    let request = TransitionTaskRequest::new(world.current()?.id(), "RESOLVED")
        .with_resolution(resolution)
        .with_resolution_comment(comment);
    let result = run_async(world.service.transition(request));
    world.record(result);
    Ok(())
}

#[when(r#"the task is closed with resolution "{resolution}""#)]
fn close_task(world: &mut TaskWorkflowWorld, resolution: String) -> Result<(), eyre::Report> {
    let request =
        TransitionTaskRequest::new(world.current()?.id(), "CLOSED").with_resolution(resolution);
    let result = run_async(world.service.transition(request));
    world.record(result);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let task_id = world.current()?.id();
    world.last_result = Some(run_async(world.service.delete(task_id)));
    Ok(())
}
