//! Given steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskwright::task::{domain::Task, services::TransitionTaskRequest};

#[given(r#"a new task named "{name}""#)]
fn new_task(world: &mut TaskWorkflowWorld, name: String) -> Result<(), eyre::Report> {
    world.pending_task = Some(Task::new(name)?);
    Ok(())
}

#[given("the task deadline is {days:u32} days ago")]
fn deadline_days_ago(world: &mut TaskWorkflowWorld, days: u32) -> Result<(), eyre::Report> {
    let task = world
        .pending_task
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending task in scenario world"))?;
    let deadline = world.today - chrono::Duration::days(i64::from(days));
    world.pending_task = Some(task.with_deadline(deadline));
    Ok(())
}

#[given(r#"a stored task named "{name}""#)]
fn stored_task(world: &mut TaskWorkflowWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(Task::new(name)?))
        .wrap_err("create task for scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#"the task has an open child named "{name}""#)]
fn open_child(world: &mut TaskWorkflowWorld, name: String) -> Result<(), eyre::Report> {
    let parent_id = world.current()?.id();
    let child = Task::new(name)?.with_parent(parent_id);
    run_async(world.service.create(child)).wrap_err("create child task for scenario setup")?;
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_has_been_moved(world: &mut TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let request = TransitionTaskRequest::new(world.current()?.id(), status);
    let moved =
        run_async(world.service.transition(request)).wrap_err("move task in scenario setup")?;
    world.current_task = Some(moved);
    Ok(())
}

#[given(r#"the task has been resolved as "{resolution}" with comment "{comment}""#)]
fn task_has_been_resolved(
    world: &mut TaskWorkflowWorld,
    resolution: String,
    comment: String,
) -> Result<(), eyre::Report> {
    let request = TransitionTaskRequest::new(world.current()?.id(), "RESOLVED")
        .with_resolution(resolution)
        .with_resolution_comment(comment);
    let resolved =
        run_async(world.service.transition(request)).wrap_err("resolve task in scenario setup")?;
    world.current_task = Some(resolved);
    Ok(())
}
