//! In-memory integration tests for task lifecycle workflows.

use super::helpers::{TestService, named, resolve_request, service};
use chrono::NaiveDate;
use rstest::rstest;
use taskwright::task::{
    domain::{HierarchyViolation, StatusGraph, TaskResolution, TaskStatus, TaskValidationError},
    services::{TaskLifecycleError, TransitionTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_runs_full_lifecycle(service: TestService) -> eyre::Result<()> {
    let far_future =
        NaiveDate::from_ymd_opt(2999, 12, 31).ok_or_else(|| eyre::eyre!("invalid date"))?;
    let task = service
        .create(named("Ship release").with_deadline(far_future))
        .await?;

    for status in ["ASSIGNED", "IN_PROGRESS", "PAUSED", "REOPENED", "NEW"] {
        let moved = service
            .transition(TransitionTaskRequest::new(task.id(), status))
            .await?;
        eyre::ensure!(moved.status().map(TaskStatus::as_str) == Some(status));
    }

    service.transition(resolve_request(&task)).await?;
    service
        .transition(TransitionTaskRequest::new(task.id(), "VERIFIED"))
        .await?;
    let closed = service
        .transition(TransitionTaskRequest::new(task.id(), "CLOSED"))
        .await?;

    eyre::ensure!(closed.status() == Some(TaskStatus::Closed));
    eyre::ensure!(closed.resolution() == Some(TaskResolution::Fixed));
    eyre::ensure!(
        service.selectable_statuses(task.id()).await?
            == StatusGraph::selectable_transitions(Some(TaskStatus::Closed))
    );

    service.delete(task.id()).await?;
    eyre::ensure!(service.find_by_id(task.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolving_child_unblocks_parent(service: TestService) -> eyre::Result<()> {
    let parent = service.create(named("Quarterly report")).await?;
    let child = service
        .create(named("Collect figures").with_parent(parent.id()))
        .await?;

    let blocked = service.transition(resolve_request(&parent)).await;
    eyre::ensure!(
        matches!(
            blocked,
            Err(TaskLifecycleError::Validation(
                TaskValidationError::HierarchyBlocked {
                    reason: HierarchyViolation::UnclosedChildren,
                    ..
                }
            ))
        ),
        "expected the parent to be blocked, got {blocked:?}"
    );

    service.transition(resolve_request(&child)).await?;
    let resolved = service.transition(resolve_request(&parent)).await?;
    eyre::ensure!(resolved.is_closed());

    let children = service.find_children(parent.id()).await?;
    eyre::ensure!(children.iter().all(|task| task.is_closed()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopened_parent_accepts_new_children(service: TestService) -> eyre::Result<()> {
    let parent = service.create(named("Onboarding")).await?;
    service.transition(resolve_request(&parent)).await?;

    let rejected = service
        .create(named("Order laptop").with_parent(parent.id()))
        .await;
    eyre::ensure!(rejected.is_err(), "closed parent must reject children");

    service
        .transition(TransitionTaskRequest::new(parent.id(), "REOPENED"))
        .await?;
    let child = service
        .create(named("Order laptop").with_parent(parent.id()))
        .await?;
    eyre::ensure!(child.parent_id() == Some(parent.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn past_deadline_is_rejected_on_create_and_update(service: TestService) -> eyre::Result<()> {
    let long_ago =
        NaiveDate::from_ymd_opt(2000, 1, 1).ok_or_else(|| eyre::eyre!("invalid date"))?;

    let rejected = service
        .create(named("Renew licence").with_deadline(long_ago))
        .await;
    eyre::ensure!(
        matches!(
            rejected,
            Err(TaskLifecycleError::Validation(
                TaskValidationError::DeadlinePast { .. }
            ))
        ),
        "expected DeadlinePast, got {rejected:?}"
    );

    let task = service.create(named("Renew licence")).await?;
    let with_old_deadline = task.with_deadline(long_ago);
    let result = service.update(with_old_deadline).await;
    eyre::ensure!(result.is_err(), "a new past deadline is rejected on update");
    Ok(())
}
