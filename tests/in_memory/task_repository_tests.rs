//! In-memory integration tests for task storage and hierarchy lookup.

use super::helpers::{named, repo, resolved};
use rstest::rstest;
use taskwright::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_and_find_round_trip(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = named("Upgrade toolchain").with_status(TaskStatus::New);
    repo.store(&task).await?;

    let fetched = repo.find_by_id(task.id()).await?;
    eyre::ensure!(fetched.as_ref() == Some(&task), "stored task should be returned");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifier(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = named("Upgrade toolchain");
    repo.store(&task).await?;

    let result = repo.store(&task).await;
    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()),
        "expected DuplicateTask, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_require_existing_task(repo: InMemoryTaskRepository) {
    let task = named("Never stored");

    let update = repo.update(&task).await;
    let delete = repo.delete(task.id()).await;

    assert!(matches!(update, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(delete, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_children_returns_direct_children_only(
    repo: InMemoryTaskRepository,
) -> eyre::Result<()> {
    let parent = named("Epic");
    let child = named("Story").with_parent(parent.id());
    let grandchild = named("Sub-task").with_parent(child.id());
    for task in [&parent, &child, &grandchild] {
        repo.store(task).await?;
    }

    let children = repo.find_children(parent.id()).await?;
    eyre::ensure!(children == vec![child], "only the direct child is listed");
    let none = repo.find_children(TaskId::new()).await?;
    eyre::ensure!(none.is_empty(), "unknown parent has no children");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_moves_child_between_parents(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let first = named("First epic");
    let second = named("Second epic");
    let child = named("Story").with_parent(first.id());
    for task in [&first, &second, &child] {
        repo.store(task).await?;
    }

    let moved = child.clone().with_parent(second.id());
    repo.update(&moved).await?;

    eyre::ensure!(repo.find_children(first.id()).await?.is_empty());
    eyre::ensure!(repo.find_children(second.id()).await? == vec![moved]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_task_from_parent_index(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let parent = named("Epic");
    let child = resolved("Story").with_parent(parent.id());
    repo.store(&parent).await?;
    repo.store(&child).await?;

    repo.delete(child.id()).await?;

    eyre::ensure!(repo.find_by_id(child.id()).await?.is_none());
    eyre::ensure!(repo.find_children(parent.id()).await?.is_empty());
    Ok(())
}
