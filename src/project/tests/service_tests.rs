//! Service orchestration tests for project management and the deletion
//! guard.

use std::sync::Arc;

use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectDomainError, ProjectId},
    services::{CreateProjectRequest, ProjectManagementError, ProjectService},
};
use crate::storage::InMemoryStore;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{CreateTaskRequest, TaskService},
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

struct Harness {
    projects: ProjectService<InMemoryProjectRepository>,
    tasks: TaskService<InMemoryTaskRepository, DefaultClock>,
}

#[fixture]
fn harness() -> Harness {
    let store = InMemoryStore::new();
    Harness {
        projects: ProjectService::new(Arc::new(InMemoryProjectRepository::new(store.clone()))),
        tasks: TaskService::new(
            Arc::new(InMemoryTaskRepository::new(store)),
            Arc::new(DefaultClock),
        ),
    }
}

fn due_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

async fn create_project(harness: &Harness, name: &str) -> Project {
    harness
        .projects
        .create(CreateProjectRequest::new(name))
        .await
        .expect("project creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_returns_project_with_tasks(harness: Harness) {
    let created = harness
        .projects
        .create(CreateProjectRequest::new("Website Relaunch").with_description("Q4 marketing"))
        .await
        .expect("project creation should succeed");

    let task = harness
        .tasks
        .create(
            created.id(),
            CreateTaskRequest::new("Draft landing page", due_date(), "pending", "high"),
        )
        .await
        .expect("task creation should succeed");

    let loaded = harness
        .projects
        .get(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(loaded.project, created);
    assert_eq!(loaded.project.description(), Some("Q4 marketing"));
    assert_eq!(loaded.tasks, vec![task]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_missing_project_is_not_found(harness: Harness) {
    let result = harness.projects.get(ProjectId::new(404)).await;

    assert!(matches!(
        result,
        Err(ProjectManagementError::NotFound(id)) if id == ProjectId::new(404)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_name(harness: Harness) {
    let result = harness
        .projects
        .create(CreateProjectRequest::new("   "))
        .await;

    assert!(matches!(
        result,
        Err(ProjectManagementError::Domain(
            ProjectDomainError::EmptyName
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_every_project(harness: Harness) {
    let first = create_project(&harness, "Alpha").await;
    let second = create_project(&harness, "Beta").await;

    let listed = harness.projects.list().await.expect("list should succeed");

    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_name_and_description(harness: Harness) {
    let created = create_project(&harness, "Alpha").await;

    let updated = harness
        .projects
        .update(
            created.id(),
            CreateProjectRequest::new("Alpha v2").with_description("Rescoped"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.name().as_str(), "Alpha v2");
    assert_eq!(updated.description(), Some("Rescoped"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_project_is_not_found(harness: Harness) {
    let result = harness
        .projects
        .update(ProjectId::new(9), CreateProjectRequest::new("Ghost"))
        .await;

    assert!(matches!(
        result,
        Err(ProjectManagementError::NotFound(id)) if id == ProjectId::new(9)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_for_project_without_tasks(harness: Harness) {
    let created = create_project(&harness, "Empty").await;

    harness
        .projects
        .delete(created.id())
        .await
        .expect("deletion should succeed");

    let result = harness.projects.get(created.id()).await;
    assert!(matches!(result, Err(ProjectManagementError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_when_every_task_is_done(harness: Harness) {
    let created = create_project(&harness, "Wrapped up").await;
    harness
        .tasks
        .create(
            created.id(),
            CreateTaskRequest::new("Ship it", due_date(), "done", "medium"),
        )
        .await
        .expect("task creation should succeed");

    harness
        .projects
        .delete(created.id())
        .await
        .expect("deletion should succeed");

    let result = harness.projects.get(created.id()).await;
    assert!(matches!(result, Err(ProjectManagementError::NotFound(_))));
}

#[rstest]
#[case("pending")]
#[case("in_progress")]
#[tokio::test(flavor = "multi_thread")]
async fn delete_refuses_while_any_task_is_unfinished(harness: Harness, #[case] status: &str) {
    let created = create_project(&harness, "Busy").await;
    harness
        .tasks
        .create(
            created.id(),
            CreateTaskRequest::new("Finished", due_date(), "done", "low"),
        )
        .await
        .expect("task creation should succeed");
    harness
        .tasks
        .create(
            created.id(),
            CreateTaskRequest::new("Unfinished", due_date(), status, "low"),
        )
        .await
        .expect("task creation should succeed");

    let result = harness.projects.delete(created.id()).await;

    assert!(matches!(
        result,
        Err(ProjectManagementError::PendingTasks(id)) if id == created.id()
    ));
    // The refusal must leave the project and its tasks untouched.
    let loaded = harness
        .projects
        .get(created.id())
        .await
        .expect("project should survive the refused deletion");
    assert_eq!(loaded.tasks.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_project_is_not_found(harness: Harness) {
    let result = harness.projects.delete(ProjectId::new(12)).await;

    assert!(matches!(
        result,
        Err(ProjectManagementError::NotFound(id)) if id == ProjectId::new(12)
    ));
}
