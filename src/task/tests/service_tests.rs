//! Service orchestration tests for the task workflow: creation under the
//! cap, history-recording updates, and cascading deletion.

use std::sync::Arc;

use crate::history::{adapters::memory::InMemoryHistoryRepository, services::HistoryService};
use crate::identity::{Caller, UserId};
use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectId},
    services::{CreateProjectRequest, ProjectService},
};
use crate::storage::InMemoryStore;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PROJECT_TASK_CAP, TaskDomainError, TaskId, TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskService, TaskWorkflowError, UpdateTaskRequest},
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

struct Harness {
    projects: ProjectService<InMemoryProjectRepository>,
    tasks: TaskService<InMemoryTaskRepository, DefaultClock>,
    history: HistoryService<InMemoryHistoryRepository>,
}

#[fixture]
fn harness() -> Harness {
    let store = InMemoryStore::new();
    Harness {
        projects: ProjectService::new(Arc::new(InMemoryProjectRepository::new(store.clone()))),
        tasks: TaskService::new(
            Arc::new(InMemoryTaskRepository::new(store.clone())),
            Arc::new(DefaultClock),
        ),
        history: HistoryService::new(Arc::new(InMemoryHistoryRepository::new(store))),
    }
}

#[fixture]
fn caller() -> Caller {
    Caller::new(UserId::new(7), "developer")
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
async fn create_parses_labels_and_assigns_an_id(harness: Harness) {
    let project = create_project(&harness, "Alpha").await;

    let task = harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("Write brief", due_date(), "In_Progress", "HIGH")
                .with_description("One page"),
        )
        .await
        .expect("task creation should succeed");

    assert_eq!(task.id(), TaskId::new(1));
    assert_eq!(task.project_id(), project.id());
    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.description(), Some("One page"));
    assert_eq!(task.due_date(), Some(due_date()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_status_label(harness: Harness) {
    let project = create_project(&harness, "Alpha").await;

    let result = harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("Write brief", due_date(), "blocked", "low"),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskWorkflowError::Domain(TaskDomainError::UnknownStatus(
            label
        ))) if label == "blocked"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_priority_label(harness: Harness) {
    let project = create_project(&harness, "Alpha").await;

    let result = harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("Write brief", due_date(), "pending", "critical"),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskWorkflowError::Domain(TaskDomainError::UnknownPriority(
            label
        ))) if label == "critical"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_under_missing_project_is_project_not_found(harness: Harness) {
    let result = harness
        .tasks
        .create(
            ProjectId::new(77),
            CreateTaskRequest::new("Orphan", due_date(), "pending", "low"),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskWorkflowError::ProjectNotFound(id)) if id == ProjectId::new(77)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn twentieth_task_is_accepted_and_twenty_first_refused(harness: Harness) {
    let project = create_project(&harness, "Crowded").await;
    for index in 1..PROJECT_TASK_CAP {
        harness
            .tasks
            .create(
                project.id(),
                CreateTaskRequest::new(format!("Task {index}"), due_date(), "pending", "low"),
            )
            .await
            .expect("creation below the cap should succeed");
    }

    harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("Task at the cap", due_date(), "pending", "low"),
        )
        .await
        .expect("the task reaching the cap should still be accepted");

    let result = harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("One too many", due_date(), "pending", "low"),
        )
        .await;

    assert!(matches!(result, Err(TaskWorkflowError::CapExceeded(_))));
    let listed = harness
        .tasks
        .list_by_project(project.id())
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), PROJECT_TASK_CAP);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_project_on_missing_project_is_an_error(harness: Harness) {
    let result = harness.tasks.list_by_project(ProjectId::new(5)).await;

    assert!(matches!(
        result,
        Err(TaskWorkflowError::ProjectNotFound(id)) if id == ProjectId::new(5)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_records_one_history_row_per_changed_field(harness: Harness, caller: Caller) {
    let project = create_project(&harness, "Alpha").await;
    let task = harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("Write brief", due_date(), "pending", "medium"),
        )
        .await
        .expect("task creation should succeed");

    let updated = harness
        .tasks
        .update(
            project.id(),
            task.id(),
            UpdateTaskRequest::new("Write the brief", due_date(), "pending"),
            &caller,
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Write the brief");
    let rows = harness
        .history
        .list_by_task(task.id())
        .await
        .expect("history lookup should succeed");
    assert_eq!(rows.len(), 1);
    let row = rows.first().expect("one history row");
    assert_eq!(row.field_name(), "Title");
    assert_eq!(row.old_value(), "Write brief");
    assert_eq!(row.new_value(), "Write the brief");
    assert_eq!(row.changed_by(), caller.user_id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_no_changes_records_nothing(harness: Harness, caller: Caller) {
    let project = create_project(&harness, "Alpha").await;
    let task = harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("Write brief", due_date(), "pending", "medium"),
        )
        .await
        .expect("task creation should succeed");

    harness
        .tasks
        .update(
            project.id(),
            task.id(),
            UpdateTaskRequest::new("Write brief", due_date(), "pending"),
            &caller,
        )
        .await
        .expect("no-op update should succeed");

    let rows = harness
        .history
        .list_by_task(task.id())
        .await
        .expect("history lookup should succeed");
    assert!(rows.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_only_honours_task_ids_under_their_owning_project(harness: Harness, caller: Caller) {
    let owner = create_project(&harness, "Owner").await;
    let other = create_project(&harness, "Other").await;
    let task = harness
        .tasks
        .create(
            owner.id(),
            CreateTaskRequest::new("Scoped", due_date(), "pending", "low"),
        )
        .await
        .expect("task creation should succeed");

    let result = harness
        .tasks
        .update(
            other.id(),
            task.id(),
            UpdateTaskRequest::new("Hijacked", due_date(), "done"),
            &caller,
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskWorkflowError::NotFound(id)) if id == task.id()
    ));
    // The task under its real project is untouched.
    let listed = harness
        .tasks
        .list_by_project(owner.id())
        .await
        .expect("listing should succeed");
    assert_eq!(
        listed.first().map(crate::task::domain::Task::title),
        Some("Scoped")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_under_missing_project_is_project_not_found(harness: Harness, caller: Caller) {
    let result = harness
        .tasks
        .update(
            ProjectId::new(88),
            TaskId::new(1),
            UpdateTaskRequest::new("Ghost", due_date(), "pending"),
            &caller,
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskWorkflowError::ProjectNotFound(id)) if id == ProjectId::new(88)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task_and_its_history(harness: Harness, caller: Caller) {
    let project = create_project(&harness, "Alpha").await;
    let task = harness
        .tasks
        .create(
            project.id(),
            CreateTaskRequest::new("Short-lived", due_date(), "pending", "low"),
        )
        .await
        .expect("task creation should succeed");
    harness
        .tasks
        .update(
            project.id(),
            task.id(),
            UpdateTaskRequest::new("Short-lived", due_date(), "done"),
            &caller,
        )
        .await
        .expect("update should succeed");

    harness
        .tasks
        .delete(task.id())
        .await
        .expect("deletion should succeed");

    let listed = harness
        .tasks
        .list_by_project(project.id())
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
    let rows = harness
        .history
        .list_by_task(task.id())
        .await
        .expect("history lookup should succeed");
    assert!(rows.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_is_not_found(harness: Harness) {
    let result = harness.tasks.delete(TaskId::new(41)).await;

    assert!(matches!(
        result,
        Err(TaskWorkflowError::NotFound(id)) if id == TaskId::new(41)
    ));
}
