//! Behavioural integration tests for the in-memory adapters.
//!
//! These tests exercise the in-memory repositories in realistic
//! higher-level flows, driving them through the services the way a
//! transport layer would: project and task lifecycle, the audit trail, and
//! the manager-only throughput report.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::float_cmp,
    reason = "Report averages are produced by a fixed rounding rule, so exact comparison is intended"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use mockable::DefaultClock;
use serde_json::json;
use tasktrail::comment::{adapters::memory::InMemoryCommentRepository, services::CommentService};
use tasktrail::history::{adapters::memory::InMemoryHistoryRepository, services::HistoryService};
use tasktrail::identity::{Caller, UserId};
use tasktrail::project::{
    adapters::memory::InMemoryProjectRepository,
    services::{CreateProjectRequest, ProjectManagementError, ProjectService},
};
use tasktrail::report::{adapters::RoleClaimPolicy, services::ReportService};
use tasktrail::storage::InMemoryStore;
use tasktrail::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{CreateTaskRequest, TaskService, UpdateTaskRequest},
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

struct Services {
    projects: ProjectService<InMemoryProjectRepository>,
    tasks: TaskService<InMemoryTaskRepository, DefaultClock>,
    comments: CommentService<InMemoryCommentRepository, DefaultClock>,
    history: HistoryService<InMemoryHistoryRepository>,
    reports: ReportService<InMemoryTaskRepository, RoleClaimPolicy, DefaultClock>,
}

/// Wires every service over one shared store, the way a composition root
/// would.
fn services() -> Services {
    let store = InMemoryStore::new();
    let task_repository = Arc::new(InMemoryTaskRepository::new(store.clone()));
    Services {
        projects: ProjectService::new(Arc::new(InMemoryProjectRepository::new(store.clone()))),
        tasks: TaskService::new(Arc::clone(&task_repository), Arc::new(DefaultClock)),
        comments: CommentService::new(
            Arc::new(InMemoryCommentRepository::new(store.clone())),
            Arc::new(DefaultClock),
        ),
        history: HistoryService::new(Arc::new(InMemoryHistoryRepository::new(store))),
        reports: ReportService::new(
            task_repository,
            Arc::new(RoleClaimPolicy::new()),
            Arc::new(DefaultClock),
            UserId::new(1),
        ),
    }
}

/// Walks a task from creation through completion and verifies the audit
/// trail reads back most recent change first with the correct old and new
/// values.
#[test]
fn task_lifecycle_builds_a_faithful_audit_trail() {
    let rt = test_runtime();
    let services = services();
    let caller = Caller::new(UserId::new(7), "developer");
    let due = Utc::now() + Duration::days(7);

    let project = rt
        .block_on(
            services
                .projects
                .create(CreateProjectRequest::new("Website Relaunch").with_description("Q4")),
        )
        .expect("project creation");

    let task = rt
        .block_on(services.tasks.create(
            project.id(),
            CreateTaskRequest::new("Draft landing page", due, "pending", "high"),
        ))
        .expect("task creation");

    // Start the work.
    rt.block_on(services.tasks.update(
        project.id(),
        task.id(),
        UpdateTaskRequest::new("Draft landing page", due, "in_progress"),
        &caller,
    ))
    .expect("first update");

    // Review note lands in the trail alongside the field changes.
    rt.block_on(
        services
            .comments
            .create(task.id(), "Copy approved by marketing", &caller),
    )
    .expect("comment creation");

    // Finish the work under a new title.
    rt.block_on(services.tasks.update(
        project.id(),
        task.id(),
        UpdateTaskRequest::new("Launch landing page", due, "done"),
        &caller,
    ))
    .expect("second update");

    let trail = rt
        .block_on(services.history.list_by_task(task.id()))
        .expect("history lookup");

    assert_eq!(trail.len(), 4);
    let field_names: Vec<&str> = trail.iter().map(|row| row.field_name()).collect();
    assert_eq!(field_names, vec!["Status", "Title", "Comment", "Status"]);

    let latest = trail.first().expect("latest row");
    assert_eq!(latest.old_value(), "in_progress");
    assert_eq!(latest.new_value(), "done");
    assert_eq!(latest.changed_by(), caller.user_id());

    let title_change = trail.get(1).expect("title row");
    assert_eq!(title_change.old_value(), "Draft landing page");
    assert_eq!(title_change.new_value(), "Launch landing page");

    let oldest = trail.last().expect("oldest row");
    assert_eq!(oldest.old_value(), "pending");
    assert_eq!(oldest.new_value(), "in_progress");
}

/// A project with unfinished work refuses deletion, then goes away cleanly
/// once every task is done.
#[test]
fn project_deletion_waits_for_the_last_open_task() {
    let rt = test_runtime();
    let services = services();
    let caller = Caller::new(UserId::new(7), "developer");
    let due = Utc::now() + Duration::days(3);

    let project = rt
        .block_on(services.projects.create(CreateProjectRequest::new("Sprint")))
        .expect("project creation");
    let task = rt
        .block_on(services.tasks.create(
            project.id(),
            CreateTaskRequest::new("Close the books", due, "in_progress", "medium"),
        ))
        .expect("task creation");

    let refused = rt.block_on(services.projects.delete(project.id()));
    assert!(matches!(
        refused,
        Err(ProjectManagementError::PendingTasks(id)) if id == project.id()
    ));

    rt.block_on(services.tasks.update(
        project.id(),
        task.id(),
        UpdateTaskRequest::new("Close the books", due, "done"),
        &caller,
    ))
    .expect("finishing update");

    rt.block_on(services.projects.delete(project.id()))
        .expect("deletion after completion");

    let gone = rt.block_on(services.projects.get(project.id()));
    assert!(matches!(gone, Err(ProjectManagementError::NotFound(_))));
    // The cascade took the audit trail with it.
    let trail = rt
        .block_on(services.history.list_by_task(task.id()))
        .expect("history lookup");
    assert!(trail.is_empty());
}

/// The manager-only report counts recently completed tasks per project and
/// serialises into the documented projection.
#[test]
fn manager_report_counts_recent_completions() {
    let rt = test_runtime();
    let services = services();
    let manager = Caller::new(UserId::new(2), "manager");

    let project = rt
        .block_on(services.projects.create(CreateProjectRequest::new("Ops")))
        .expect("project creation");
    for days_ago in [2_i64, 9, 25] {
        rt.block_on(services.tasks.create(
            project.id(),
            CreateTaskRequest::new(
                "Recently finished",
                Utc::now() - Duration::days(days_ago),
                "done",
                "low",
            ),
        ))
        .expect("task creation");
    }
    // Outside the window, never counted.
    rt.block_on(services.tasks.create(
        project.id(),
        CreateTaskRequest::new(
            "Ancient",
            Utc::now() - Duration::days(45),
            "done",
            "low",
        ),
    ))
    .expect("task creation");

    let report = rt
        .block_on(services.reports.performance(&manager))
        .expect("manager report");

    assert_eq!(report.len(), 1);
    let group = report.first().expect("one group");
    assert_eq!(group.completed_tasks, 3);
    assert_eq!(group.average_per_day, 0.1);

    let projected = serde_json::to_value(group).expect("report serialisation");
    assert_eq!(
        projected,
        json!({
            "project_id": project.id().value(),
            "owner": 1,
            "completed_tasks": 3,
            "average_per_day": 0.1,
        })
    );
}
