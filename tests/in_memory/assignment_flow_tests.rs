//! Task and user registries wired over snapshot-backed repositories.

use std::sync::Arc;

use chrono::NaiveDate;
use rstest::rstest;
use task_tracker::notification::{adapters::RecordingNotificationSink, domain::NotificationKind};
use task_tracker::persistence::{SnapshotStore, adapters::InMemorySnapshotStore};
use task_tracker::task::{
    adapters::snapshot::SnapshotTaskRepository,
    domain::{TaskStatus, TaskUpdate},
    services::{CreateTaskRequest, TaskRegistryError, TaskRegistryService},
};
use task_tracker::user::{
    adapters::snapshot::SnapshotUserRepository,
    domain::UserStatus,
    services::{RegisterUserRequest, UserRegistryService},
};

use super::helpers::{FixedClock, clock};

fn request(description: &str, staff: &str) -> Result<CreateTaskRequest, eyre::Report> {
    let assigned = NaiveDate::from_ymd_opt(2025, 3, 14).ok_or_else(|| eyre::eyre!("date"))?;
    let deadline = NaiveDate::from_ymd_opt(2025, 3, 21).ok_or_else(|| eyre::eyre!("date"))?;
    Ok(CreateTaskRequest::new(description, staff)
        .with_area("Building A")
        .with_date_assigned(assigned)
        .with_deadline(deadline))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_follow_the_calendar(clock: FixedClock) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let repository = SnapshotTaskRepository::open(Arc::clone(&store)).await?;
    let service = TaskRegistryService::new(
        Arc::new(repository),
        Arc::new(RecordingNotificationSink::new()),
        Arc::new(clock.clone()),
    );

    let mut ids = Vec::new();
    for description in ["Fix lights", "Paint wall", "Mop floor"] {
        ids.push(service.create_task(request(description, "ann@x.com")?).await?.id().to_string());
    }
    assert_eq!(ids, ["20250314-0001", "20250314-0002", "20250314-0003"]);

    clock.set_day(2025, 3, 15);
    let next_day = service.create_task(request("Water plants", "bob@x.com")?).await?;
    assert_eq!(next_day.id().to_string(), "20250315-0001");

    let saved = store.load_tasks().await?;
    assert_eq!(saved.len(), 4);
    assert_eq!(saved, service.list_all_tasks().await?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_touches_only_status_and_timestamp(
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let sink = RecordingNotificationSink::new();
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let service = TaskRegistryService::new(
        Arc::new(SnapshotTaskRepository::open(store).await?),
        Arc::new(sink.clone()),
        Arc::new(clock.clone()),
    );
    let created = service.create_task(request("Fix lights", "ann@x.com")?).await?;

    clock.set_day(2025, 3, 16);
    let update = TaskUpdate::new().with_status(TaskStatus::Completed);
    let updated = service.update_task(&created.id().to_string(), update).await?;

    assert_eq!(updated.status(), TaskStatus::Completed);
    assert!(updated.last_update() >= created.last_update());
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.description(), created.description());
    assert_eq!(updated.area(), created.area());
    assert_eq!(updated.deadline(), created.deadline());
    assert_eq!(updated.completed(), created.completed());

    let kinds: Vec<_> = sink.delivered().iter().map(|event| event.kind()).collect();
    assert_eq!(
        kinds,
        [
            NotificationKind::TaskCreated,
            NotificationKind::TaskUpdated,
            NotificationKind::TaskCompleted,
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_update_changes_nothing(clock: FixedClock) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let service = TaskRegistryService::new(
        Arc::new(SnapshotTaskRepository::open(Arc::clone(&store)).await?),
        Arc::new(RecordingNotificationSink::new()),
        Arc::new(clock),
    );
    service.create_task(request("Fix lights", "ann@x.com")?).await?;
    let before = service.list_all_tasks().await?;

    let result = service
        .update_task("nonexistent", TaskUpdate::new().with_status(TaskStatus::Completed))
        .await;

    assert!(matches!(result, Err(TaskRegistryError::NotFound(_))));
    assert_eq!(service.list_all_tasks().await?, before);
    assert_eq!(store.load_tasks().await?, before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failing_notifications_never_fail_creation(clock: FixedClock) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let service = TaskRegistryService::new(
        Arc::new(SnapshotTaskRepository::open(store).await?),
        Arc::new(RecordingNotificationSink::failing()),
        Arc::new(clock),
    );

    let created = service.create_task(request("Fix lights", "ann@x.com")?).await?;

    assert_eq!(service.find_task(&created.id().to_string()).await?, created);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lists_are_scoped_to_the_assignee(clock: FixedClock) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let service = TaskRegistryService::new(
        Arc::new(SnapshotTaskRepository::open(store).await?),
        Arc::new(RecordingNotificationSink::new()),
        Arc::new(clock),
    );
    let first = service.create_task(request("Fix lights", "ann@x.com")?).await?;
    service.create_task(request("Paint wall", "bob@x.com")?).await?;
    let third = service.create_task(request("Mop floor", "ann@x.com")?).await?;

    assert_eq!(service.list_tasks_for_user("ann@x.com").await?, [first, third]);
    assert!(service.list_tasks_for_user("nobody@x.com").await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn approving_a_user_changes_only_the_status(clock: FixedClock) -> Result<(), eyre::Report> {
    let sink = RecordingNotificationSink::new();
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let service = UserRegistryService::new(
        Arc::new(SnapshotUserRepository::open(Arc::clone(&store)).await?),
        Arc::new(sink.clone()),
        Arc::new(clock),
    );

    let user = service
        .register_user(RegisterUserRequest::new("Ann", "ann@x.com", "IT"))
        .await?;
    assert_eq!(user.status(), UserStatus::Pending);
    assert!(!user.is_online());

    let id = user.id().to_string();
    let approved = service.set_user_status(&id, UserStatus::Approved).await?;
    let again = service.set_user_status(&id, UserStatus::Approved).await?;

    assert_eq!(approved.status(), UserStatus::Approved);
    assert_eq!(approved.name(), user.name());
    assert_eq!(approved.email(), user.email());
    assert_eq!(again.status(), UserStatus::Approved);
    assert_eq!(service.list_users().await?.len(), 1);
    assert_eq!(store.load_users().await?, [approved]);

    let approvals = sink
        .delivered()
        .iter()
        .filter(|event| event.kind() == NotificationKind::UserApproved)
        .count();
    assert_eq!(approvals, 1);
    Ok(())
}
