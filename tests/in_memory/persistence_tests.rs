//! Snapshot round trips through a data directory.

use std::sync::Arc;

use bytes::Bytes;
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::json;
use task_tracker::notification::adapters::RecordingNotificationSink;
use task_tracker::persistence::{
    SnapshotError, SnapshotStore,
    adapters::{DirectorySnapshotStore, InMemorySnapshotStore},
};
use task_tracker::settings::services::CustomizationService;
use task_tracker::task::{
    adapters::snapshot::SnapshotTaskRepository,
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskRegistryService},
};
use task_tracker::upload::{adapters::DirectoryImageStore, ports::ImageStore};
use task_tracker::user::{
    adapters::snapshot::SnapshotUserRepository,
    services::{RegisterUserRequest, UserRegistryService},
};

use super::helpers::{FixedClock, ScratchDir, clock, scratch};

async fn seed_tasks(
    store: Arc<dyn SnapshotStore>,
    clock: FixedClock,
) -> Result<Vec<Task>, eyre::Report> {
    let service = TaskRegistryService::new(
        Arc::new(SnapshotTaskRepository::open(store).await?),
        Arc::new(RecordingNotificationSink::new()),
        Arc::new(clock),
    );
    let deadline = NaiveDate::from_ymd_opt(2025, 3, 21).ok_or_else(|| eyre::eyre!("date"))?;
    for (description, staff) in [("Fix lights", "ann@x.com"), ("Paint wall", "bob@x.com")] {
        let request = CreateTaskRequest::new(description, staff)
            .with_date_assigned(deadline)
            .with_deadline(deadline);
        service.create_task(request).await?;
    }
    Ok(service.list_all_tasks().await?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_survive_reopening_the_directory(
    scratch: ScratchDir,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(DirectorySnapshotStore::open(scratch.path())?);
    let seeded = seed_tasks(store, clock).await?;

    let reopened: Arc<dyn SnapshotStore> = Arc::new(DirectorySnapshotStore::open(scratch.path())?);
    let repository = SnapshotTaskRepository::open(Arc::clone(&reopened)).await?;

    assert_eq!(repository.list_all().await?, seeded);
    assert!(scratch.path().join("task-tracker-tasks.json").is_file());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_then_load_preserves_order_and_values(
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let mut tasks = seed_tasks(Arc::clone(&store), clock).await?;
    tasks.reverse();

    store.save_tasks(&tasks).await?;

    assert_eq!(store.load_tasks().await?, tasks);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_survive_reopening_the_directory(
    scratch: ScratchDir,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(DirectorySnapshotStore::open(scratch.path())?);
    let service = UserRegistryService::new(
        Arc::new(SnapshotUserRepository::open(store).await?),
        Arc::new(RecordingNotificationSink::new()),
        Arc::new(clock),
    );
    let ann = service
        .register_user(RegisterUserRequest::new("Ann", "ann@x.com", "IT"))
        .await?;

    let reopened = DirectorySnapshotStore::open(scratch.path())?;

    assert_eq!(reopened.load_users().await?, [ann]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn settings_survive_reopening_the_directory(
    scratch: ScratchDir,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let clock = Arc::new(clock);
    let store: Arc<dyn SnapshotStore> = Arc::new(DirectorySnapshotStore::open(scratch.path())?);
    let service = CustomizationService::new(store, Arc::clone(&clock));
    let edited = service
        .apply_setting("content.welcomeTitle", json!("Welcome back"))
        .await?;

    let reopened: Arc<dyn SnapshotStore> = Arc::new(DirectorySnapshotStore::open(scratch.path())?);
    let restored = CustomizationService::new(reopened, clock)
        .current_settings()
        .await?;

    assert_eq!(restored, edited);
    assert_eq!(restored.content.welcome_title, "Welcome back");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_is_reported_on_open(scratch: ScratchDir) -> Result<(), eyre::Report> {
    let store: Arc<dyn SnapshotStore> = Arc::new(DirectorySnapshotStore::open(scratch.path())?);
    std::fs::write(scratch.path().join("task-tracker-tasks.json"), "{not json")?;

    let result = SnapshotTaskRepository::open(store).await;

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_surfaces_as_decode_error(
    scratch: ScratchDir,
) -> Result<(), eyre::Report> {
    let store = DirectorySnapshotStore::open(scratch.path())?;
    std::fs::write(scratch.path().join("task-tracker-users.json"), "[1, 2")?;

    let result = store.load_users().await;

    assert!(matches!(result, Err(SnapshotError::Decode { .. })));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_image_store_writes_objects(scratch: ScratchDir) -> Result<(), eyre::Report> {
    let uploads = scratch.path().join("uploads");
    let store = DirectoryImageStore::open(&uploads, "/uploaded/")?;

    let url = store
        .put("logo.png", "image/png", Bytes::from_static(b"\x89PNG"))
        .await?;

    assert_eq!(url, "/uploaded/logo.png");
    assert_eq!(std::fs::read(uploads.join("logo.png"))?, b"\x89PNG");
    Ok(())
}
