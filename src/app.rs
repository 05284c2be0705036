//! Wiring of configuration into running services.

use crate::config::TrackerConfig;
use crate::http::AppState;
use crate::notification::{
    adapters::{LogNotificationSink, QueuedNotificationSink},
    ports::NotificationSink,
};
use crate::persistence::{
    SnapshotError, SnapshotStore,
    adapters::{DirectorySnapshotStore, InMemorySnapshotStore},
};
use crate::settings::services::CustomizationService;
use crate::task::{
    adapters::snapshot::SnapshotTaskRepository, ports::{TaskRepository, TaskRepositoryError},
    services::TaskRegistryService,
};
use crate::upload::{
    adapters::{DirectoryImageStore, InMemoryImageStore},
    ports::{ImageStore, ImageStoreError},
    services::UploadService,
};
use crate::user::{
    adapters::snapshot::SnapshotUserRepository, ports::{UserRepository, UserRepositoryError},
    services::UserRegistryService,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The snapshot store could not be opened.
    #[error("failed to open snapshot store: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Saved tasks could not be loaded.
    #[error("failed to load tasks: {0}")]
    Tasks(#[from] TaskRepositoryError),

    /// Saved users could not be loaded.
    #[error("failed to load users: {0}")]
    Users(#[from] UserRepositoryError),

    /// The upload directory could not be opened.
    #[error("failed to open upload directory: {0}")]
    Uploads(#[from] ImageStoreError),
}

/// Assembled services plus the notification delivery worker.
pub struct Application<C>
where
    C: Clock + Send + Sync,
{
    /// Shared HTTP state.
    pub state: AppState<C>,
    /// Background notification worker; it exits once `state` is dropped.
    pub notification_worker: JoinHandle<()>,
}

impl<C> Application<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Opens storage, loads saved collections and spawns the notification
    /// worker on the current runtime.
    ///
    /// Without a data directory every collection lives in memory; without an
    /// upload directory images are kept in memory too.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] when a directory cannot be opened or a saved
    /// collection cannot be decoded.
    pub async fn build(config: &TrackerConfig, clock: Arc<C>) -> Result<Self, StartupError> {
        let snapshots: Arc<dyn SnapshotStore> = match &config.data_dir {
            Some(dir) => {
                tracing::info!(data_dir = %dir, "using directory snapshot store");
                Arc::new(DirectorySnapshotStore::open(dir)?)
            }
            None => {
                tracing::warn!("no data directory configured, state will not survive restarts");
                Arc::new(InMemorySnapshotStore::new())
            }
        };

        let task_repository: Arc<dyn TaskRepository> =
            Arc::new(SnapshotTaskRepository::open(Arc::clone(&snapshots)).await?);
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SnapshotUserRepository::open(Arc::clone(&snapshots)).await?);

        let delivery = Arc::new(LogNotificationSink::new(
            config.notification.operator_email.clone(),
        ));
        let (queue, notification_worker) =
            QueuedNotificationSink::spawn(delivery, config.notification.policy());
        let notifier: Arc<dyn NotificationSink> = Arc::new(queue);

        let images: Arc<dyn ImageStore> = match &config.upload.dir {
            Some(dir) => Arc::new(DirectoryImageStore::open(
                dir,
                config.upload.public_prefix.clone(),
            )?),
            None => Arc::new(InMemoryImageStore::new(config.upload.public_prefix.clone())),
        };

        let state = AppState {
            tasks: TaskRegistryService::new(
                task_repository,
                Arc::clone(&notifier),
                Arc::clone(&clock),
            ),
            users: UserRegistryService::new(
                user_repository,
                notifier,
                Arc::clone(&clock),
            ),
            settings: CustomizationService::new(snapshots, clock),
            uploads: UploadService::new(images, config.upload.policy(), config.upload.timeout()),
        };

        Ok(Self {
            state,
            notification_worker,
        })
    }
}
