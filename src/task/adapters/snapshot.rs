//! Task repository that writes the whole collection through a snapshot store.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::persistence::SnapshotStore;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Task repository backed by a [`SnapshotStore`].
///
/// The collection is loaded once when the repository is opened and kept in
/// memory. Every mutation saves the full collection first and only then
/// commits it to the cached copy, so a failed save leaves both untouched.
#[derive(Clone)]
pub struct SnapshotTaskRepository {
    store: Arc<dyn SnapshotStore>,
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl SnapshotTaskRepository {
    /// Opens the repository, loading the saved collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the snapshot cannot
    /// be read or decoded.
    pub async fn open(store: Arc<dyn SnapshotStore>) -> TaskRepositoryResult<Self> {
        let tasks = store
            .load_tasks()
            .await
            .map_err(TaskRepositoryError::persistence)?;
        tracing::debug!(count = tasks.len(), "loaded task snapshot");
        Ok(Self {
            store,
            tasks: Arc::new(RwLock::new(tasks)),
        })
    }
}

#[async_trait]
impl TaskRepository for SnapshotTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().await;
        if tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let mut next = tasks.clone();
        next.push(task.clone());
        self.store
            .save_tasks(&next)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        *tasks = next;
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().await;
        let mut next = tasks.clone();
        let slot = next
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();

        self.store
            .save_tasks(&next)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        *tasks = next;
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn list_by_assignee(&self, staff: &str) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|task| task.is_assigned_to(staff))
            .cloned()
            .collect())
    }

    async fn count_for_day(&self, day: NaiveDate) -> TaskRepositoryResult<u32> {
        let tasks = self.tasks.read().await;
        let count = tasks.iter().filter(|task| task.id().is_from_day(day)).count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }
}
