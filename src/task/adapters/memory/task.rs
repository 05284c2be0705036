//! In-memory repository for task tracking tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    positions: HashMap<TaskId, usize>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.positions.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let position = state.tasks.len();
        state.positions.insert(task.id(), position);
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let position = *state
            .positions
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        let slot = state
            .tasks
            .get_mut(position)
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .positions
            .get(&id)
            .and_then(|position| state.tasks.get(*position))
            .cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.clone())
    }

    async fn list_by_assignee(&self, staff: &str) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.is_assigned_to(staff))
            .cloned()
            .collect())
    }

    async fn count_for_day(&self, day: NaiveDate) -> TaskRepositoryResult<u32> {
        let state = self.state.read().map_err(lock_error)?;
        let count = state
            .positions
            .keys()
            .filter(|id| id.is_from_day(day))
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }
}
