//! Service layer for task assignment, updates and lookup.
//!
//! Provides [`TaskRegistryService`], which allocates date-prefixed
//! identifiers, applies partial updates and announces changes to the
//! notification sink.

use crate::notification::{domain::NotificationEvent, ports::NotificationSink};
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    description: String,
    assigned_staff: String,
    area: String,
    date_assigned: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the description and assignee.
    #[must_use]
    pub fn new(description: impl Into<String>, assigned_staff: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            assigned_staff: assigned_staff.into(),
            ..Self::default()
        }
    }

    /// Sets the work area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Sets the assignment date.
    #[must_use]
    pub const fn with_date_assigned(mut self, date: NaiveDate) -> Self {
        self.date_assigned = Some(date);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, date: NaiveDate) -> Self {
        self.deadline = Some(date);
        self
    }

    /// Sets the assignment date when present.
    #[must_use]
    pub const fn with_optional_date_assigned(mut self, date: Option<NaiveDate>) -> Self {
        self.date_assigned = date;
        self
    }

    /// Sets the deadline when present.
    #[must_use]
    pub const fn with_optional_deadline(mut self, date: Option<NaiveDate>) -> Self {
        self.deadline = date;
        self
    }
}

/// Service-level errors for task registry operations.
#[derive(Debug, Error)]
pub enum TaskRegistryError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task carries the requested identifier.
    #[error("task not found: {0}")]
    NotFound(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task registry operations.
pub type TaskRegistryResult<T> = Result<T, TaskRegistryError>;

/// Task assignment and tracking orchestration service.
///
/// Writes are serialized per service instance so that counting the day's
/// tasks and storing the new one happen as a single step.
pub struct TaskRegistryService<R, N, C>
where
    R: TaskRepository + ?Sized,
    N: NotificationSink + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    writer: Arc<Mutex<()>>,
}

impl<R, N, C> Clone for TaskRegistryService<R, N, C>
where
    R: TaskRepository + ?Sized,
    N: NotificationSink + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
            clock: Arc::clone(&self.clock),
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<R, N, C> TaskRegistryService<R, N, C>
where
    R: TaskRepository + ?Sized,
    N: NotificationSink + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task registry service.
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            notifier,
            clock,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a `Not Started` task and assigns it the next identifier of
    /// the current UTC day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Domain`] when a required field is
    /// missing or the day's four-digit sequence is exhausted, or
    /// [`TaskRegistryError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskRegistryResult<Task> {
        let CreateTaskRequest {
            description,
            assigned_staff,
            area,
            date_assigned,
            deadline,
        } = request;
        let draft = TaskDraft::new(&description, &assigned_staff, &area, date_assigned, deadline)?;

        let task = {
            let _guard = self.writer.lock().await;
            let today = self.clock.utc().date_naive();
            let existing = self.repository.count_for_day(today).await?;
            let id = TaskId::for_day(today, existing.saturating_add(1))?;
            let task = Task::new(id, draft, &*self.clock);
            self.repository.store(&task).await?;
            task
        };

        tracing::info!(
            task_id = %task.id(),
            assigned_staff = %task.assigned_staff(),
            "task created"
        );
        self.announce(NotificationEvent::task_created(&task, &*self.clock))
            .await;
        Ok(task)
    }

    /// Merges `update` over the task identified by `id`.
    ///
    /// A rejected update leaves the stored task unchanged. Every successful
    /// update is announced; a transition into `Completed` is announced a
    /// second time as a completion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when `id` is malformed or
    /// unknown, [`TaskRegistryError::Domain`] when a provided field is
    /// invalid, or [`TaskRegistryError::Repository`] when persistence fails.
    pub async fn update_task(&self, id: &str, update: TaskUpdate) -> TaskRegistryResult<Task> {
        let task_id = parse_id(id)?;

        let (task, previous_status) = {
            let _guard = self.writer.lock().await;
            let mut task = self.find_or_not_found(task_id, id).await?;
            let previous_status = task.apply(update, &*self.clock)?;
            self.repository.update(&task).await?;
            (task, previous_status)
        };

        tracing::info!(
            task_id = %task.id(),
            status = task.status().as_str(),
            completed = task.completed().value(),
            "task updated"
        );
        self.announce(NotificationEvent::task_updated(&task, &*self.clock))
            .await;
        if previous_status != TaskStatus::Completed && task.status() == TaskStatus::Completed {
            self.announce(NotificationEvent::task_completed(&task, &*self.clock))
                .await;
        }
        Ok(task)
    }

    /// Returns the task identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when `id` is malformed or
    /// unknown, or [`TaskRegistryError::Repository`] when lookup fails.
    pub async fn find_task(&self, id: &str) -> TaskRegistryResult<Task> {
        let task_id = parse_id(id)?;
        self.find_or_not_found(task_id, id).await
    }

    /// Returns the tasks assigned to `staff` in creation order.
    ///
    /// Unknown identifiers yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Repository`] when lookup fails.
    pub async fn list_tasks_for_user(&self, staff: &str) -> TaskRegistryResult<Vec<Task>> {
        Ok(self.repository.list_by_assignee(staff.trim()).await?)
    }

    /// Returns every task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Repository`] when lookup fails.
    pub async fn list_all_tasks(&self) -> TaskRegistryResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    async fn find_or_not_found(&self, task_id: TaskId, raw: &str) -> TaskRegistryResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TaskRegistryError::NotFound(raw.trim().to_owned()))
    }

    async fn announce(&self, event: NotificationEvent) {
        if let Err(err) = self.notifier.notify(&event).await {
            tracing::warn!(
                kind = %event.kind(),
                recipient = %event.recipient(),
                error = %err,
                "task notification not delivered"
            );
        }
    }
}

fn parse_id(raw: &str) -> TaskRegistryResult<TaskId> {
    raw.parse()
        .map_err(|_| TaskRegistryError::NotFound(raw.trim().to_owned()))
}
