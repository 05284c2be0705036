//! Shared world state for task assignment BDD scenarios.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rstest::fixture;
use task_tracker::notification::adapters::RecordingNotificationSink;
use task_tracker::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CreateTaskRequest, TaskRegistryError, TaskRegistryService},
};

use crate::test_clock::FixedClock;

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskRegistryService<InMemoryTaskRepository, RecordingNotificationSink, FixedClock>;

/// Scenario world for task assignment behaviour tests.
pub struct AssignmentWorld {
    pub service: TestTaskService,
    pub sink: RecordingNotificationSink,
    pub clock: FixedClock,
    pub created: Vec<Task>,
    pub last_update: Option<Result<Task, TaskRegistryError>>,
}

impl AssignmentWorld {
    /// Creates a world with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        let sink = RecordingNotificationSink::new();
        let clock = FixedClock::on_day(2025, 1, 1);
        let service = TaskRegistryService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(sink.clone()),
            Arc::new(clock.clone()),
        );

        Self {
            service,
            sink,
            clock,
            created: Vec::new(),
            last_update: None,
        }
    }

    /// Moves the scenario clock to `date`.
    pub fn set_date(&self, date: NaiveDate) {
        self.clock.set_day(date.year(), date.month(), date.day());
    }

    /// Creates a task due a week after the current date.
    pub fn assign(&mut self, description: &str, staff: &str) -> Result<(), eyre::Report> {
        let today = mockable::Clock::utc(&self.clock).date_naive();
        let deadline = today
            .checked_add_days(chrono::Days::new(7))
            .ok_or_else(|| eyre::eyre!("deadline out of range"))?;
        let request = CreateTaskRequest::new(description, staff)
            .with_date_assigned(today)
            .with_deadline(deadline);
        let task = run_async(self.service.create_task(request))?;
        self.created.push(task);
        Ok(())
    }
}

impl Default for AssignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AssignmentWorld {
    AssignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
