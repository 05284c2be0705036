//! Task aggregate root and creation input.

use super::update::non_blank;
use super::{
    OverallAssessment, Progress, StaffIdentifier, TaskDomainError, TaskId, TaskStatus, TaskUpdate,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    description: String,
    assigned_staff: StaffIdentifier,
    area: String,
    date_assigned: NaiveDate,
    deadline: NaiveDate,
}

impl TaskDraft {
    /// Validates the fields the operator must supply for a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`],
    /// [`TaskDomainError::EmptyAssignedStaff`],
    /// [`TaskDomainError::MissingDateAssigned`] or
    /// [`TaskDomainError::MissingDeadline`] for the first missing field.
    pub fn new(
        description: &str,
        assigned_staff: &str,
        area: &str,
        date_assigned: Option<NaiveDate>,
        deadline: Option<NaiveDate>,
    ) -> Result<Self, TaskDomainError> {
        let description = non_blank(description).ok_or(TaskDomainError::EmptyDescription)?;
        let assigned_staff = StaffIdentifier::new(assigned_staff)?;
        let date_assigned = date_assigned.ok_or(TaskDomainError::MissingDateAssigned)?;
        let deadline = deadline.ok_or(TaskDomainError::MissingDeadline)?;

        Ok(Self {
            description,
            assigned_staff,
            area: area.to_owned(),
            date_assigned,
            deadline,
        })
    }

    /// Returns the staff member the task will be assigned to.
    #[must_use]
    pub const fn assigned_staff(&self) -> &StaffIdentifier {
        &self.assigned_staff
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    date_assigned: NaiveDate,
    deadline: NaiveDate,
    description: String,
    #[serde(default)]
    area: String,
    assigned_staff: StaffIdentifier,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default)]
    completed: Progress,
    last_update: DateTime<Utc>,
    #[serde(default)]
    remarks: String,
    #[serde(default)]
    supervisor_notes: String,
    #[serde(default)]
    quality: f64,
    #[serde(default)]
    efficiency: f64,
    #[serde(default)]
    timeliness: f64,
    #[serde(default)]
    overall: OverallAssessment,
}

impl Task {
    /// Creates a new `Not Started` task with zero progress.
    #[must_use]
    pub fn new(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let TaskDraft {
            description,
            assigned_staff,
            area,
            date_assigned,
            deadline,
        } = draft;

        Self {
            id,
            date_assigned,
            deadline,
            description,
            area,
            assigned_staff,
            status: TaskStatus::NotStarted,
            completed: Progress::NONE,
            last_update: clock.utc(),
            remarks: String::new(),
            supervisor_notes: String::new(),
            quality: 0.0,
            efficiency: 0.0,
            timeliness: 0.0,
            overall: OverallAssessment::Pending,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the date the task was assigned.
    #[must_use]
    pub const fn date_assigned(&self) -> NaiveDate {
        self.date_assigned
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the work area exactly as entered.
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Returns the assigned staff identifier.
    #[must_use]
    pub const fn assigned_staff(&self) -> &StaffIdentifier {
        &self.assigned_staff
    }

    /// Returns the progress status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn completed(&self) -> Progress {
        self.completed
    }

    /// Returns the timestamp of the latest mutation.
    #[must_use]
    pub const fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    /// Returns the staff remarks.
    #[must_use]
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// Returns the supervisor notes.
    #[must_use]
    pub fn supervisor_notes(&self) -> &str {
        &self.supervisor_notes
    }

    /// Returns the quality rating.
    #[must_use]
    pub const fn quality(&self) -> f64 {
        self.quality
    }

    /// Returns the efficiency rating.
    #[must_use]
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the timeliness rating.
    #[must_use]
    pub const fn timeliness(&self) -> f64 {
        self.timeliness
    }

    /// Returns the overall assessment.
    #[must_use]
    pub const fn overall(&self) -> &OverallAssessment {
        &self.overall
    }

    /// Returns `true` when the task is assigned to `staff`.
    #[must_use]
    pub fn is_assigned_to(&self, staff: &str) -> bool {
        self.assigned_staff.as_str() == staff
    }

    /// Merges the provided fields over the task and refreshes `lastUpdate`.
    ///
    /// All fields are validated before any is written, so a rejected update
    /// leaves the task untouched. Returns the status held before the update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a provided field is invalid.
    pub fn apply(
        &mut self,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<TaskStatus, TaskDomainError> {
        let validated = update.validate()?;
        let previous_status = self.status;

        replace_if_some(&mut self.date_assigned, validated.date_assigned);
        replace_if_some(&mut self.deadline, validated.deadline);
        replace_if_some(&mut self.description, validated.description);
        replace_if_some(&mut self.area, validated.area);
        replace_if_some(&mut self.assigned_staff, validated.assigned_staff);
        replace_if_some(&mut self.status, validated.status);
        replace_if_some(&mut self.completed, validated.completed);
        replace_if_some(&mut self.remarks, validated.remarks);
        replace_if_some(&mut self.supervisor_notes, validated.supervisor_notes);
        replace_if_some(&mut self.quality, validated.quality);
        replace_if_some(&mut self.efficiency, validated.efficiency);
        replace_if_some(&mut self.timeliness, validated.timeliness);
        replace_if_some(&mut self.overall, validated.overall);
        self.touch(clock);

        Ok(previous_status)
    }

    /// Updates the `last_update` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.last_update = clock.utc();
    }
}

fn replace_if_some<T>(field: &mut T, value: Option<T>) {
    if let Some(new_value) = value {
        *field = new_value;
    }
}
