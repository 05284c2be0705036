//! Partial task updates submitted by the operator or assigned staff.

use super::{OverallAssessment, Progress, StaffIdentifier, TaskDomainError, TaskStatus};
use chrono::NaiveDate;
use serde::Deserialize;

/// Partial set of task fields; absent fields are left unchanged.
///
/// The identifier and the `lastUpdate` timestamp are not part of an update:
/// the former is immutable and the latter is always refreshed by the task.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    date_assigned: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
    description: Option<String>,
    area: Option<String>,
    assigned_staff: Option<String>,
    status: Option<TaskStatus>,
    completed: Option<i64>,
    remarks: Option<String>,
    supervisor_notes: Option<String>,
    quality: Option<f64>,
    efficiency: Option<f64>,
    timeliness: Option<f64>,
    overall: Option<OverallAssessment>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the work area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Reassigns the task.
    #[must_use]
    pub fn with_assigned_staff(mut self, staff: impl Into<String>) -> Self {
        self.assigned_staff = Some(staff.into());
        self
    }

    /// Sets the progress status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the completion percentage.
    #[must_use]
    pub const fn with_completed(mut self, percent: i64) -> Self {
        self.completed = Some(percent);
        self
    }

    /// Sets staff remarks.
    #[must_use]
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Sets supervisor notes.
    #[must_use]
    pub fn with_supervisor_notes(mut self, notes: impl Into<String>) -> Self {
        self.supervisor_notes = Some(notes.into());
        self
    }

    /// Sets all three supervisor ratings.
    #[must_use]
    pub const fn with_ratings(mut self, quality: f64, efficiency: f64, timeliness: f64) -> Self {
        self.quality = Some(quality);
        self.efficiency = Some(efficiency);
        self.timeliness = Some(timeliness);
        self
    }

    /// Sets the overall assessment.
    #[must_use]
    pub fn with_overall(mut self, overall: OverallAssessment) -> Self {
        self.overall = Some(overall);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validates every provided field before any of them is applied.
    pub(super) fn validate(self) -> Result<ValidatedUpdate, TaskDomainError> {
        let description = self
            .description
            .map(|value| non_blank(&value).ok_or(TaskDomainError::EmptyDescription))
            .transpose()?;
        let assigned_staff = self.assigned_staff.map(StaffIdentifier::new).transpose()?;
        let completed = self.completed.map(Progress::new).transpose()?;

        Ok(ValidatedUpdate {
            date_assigned: self.date_assigned,
            deadline: self.deadline,
            description,
            area: self.area,
            assigned_staff,
            status: self.status,
            completed,
            remarks: self.remarks,
            supervisor_notes: self.supervisor_notes,
            quality: self.quality,
            efficiency: self.efficiency,
            timeliness: self.timeliness,
            overall: self.overall,
        })
    }
}

/// Update whose fields have passed validation.
#[derive(Debug)]
pub(super) struct ValidatedUpdate {
    pub(super) date_assigned: Option<NaiveDate>,
    pub(super) deadline: Option<NaiveDate>,
    pub(super) description: Option<String>,
    pub(super) area: Option<String>,
    pub(super) assigned_staff: Option<StaffIdentifier>,
    pub(super) status: Option<TaskStatus>,
    pub(super) completed: Option<Progress>,
    pub(super) remarks: Option<String>,
    pub(super) supervisor_notes: Option<String>,
    pub(super) quality: Option<f64>,
    pub(super) efficiency: Option<f64>,
    pub(super) timeliness: Option<f64>,
    pub(super) overall: Option<OverallAssessment>,
}

/// Returns the trimmed value, or `None` when nothing is left.
pub(super) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
