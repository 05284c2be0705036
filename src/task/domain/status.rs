//! Task progress status and supervisor assessment values.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress status of a task as reported by staff or the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not begun.
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Completed")]
    Completed,
    /// Work is paused.
    #[serde(rename = "On Hold")]
    OnHold,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "not started" => Ok(Self::NotStarted),
            "in progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "on hold" => Ok(Self::OnHold),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Overall supervisor assessment of a task.
///
/// `Pending` and `Done` are the values the operator dashboard uses; any
/// other label is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OverallAssessment {
    /// Not yet assessed.
    #[default]
    Pending,
    /// Assessed as done.
    Done,
    /// Free-form assessment label.
    Other(String),
}

impl OverallAssessment {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Done => "Done",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for OverallAssessment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => Self::Pending,
            "Done" => Self::Done,
            _ => Self::Other(value),
        }
    }
}

impl From<OverallAssessment> for String {
    fn from(value: OverallAssessment) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for OverallAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
