//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The assigned staff identifier is empty after trimming.
    #[error("assigned staff must not be empty")]
    EmptyAssignedStaff,

    /// The assignment date was not provided.
    #[error("date assigned is required")]
    MissingDateAssigned,

    /// The deadline was not provided.
    #[error("deadline is required")]
    MissingDeadline,

    /// The completion percentage lies outside `0..=100`.
    #[error("completed must be between 0 and 100, got {0}")]
    InvalidProgress(i64),

    /// The daily sequence does not fit the four-digit identifier suffix.
    #[error("daily task sequence {0} exceeds the four-digit identifier range")]
    SequenceExhausted(u32),
}

/// Error returned while parsing task identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier '{0}', expected YYYYMMDD-NNNN")]
pub struct ParseTaskIdError(pub String);

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
