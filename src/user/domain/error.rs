//! Error types for user domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The display name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The department is empty after trimming.
    #[error("department must not be empty")]
    EmptyDepartment,

    /// The email address is missing or malformed.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    /// The status value is not one of `pending`, `approved` or `rejected`.
    #[error("unknown user status: {0}")]
    UnknownStatus(String),

    /// A review must approve or reject; `pending` is not a decision.
    #[error("status must be 'approved' or 'rejected'")]
    NotADecision,

    /// An update named neither a status nor a presence change.
    #[error("expected a status or presence change")]
    NothingToUpdate,
}

/// Error returned while parsing user identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid user identifier: {0}")]
pub struct ParseUserIdError(pub String);
