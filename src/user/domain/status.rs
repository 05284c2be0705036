//! Account review status.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a registered account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Awaiting operator review.
    #[default]
    Pending,
    /// Approved by the operator.
    Approved,
    /// Rejected by the operator.
    Rejected,
}

impl UserStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UserStatus {
    type Error = UserDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UserDomainError::UnknownStatus(value.to_owned())),
        }
    }
}

/// Operator decision on an account.
///
/// Accounts may be re-reviewed: an approved account can later be rejected
/// and the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewDecision {
    /// Grant access.
    Approve,
    /// Deny access.
    Reject,
}

impl ReviewDecision {
    /// Returns the status the decision leads to.
    #[must_use]
    pub const fn resulting_status(self) -> UserStatus {
        match self {
            Self::Approve => UserStatus::Approved,
            Self::Reject => UserStatus::Rejected,
        }
    }
}

impl TryFrom<UserStatus> for ReviewDecision {
    type Error = UserDomainError;

    fn try_from(value: UserStatus) -> Result<Self, Self::Error> {
        match value {
            UserStatus::Approved => Ok(Self::Approve),
            UserStatus::Rejected => Ok(Self::Reject),
            UserStatus::Pending => Err(UserDomainError::NotADecision),
        }
    }
}
