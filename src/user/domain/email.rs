//! Validated email address.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address with a single `@`, non-empty local and domain parts and no
/// whitespace.
///
/// Addresses compare case-insensitively through
/// [`EmailAddress::matches`]; the original spelling is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidEmail`] when the address is
    /// malformed.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let well_formed = !trimmed.chars().any(char::is_whitespace)
            && trimmed
                .split_once('@')
                .is_some_and(|(local, domain)| {
                    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
                });
        if !well_formed {
            return Err(UserDomainError::InvalidEmail(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when both addresses are equal ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
