//! Validated sign-up input.

use super::{EmailAddress, UserDomainError};

/// Validated input for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistration {
    pub(super) name: String,
    pub(super) email: EmailAddress,
    pub(super) department: String,
}

impl UserRegistration {
    /// Validates the sign-up fields.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`],
    /// [`UserDomainError::InvalidEmail`] or
    /// [`UserDomainError::EmptyDepartment`] for the first invalid field.
    pub fn new(name: &str, email: &str, department: &str) -> Result<Self, UserDomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UserDomainError::EmptyName);
        }
        let email = EmailAddress::new(email)?;
        let department = department.trim();
        if department.is_empty() {
            return Err(UserDomainError::EmptyDepartment);
        }
        Ok(Self {
            name: name.to_owned(),
            email,
            department: department.to_owned(),
        })
    }

    /// Returns the email address being registered.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
}
