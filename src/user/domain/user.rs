//! Registered user aggregate root.

use super::{EmailAddress, ReviewDecision, UserId, UserRegistration, UserStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registered user aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
    department: String,
    #[serde(default)]
    status: UserStatus,
    #[serde(default)]
    is_online: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a `pending`, offline user with a fresh identifier.
    #[must_use]
    pub fn register(registration: UserRegistration, clock: &impl Clock) -> Self {
        let UserRegistration {
            name,
            email,
            department,
        } = registration;
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            name,
            email,
            department,
            status: UserStatus::Pending,
            is_online: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> UserStatus {
        self.status
    }

    /// Returns the presence flag.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.is_online
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies an operator decision.
    ///
    /// Returns `false` without touching the user when the account already
    /// holds the resulting status.
    pub fn review(&mut self, decision: ReviewDecision, clock: &impl Clock) -> bool {
        let next = decision.resulting_status();
        if self.status == next {
            return false;
        }
        self.status = next;
        self.touch(clock);
        true
    }

    /// Sets the presence flag. Returns `false` when nothing changed.
    pub fn set_presence(&mut self, online: bool, clock: &impl Clock) -> bool {
        if self.is_online == online {
            return false;
        }
        self.is_online = online;
        self.touch(clock);
        true
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
