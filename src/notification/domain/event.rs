//! Notification events raised by the task and user registries.

use crate::task::domain::Task;
use crate::user::domain::User;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

/// Kind of event being announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NotificationKind {
    /// A task was created and assigned.
    #[serde(rename = "task.created")]
    TaskCreated,
    /// A task was updated.
    #[serde(rename = "task.updated")]
    TaskUpdated,
    /// A task moved into the `Completed` status.
    #[serde(rename = "task.completed")]
    TaskCompleted,
    /// A user registered and awaits review.
    #[serde(rename = "user.registered")]
    UserRegistered,
    /// A user account was approved.
    #[serde(rename = "user.approved")]
    UserApproved,
}

impl NotificationKind {
    /// Returns the dotted event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskCreated => "task.created",
            Self::TaskUpdated => "task.updated",
            Self::TaskCompleted => "task.completed",
            Self::UserRegistered => "user.registered",
            Self::UserApproved => "user.approved",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Addressee of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "address", rename_all = "snake_case")]
pub enum Recipient {
    /// A staff member or registered user, by email or identifier.
    Member(String),
    /// The operator mailbox configured for the deployment.
    Operator,
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(address) => f.write_str(address),
            Self::Operator => f.write_str("operator"),
        }
    }
}

/// Event handed to a notification sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    kind: NotificationKind,
    recipient: Recipient,
    payload: Value,
    occurred_at: DateTime<Utc>,
}

impl NotificationEvent {
    /// Announces a newly assigned task to its assignee.
    #[must_use]
    pub fn task_created(task: &Task, clock: &impl Clock) -> Self {
        Self::for_task(NotificationKind::TaskCreated, task, clock)
    }

    /// Announces a task update to its assignee.
    #[must_use]
    pub fn task_updated(task: &Task, clock: &impl Clock) -> Self {
        Self::for_task(NotificationKind::TaskUpdated, task, clock)
    }

    /// Announces a task completion to its assignee.
    #[must_use]
    pub fn task_completed(task: &Task, clock: &impl Clock) -> Self {
        Self::for_task(NotificationKind::TaskCompleted, task, clock)
    }

    /// Tells the operator that a user is waiting for review.
    #[must_use]
    pub fn user_registered(user: &User, clock: &impl Clock) -> Self {
        Self {
            kind: NotificationKind::UserRegistered,
            recipient: Recipient::Operator,
            payload: user_payload(user),
            occurred_at: clock.utc(),
        }
    }

    /// Tells a user that their account was approved.
    #[must_use]
    pub fn user_approved(user: &User, clock: &impl Clock) -> Self {
        Self {
            kind: NotificationKind::UserApproved,
            recipient: Recipient::Member(user.email().as_str().to_owned()),
            payload: user_payload(user),
            occurred_at: clock.utc(),
        }
    }

    fn for_task(kind: NotificationKind, task: &Task, clock: &impl Clock) -> Self {
        Self {
            kind,
            recipient: Recipient::Member(task.assigned_staff().as_str().to_owned()),
            payload: task_payload(task),
            occurred_at: clock.utc(),
        }
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the addressee.
    #[must_use]
    pub const fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Returns the event payload used for message rendering.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// Returns when the event was raised.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

fn task_payload(task: &Task) -> Value {
    json!({
        "id": task.id().to_string(),
        "description": task.description(),
        "area": task.area(),
        "assignedStaff": task.assigned_staff().as_str(),
        "deadline": task.deadline().to_string(),
        "status": task.status().as_str(),
        "completed": task.completed().value(),
        "remarks": task.remarks(),
    })
}

fn user_payload(user: &User) -> Value {
    json!({
        "id": user.id().to_string(),
        "name": user.name(),
        "email": user.email().as_str(),
        "department": user.department(),
        "status": user.status().as_str(),
    })
}
