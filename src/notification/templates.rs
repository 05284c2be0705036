//! Subject and body templates for notification messages.

use crate::notification::{
    domain::{NotificationEvent, NotificationKind},
    ports::NotificationResult,
};
use minijinja::Environment;

const TASK_CREATED_SUBJECT: &str = "New Task Assigned: {{ id }}";
const TASK_CREATED_BODY: &str = "A new task has been assigned to you:

Task ID: {{ id }}
Description: {{ description }}
Area: {{ area }}
Deadline: {{ deadline }}
Status: {{ status }}
Progress: {{ completed }}%";

const TASK_UPDATED_SUBJECT: &str = "Task Updated: {{ id }}";
const TASK_UPDATED_BODY: &str = "Task has been updated:

Task ID: {{ id }}
Description: {{ description }}
Area: {{ area }}
Deadline: {{ deadline }}
Status: {{ status }}
Progress: {{ completed }}%
{% if remarks %}
Remarks: {{ remarks }}{% endif %}";

const TASK_COMPLETED_SUBJECT: &str = "Task Completed: {{ id }}";
const TASK_COMPLETED_BODY: &str = "Congratulations! Task completed:

Task ID: {{ id }}
Description: {{ description }}
Area: {{ area }}
Deadline: {{ deadline }}";

const USER_REGISTERED_SUBJECT: &str = "New User Registration: {{ name }}";
const USER_REGISTERED_BODY: &str = "New user registration: {{ name }} ({{ email }})
Department: {{ department }}

The account is pending operator approval.";

const USER_APPROVED_SUBJECT: &str = "Account Approved - Task Tracker System";
const USER_APPROVED_BODY: &str = "Dear {{ name }},

Your account has been approved for the Task Tracker System.
You can now log in using your credentials.

Best regards,
Engineering & General Services Team";

/// Rendered notification text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

const fn templates_for(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::TaskCreated => (TASK_CREATED_SUBJECT, TASK_CREATED_BODY),
        NotificationKind::TaskUpdated => (TASK_UPDATED_SUBJECT, TASK_UPDATED_BODY),
        NotificationKind::TaskCompleted => (TASK_COMPLETED_SUBJECT, TASK_COMPLETED_BODY),
        NotificationKind::UserRegistered => (USER_REGISTERED_SUBJECT, USER_REGISTERED_BODY),
        NotificationKind::UserApproved => (USER_APPROVED_SUBJECT, USER_APPROVED_BODY),
    }
}

/// Renders the subject and body for an event from its payload.
///
/// # Errors
///
/// Returns [`crate::notification::ports::NotificationError::Template`] when
/// rendering fails.
pub fn render(event: &NotificationEvent) -> NotificationResult<RenderedMessage> {
    let (subject_template, body_template) = templates_for(event.kind());
    let environment = Environment::new();
    let subject = environment.render_str(subject_template, event.payload())?;
    let body = environment.render_str(body_template, event.payload())?;
    Ok(RenderedMessage { subject, body })
}
