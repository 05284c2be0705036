//! Notification sink that renders messages and writes them to the log.

use async_trait::async_trait;

use crate::notification::{
    domain::{NotificationEvent, Recipient},
    ports::{NotificationResult, NotificationSink},
    templates,
};

/// Sink standing in for an email gateway: renders each message and emits it
/// as a structured `tracing` event.
#[derive(Debug, Clone)]
pub struct LogNotificationSink {
    operator_email: String,
}

impl LogNotificationSink {
    /// Creates a sink addressing operator notifications to `operator_email`.
    #[must_use]
    pub fn new(operator_email: impl Into<String>) -> Self {
        Self {
            operator_email: operator_email.into(),
        }
    }

    fn address_of<'a>(&'a self, recipient: &'a Recipient) -> &'a str {
        match recipient {
            Recipient::Member(address) => address,
            Recipient::Operator => &self.operator_email,
        }
    }
}

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn notify(&self, event: &NotificationEvent) -> NotificationResult<()> {
        let message = templates::render(event)?;
        tracing::info!(
            kind = %event.kind(),
            to = self.address_of(event.recipient()),
            subject = %message.subject,
            body = %message.body,
            "sending notification"
        );
        Ok(())
    }
}
