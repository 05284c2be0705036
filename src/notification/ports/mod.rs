//! Port contract for notification delivery.

use crate::notification::domain::NotificationEvent;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification sink operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Delivery contract for notification events.
///
/// Callers treat delivery as best-effort: an error is logged by the caller
/// and never rolls back the mutation that raised the event.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers or enqueues a single event.
    async fn notify(&self, event: &NotificationEvent) -> NotificationResult<()>;
}

/// Errors returned by notification sinks.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The message template could not be rendered.
    #[error("notification template error: {0}")]
    Template(Arc<minijinja::Error>),

    /// The delivery queue has no free capacity.
    #[error("notification queue is full")]
    QueueFull,

    /// The delivery worker has stopped.
    #[error("notification queue is closed")]
    QueueClosed,

    /// The downstream channel rejected the message.
    #[error("notification delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationError {
    /// Wraps a downstream delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}

impl From<minijinja::Error> for NotificationError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(Arc::new(err))
    }
}
