//! Queued notification sink drained by a background delivery worker.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use crate::notification::{
    domain::NotificationEvent,
    ports::{NotificationError, NotificationResult, NotificationSink},
};

/// Queue size and retry behaviour of the delivery worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPolicy {
    capacity: usize,
    attempt_timeout: Duration,
    max_attempts: u32,
    initial_backoff: Duration,
}

impl DeliveryPolicy {
    /// Creates a policy; zero capacity or attempts are raised to one.
    #[must_use]
    pub fn new(
        capacity: usize,
        attempt_timeout: Duration,
        max_attempts: u32,
        initial_backoff: Duration,
    ) -> Self {
        Self {
            capacity: capacity.max(1),
            attempt_timeout,
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    /// Returns the queue capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the per-attempt timeout.
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Returns the maximum number of delivery attempts per event.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the delay before the first retry; later retries double it.
    #[must_use]
    pub const fn initial_backoff(&self) -> Duration {
        self.initial_backoff
    }
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self::new(64, Duration::from_secs(5), 3, Duration::from_millis(200))
    }
}

/// Sink that enqueues events for a background worker and returns at once.
///
/// The worker exits after every handle has been dropped and the queue has
/// drained.
#[derive(Debug, Clone)]
pub struct QueuedNotificationSink {
    sender: mpsc::Sender<NotificationEvent>,
}

impl QueuedNotificationSink {
    /// Spawns the delivery worker on the current tokio runtime.
    ///
    /// Returns the enqueueing handle and the worker's join handle.
    pub fn spawn<S>(sink: Arc<S>, policy: DeliveryPolicy) -> (Self, JoinHandle<()>)
    where
        S: NotificationSink + ?Sized + 'static,
    {
        let (sender, receiver) = mpsc::channel(policy.capacity());
        let worker = tokio::spawn(run_delivery(receiver, sink, policy));
        (Self { sender }, worker)
    }
}

#[async_trait]
impl NotificationSink for QueuedNotificationSink {
    async fn notify(&self, event: &NotificationEvent) -> NotificationResult<()> {
        self.sender.try_send(event.clone()).map_err(|err| match err {
            TrySendError::Full(_) => NotificationError::QueueFull,
            TrySendError::Closed(_) => NotificationError::QueueClosed,
        })
    }
}

async fn run_delivery<S>(
    mut receiver: mpsc::Receiver<NotificationEvent>,
    sink: Arc<S>,
    policy: DeliveryPolicy,
) where
    S: NotificationSink + ?Sized,
{
    while let Some(event) = receiver.recv().await {
        deliver(&*sink, &event, policy).await;
    }
    tracing::debug!("notification queue closed, delivery worker exiting");
}

/// Attempts delivery with timeout and exponential backoff.
///
/// Returns `true` once an attempt succeeds.
async fn deliver<S>(sink: &S, event: &NotificationEvent, policy: DeliveryPolicy) -> bool
where
    S: NotificationSink + ?Sized,
{
    let mut backoff = policy.initial_backoff();
    for attempt in 1..=policy.max_attempts() {
        match tokio::time::timeout(policy.attempt_timeout(), sink.notify(event)).await {
            Ok(Ok(())) => return true,
            Ok(Err(err)) => tracing::warn!(
                kind = %event.kind(),
                attempt,
                error = %err,
                "notification attempt failed"
            ),
            Err(_) => tracing::warn!(
                kind = %event.kind(),
                attempt,
                timeout_ms = policy.attempt_timeout().as_millis(),
                "notification attempt timed out"
            ),
        }

        if attempt < policy.max_attempts() {
            tokio::time::sleep(backoff).await;
            backoff = backoff.saturating_mul(2);
        }
    }

    tracing::error!(
        kind = %event.kind(),
        attempts = policy.max_attempts(),
        "dropping notification after exhausting retries"
    );
    false
}
