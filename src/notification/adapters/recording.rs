//! Recording notification sink for tests and local runs.

use async_trait::async_trait;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::notification::{
    domain::NotificationEvent,
    ports::{NotificationError, NotificationResult, NotificationSink},
};

/// Sink that records delivered events and can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    state: Arc<Mutex<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    delivered: Vec<NotificationEvent>,
    attempts: usize,
    failures_remaining: usize,
    always_fail: bool,
}

impl RecordingNotificationSink {
    /// Creates a sink that accepts every event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects every event.
    #[must_use]
    pub fn failing() -> Self {
        let sink = Self::default();
        sink.lock().always_fail = true;
        sink
    }

    /// Rejects the next `count` delivery attempts.
    pub fn fail_next(&self, count: usize) {
        self.lock().failures_remaining = count;
    }

    /// Returns the events delivered so far, in delivery order.
    #[must_use]
    pub fn delivered(&self) -> Vec<NotificationEvent> {
        self.lock().delivered.clone()
    }

    /// Returns the number of delivery attempts, failed ones included.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.lock().attempts
    }

    fn lock(&self) -> MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NotificationSink for RecordingNotificationSink {
    async fn notify(&self, event: &NotificationEvent) -> NotificationResult<()> {
        let mut state = self.lock();
        state.attempts = state.attempts.saturating_add(1);
        if state.always_fail {
            return Err(NotificationError::delivery(io::Error::other(
                "recording sink configured to fail",
            )));
        }
        if state.failures_remaining > 0 {
            state.failures_remaining = state.failures_remaining.saturating_sub(1);
            return Err(NotificationError::delivery(io::Error::other(
                "recording sink injected failure",
            )));
        }
        state.delivered.push(event.clone());
        Ok(())
    }
}
