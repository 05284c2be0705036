//! Adapter implementations for the notification sink port.

mod log;
mod queued;
mod recording;

pub use log::LogNotificationSink;
pub use queued::{DeliveryPolicy, QueuedNotificationSink};
pub use recording::RecordingNotificationSink;
