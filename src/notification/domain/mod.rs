//! Notification event model.

mod event;

pub use event::{NotificationEvent, NotificationKind, Recipient};
