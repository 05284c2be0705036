//! Best-effort notifications about task and account events.
//!
//! Registries hand events to a [`ports::NotificationSink`] after a mutation
//! has succeeded; delivery failures are logged and never reach the caller.
//! Delivery itself is decoupled from the request path by
//! [`adapters::QueuedNotificationSink`], a bounded queue drained by a
//! background worker with per-attempt timeouts and exponential backoff.
//!
//! - Event model in [`domain`]
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Message rendering in [`templates`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod templates;

#[cfg(test)]
mod tests;
