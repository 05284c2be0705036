//! Whole-collection persistence for tasks, users, and settings.
//!
//! The tracker never needs partial or indexed storage access: each collection
//! is read and written as one JSON document under a fixed key. The module
//! follows the same layering as the bounded contexts:
//!
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod ports;

pub use ports::{SnapshotError, SnapshotKey, SnapshotResult, SnapshotStore};
