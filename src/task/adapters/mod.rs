//! Adapter implementations for the task repository port.

pub mod memory;
pub mod snapshot;
