//! Adapter implementations for the user repository port.

pub mod memory;
pub mod snapshot;
