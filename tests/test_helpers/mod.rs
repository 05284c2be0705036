//! Shared helpers for integration tests.

mod clock;
mod env;

pub use clock::FixedClock;
pub use env::EnvVarGuard;
