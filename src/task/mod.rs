//! Task assignment and progress tracking.
//!
//! Tasks are created by the operator with a date-prefixed identifier
//! (`YYYYMMDD-NNNN`), assigned to a staff member and updated through partial
//! updates. Creation, updates and completions are announced to the assignee.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
