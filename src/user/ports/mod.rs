//! Port contracts for user registration.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
