//! In-memory user repository.

mod user;

pub use user::InMemoryUserRepository;
