//! In-memory repository for registered users.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{EmailAddress, User, UserId},
    ports::{
        UserRepository, UserRepositoryError, UserRepositoryResult, repository::ensure_unique,
    },
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut users = self.users.write().map_err(lock_error)?;
        ensure_unique(&users, user)?;
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut users = self.users.write().map_err(lock_error)?;
        let slot = users
            .iter_mut()
            .find(|existing| existing.id() == user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?;
        *slot = user.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.iter().find(|user| user.email().matches(email)).cloned())
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.clone())
    }
}
