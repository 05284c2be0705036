//! User repository that writes the whole collection through a snapshot store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::persistence::SnapshotStore;
use crate::user::{
    domain::{EmailAddress, User, UserId},
    ports::{
        UserRepository, UserRepositoryError, UserRepositoryResult, repository::ensure_unique,
    },
};

/// User repository backed by a [`SnapshotStore`].
///
/// Mutations save the next collection before replacing the cached one.
#[derive(Clone)]
pub struct SnapshotUserRepository {
    store: Arc<dyn SnapshotStore>,
    users: Arc<RwLock<Vec<User>>>,
}

impl SnapshotUserRepository {
    /// Opens the repository, loading the saved collection.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the snapshot cannot
    /// be read or decoded.
    pub async fn open(store: Arc<dyn SnapshotStore>) -> UserRepositoryResult<Self> {
        let users = store
            .load_users()
            .await
            .map_err(UserRepositoryError::persistence)?;
        tracing::debug!(count = users.len(), "loaded user snapshot");
        Ok(Self {
            store,
            users: Arc::new(RwLock::new(users)),
        })
    }

    async fn commit(&self, users: &mut Vec<User>, next: Vec<User>) -> UserRepositoryResult<()> {
        self.store
            .save_users(&next)
            .await
            .map_err(UserRepositoryError::persistence)?;
        *users = next;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SnapshotUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut users = self.users.write().await;
        ensure_unique(&users, user)?;
        let mut next = users.clone();
        next.push(user.clone());
        self.commit(&mut users, next).await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut users = self.users.write().await;
        let mut next = users.clone();
        let slot = next
            .iter_mut()
            .find(|existing| existing.id() == user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?;
        *slot = user.clone();
        self.commit(&mut users, next).await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.email().matches(email)).cloned())
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
