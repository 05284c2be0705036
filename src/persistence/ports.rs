//! Snapshot store port for whole-collection reads and writes.

use crate::settings::domain::Customization;
use crate::task::domain::Task;
use crate::user::domain::User;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Key under which a collection snapshot is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    /// The task collection.
    Tasks,
    /// The user collection.
    Users,
    /// The customization settings document.
    Customization,
}

impl SnapshotKey {
    /// Returns the storage key, prefixed with the application namespace.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "task-tracker-tasks",
            Self::Users => "task-tracker-users",
            Self::Customization => "task-tracker-customization",
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque key-value storage of whole collections.
///
/// Adapters implement raw [`read`](SnapshotStore::read) and
/// [`write`](SnapshotStore::write) of JSON documents; the typed load and save
/// operations are provided on top of them.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the raw document stored under `key`.
    ///
    /// Returns `None` when nothing has been written yet.
    async fn read(&self, key: SnapshotKey) -> SnapshotResult<Option<String>>;

    /// Replaces the raw document stored under `key`.
    async fn write(&self, key: SnapshotKey, contents: String) -> SnapshotResult<()>;

    /// Loads the task collection, empty when never saved.
    async fn load_tasks(&self) -> SnapshotResult<Vec<Task>> {
        let raw = self.read(SnapshotKey::Tasks).await?;
        Ok(decode(SnapshotKey::Tasks, raw)?.unwrap_or_default())
    }

    /// Saves the task collection, preserving order.
    async fn save_tasks(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let contents = encode(SnapshotKey::Tasks, tasks)?;
        self.write(SnapshotKey::Tasks, contents).await
    }

    /// Loads the user collection, empty when never saved.
    async fn load_users(&self) -> SnapshotResult<Vec<User>> {
        let raw = self.read(SnapshotKey::Users).await?;
        Ok(decode(SnapshotKey::Users, raw)?.unwrap_or_default())
    }

    /// Saves the user collection, preserving order.
    async fn save_users(&self, users: &[User]) -> SnapshotResult<()> {
        let contents = encode(SnapshotKey::Users, users)?;
        self.write(SnapshotKey::Users, contents).await
    }

    /// Loads the customization settings, `None` when never saved.
    async fn load_settings(&self) -> SnapshotResult<Option<Customization>> {
        let raw = self.read(SnapshotKey::Customization).await?;
        decode(SnapshotKey::Customization, raw)
    }

    /// Saves the customization settings.
    async fn save_settings(&self, settings: &Customization) -> SnapshotResult<()> {
        let contents = encode(SnapshotKey::Customization, settings)?;
        self.write(SnapshotKey::Customization, contents).await
    }
}

fn decode<T: DeserializeOwned>(key: SnapshotKey, raw: Option<String>) -> SnapshotResult<Option<T>> {
    raw.map(|contents| {
        serde_json::from_str(&contents).map_err(|err| SnapshotError::Decode {
            key,
            source: Arc::new(err),
        })
    })
    .transpose()
}

fn encode<T: Serialize + ?Sized>(key: SnapshotKey, value: &T) -> SnapshotResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| SnapshotError::Encode {
        key,
        source: Arc::new(err),
    })
}

/// Errors returned by snapshot stores.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// The collection could not be serialized.
    #[error("failed to encode snapshot {key}: {source}")]
    Encode {
        /// Snapshot key being written.
        key: SnapshotKey,
        /// Serializer error.
        source: Arc<serde_json::Error>,
    },

    /// The stored document could not be deserialized.
    #[error("failed to decode snapshot {key}: {source}")]
    Decode {
        /// Snapshot key being read.
        key: SnapshotKey,
        /// Deserializer error.
        source: Arc<serde_json::Error>,
    },

    /// Storage-layer failure.
    #[error("snapshot storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
