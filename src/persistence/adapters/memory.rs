//! In-memory snapshot store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::persistence::ports::{SnapshotError, SnapshotKey, SnapshotResult, SnapshotStore};

/// Snapshot store holding serialized documents in process memory.
///
/// Contents are lost on restart. Documents are still serialized so the
/// round trip matches the on-disk adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<HashMap<SnapshotKey, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> SnapshotError {
    SnapshotError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn read(&self, key: SnapshotKey) -> SnapshotResult<Option<String>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(&key).cloned())
    }

    async fn write(&self, key: SnapshotKey, contents: String) -> SnapshotResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert(key, contents);
        Ok(())
    }
}
