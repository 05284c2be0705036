//! Directory-backed snapshot store using capability-based filesystem access.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::persistence::ports::{SnapshotError, SnapshotKey, SnapshotResult, SnapshotStore};

/// Snapshot store writing one JSON file per key inside a data directory.
///
/// Writes go to a temporary file that is renamed over the target, so a
/// reader never observes a half-written document.
#[derive(Debug, Clone)]
pub struct DirectorySnapshotStore {
    dir: Arc<Dir>,
}

impl DirectorySnapshotStore {
    /// Opens the data directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> SnapshotResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(SnapshotError::storage)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(SnapshotError::storage)?;
        tracing::debug!(path = %path, "opened snapshot directory");
        Ok(Self { dir: Arc::new(dir) })
    }
}

fn file_name(key: SnapshotKey) -> String {
    format!("{key}.json")
}

fn temp_file_name(key: SnapshotKey) -> String {
    format!(".{key}.json.tmp")
}

/// Runs a blocking filesystem operation on the blocking thread pool.
async fn run_blocking<F, T>(f: F) -> SnapshotResult<T>
where
    F: FnOnce() -> SnapshotResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| SnapshotError::storage(io::Error::other(format!("task join error: {err}"))))?
}

#[async_trait]
impl SnapshotStore for DirectorySnapshotStore {
    async fn read(&self, key: SnapshotKey) -> SnapshotResult<Option<String>> {
        let dir = Arc::clone(&self.dir);
        run_blocking(move || match dir.read_to_string(file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::storage(err)),
        })
        .await
    }

    async fn write(&self, key: SnapshotKey, contents: String) -> SnapshotResult<()> {
        let dir = Arc::clone(&self.dir);
        run_blocking(move || {
            let temp = temp_file_name(key);
            dir.write(&temp, contents.as_bytes())
                .map_err(SnapshotError::storage)?;
            dir.rename(&temp, &dir, file_name(key))
                .map_err(SnapshotError::storage)
        })
        .await
    }
}
