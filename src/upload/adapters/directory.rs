//! Directory-backed image store using capability-based filesystem access.

use async_trait::async_trait;
use bytes::Bytes;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use super::public_url;
use crate::upload::ports::{ImageStore, ImageStoreError, ImageStoreResult};

/// Image store writing each object as a file in an upload directory that is
/// served under a public URL prefix.
#[derive(Debug, Clone)]
pub struct DirectoryImageStore {
    dir: Arc<Dir>,
    public_prefix: String,
}

impl DirectoryImageStore {
    /// Opens the upload directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ImageStoreError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path, public_prefix: impl Into<String>) -> ImageStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(ImageStoreError::backend)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(ImageStoreError::backend)?;
        tracing::debug!(path = %path, "opened upload directory");
        Ok(Self {
            dir: Arc::new(dir),
            public_prefix: public_prefix.into(),
        })
    }
}

#[async_trait]
impl ImageStore for DirectoryImageStore {
    async fn put(
        &self,
        object_name: &str,
        _content_type: &str,
        bytes: Bytes,
    ) -> ImageStoreResult<String> {
        let dir = Arc::clone(&self.dir);
        let name = object_name.to_owned();
        tokio::task::spawn_blocking(move || dir.write(&name, &bytes))
            .await
            .map_err(|err| ImageStoreError::backend(io::Error::other(format!("task join error: {err}"))))?
            .map_err(ImageStoreError::backend)?;
        Ok(public_url(&self.public_prefix, object_name))
    }
}
