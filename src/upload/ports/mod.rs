//! Port contract for image storage.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use thiserror::Error;

/// Result type for image store operations.
pub type ImageStoreResult<T> = Result<T, ImageStoreError>;

/// Storage backend for uploaded images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores `bytes` under `object_name` and returns its public URL.
    ///
    /// # Errors
    ///
    /// Returns [`ImageStoreError`] when the object cannot be written.
    async fn put(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> ImageStoreResult<String>;
}

/// Errors returned by image stores.
#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    /// The store rejected or failed the write.
    #[error("image store failure: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl ImageStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
