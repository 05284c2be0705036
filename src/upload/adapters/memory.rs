//! In-memory image store with failure injection.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use super::public_url;
use crate::upload::ports::{ImageStore, ImageStoreError, ImageStoreResult};

/// Image store keeping objects in process memory.
#[derive(Debug, Clone)]
pub struct InMemoryImageStore {
    public_prefix: String,
    objects: Arc<Mutex<HashMap<String, Bytes>>>,
    failing: Arc<AtomicBool>,
    latency: Option<Duration>,
}

impl InMemoryImageStore {
    /// Creates an empty store serving objects under `public_prefix`.
    #[must_use]
    pub fn new(public_prefix: impl Into<String>) -> Self {
        Self {
            public_prefix: public_prefix.into(),
            objects: Arc::default(),
            failing: Arc::default(),
            latency: None,
        }
    }

    /// Delays every write by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes subsequent writes fail or succeed.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns the bytes stored under `object_name`.
    #[must_use]
    pub fn object(&self, object_name: &str) -> Option<Bytes> {
        self.objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(object_name)
            .cloned()
    }

    /// Returns the number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn put(
        &self,
        object_name: &str,
        _content_type: &str,
        bytes: Bytes,
    ) -> ImageStoreResult<String> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ImageStoreError::backend(io::Error::other(
                "image store unavailable",
            )));
        }
        self.objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(object_name.to_owned(), bytes);
        Ok(public_url(&self.public_prefix, object_name))
    }
}
