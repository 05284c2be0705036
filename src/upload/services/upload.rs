//! Service layer validating uploads and storing them with a bounded timeout.

use crate::upload::{
    domain::{ImageUpload, UploadPolicy, UploadValidationError},
    ports::{ImageStore, ImageStoreError},
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Service-level errors for image uploads.
#[derive(Debug, Error)]
pub enum UploadServiceError {
    /// The upload was refused by the policy.
    #[error(transparent)]
    Invalid(#[from] UploadValidationError),

    /// The store failed the write.
    #[error(transparent)]
    Store(#[from] ImageStoreError),

    /// The store did not answer within the timeout.
    #[error("image store did not respond within {0:?}")]
    TimedOut(Duration),
}

/// Result type for upload operations.
pub type UploadServiceResult<T> = Result<T, UploadServiceError>;

/// Upload orchestration service.
#[derive(Clone)]
pub struct UploadService {
    store: Arc<dyn ImageStore>,
    policy: UploadPolicy,
    timeout: Duration,
}

impl UploadService {
    /// Creates a new upload service.
    #[must_use]
    pub fn new(store: Arc<dyn ImageStore>, policy: UploadPolicy, timeout: Duration) -> Self {
        Self {
            store,
            policy,
            timeout,
        }
    }

    /// Returns the acceptance policy.
    #[must_use]
    pub const fn policy(&self) -> UploadPolicy {
        self.policy
    }

    /// Validates `upload`, stores it under a fresh name and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns [`UploadServiceError::Invalid`] when the policy refuses the
    /// upload, [`UploadServiceError::Store`] when the store fails, or
    /// [`UploadServiceError::TimedOut`] when it does not answer in time.
    pub async fn upload(&self, upload: ImageUpload) -> UploadServiceResult<String> {
        self.policy.check(&upload)?;
        let object_name = format!("{}.{}", Uuid::new_v4(), upload.extension());

        let url = tokio::time::timeout(
            self.timeout,
            self.store
                .put(&object_name, upload.content_type(), upload.bytes().clone()),
        )
        .await
        .map_err(|_| UploadServiceError::TimedOut(self.timeout))??;

        tracing::info!(
            object = %object_name,
            size = upload.bytes().len(),
            content_type = upload.content_type(),
            "image uploaded"
        );
        Ok(url)
    }
}
