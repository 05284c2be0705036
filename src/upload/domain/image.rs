//! Uploaded image payload and acceptance policy.

use super::UploadValidationError;
use bytes::Bytes;

/// Default size ceiling of 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Extension used when neither the file name nor the content type gives one.
const FALLBACK_EXTENSION: &str = "img";

/// Raw image submitted for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    bytes: Bytes,
    content_type: String,
    file_name: Option<String>,
}

impl ImageUpload {
    /// Creates an upload from the body and its declared content type.
    #[must_use]
    pub fn new(bytes: Bytes, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into().trim().to_ascii_lowercase(),
            file_name: None,
        }
    }

    /// Sets the client-side file name.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Returns the file contents.
    #[must_use]
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Returns the normalized content type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the client-side file name.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Returns the file extension for the stored object.
    ///
    /// Prefers the extension of the client file name, then the image
    /// subtype of the content type.
    #[must_use]
    pub fn extension(&self) -> String {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext);
        let from_type = self
            .content_type
            .strip_prefix("image/")
            .map(|subtype| match subtype.split(['+', ';']).next() {
                Some("jpeg") => "jpg",
                Some(other) => other,
                None => subtype,
            });

        from_name
            .into_iter()
            .chain(from_type)
            .map(|candidate| candidate.trim().to_ascii_lowercase())
            .find(|candidate| {
                !candidate.is_empty()
                    && candidate.len() <= 8
                    && candidate.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .unwrap_or_else(|| FALLBACK_EXTENSION.to_owned())
    }
}

/// Acceptance rules applied before an upload reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    max_bytes: usize,
}

impl UploadPolicy {
    /// Creates a policy with the given size ceiling.
    #[must_use]
    pub const fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Returns the size ceiling in bytes.
    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Checks that the upload is a non-empty image within the ceiling.
    ///
    /// # Errors
    ///
    /// Returns the first [`UploadValidationError`] that applies.
    pub fn check(&self, upload: &ImageUpload) -> Result<(), UploadValidationError> {
        let size = upload.bytes().len();
        if size == 0 {
            return Err(UploadValidationError::Empty);
        }
        if !upload.content_type().starts_with("image/") {
            return Err(UploadValidationError::NotAnImage(
                upload.content_type().to_owned(),
            ));
        }
        if size > self.max_bytes {
            return Err(UploadValidationError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}
