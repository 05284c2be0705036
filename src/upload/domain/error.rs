//! Validation errors for image uploads.

use thiserror::Error;

/// Reasons an upload is refused before reaching the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadValidationError {
    /// The request carried no bytes.
    #[error("no file provided")]
    Empty,

    /// The content type is not `image/*`.
    #[error("file must be an image, got '{0}'")]
    NotAnImage(String),

    /// The file exceeds the size ceiling.
    #[error("image must be at most {limit} bytes, got {size}")]
    TooLarge {
        /// Size of the rejected file.
        size: usize,
        /// Configured ceiling.
        limit: usize,
    },
}
