//! Domain model for image uploads.

mod error;
mod image;

pub use error::UploadValidationError;
pub use image::{DEFAULT_MAX_UPLOAD_BYTES, ImageUpload, UploadPolicy};
