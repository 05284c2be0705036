//! Application service for image uploads.

mod upload;

pub use upload::{UploadService, UploadServiceError, UploadServiceResult};
