//! Image uploads for logos and task attachments.
//!
//! Uploaded images are validated against an [`domain::UploadPolicy`] and
//! handed to an [`ports::ImageStore`], which returns the public URL of the
//! stored file.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
