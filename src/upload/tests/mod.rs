//! Unit tests for the upload context.
