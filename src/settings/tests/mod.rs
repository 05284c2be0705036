//! Unit tests for the customization context.
