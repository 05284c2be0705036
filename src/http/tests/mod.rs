//! Router tests for the HTTP surface.
