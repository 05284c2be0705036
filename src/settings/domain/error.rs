//! Errors raised while editing the customization document.

use std::sync::Arc;
use thiserror::Error;

/// Errors returned while validating or applying settings.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// The setting path is empty.
    #[error("setting key is required")]
    EmptyPath,

    /// The setting path contains an empty segment.
    #[error("setting key '{0}' contains an empty segment")]
    EmptySegment(String),

    /// The path does not name a field of the settings document.
    #[error("unknown setting '{0}'")]
    UnknownPath(String),

    /// The field is maintained by the service and cannot be set.
    #[error("setting '{0}' is read-only")]
    ReadOnly(String),

    /// The value does not fit the field's type or range.
    #[error("invalid value for '{path}': {reason}")]
    InvalidValue {
        /// Path or key that was being set.
        path: String,
        /// Validation failure detail.
        reason: String,
    },

    /// A merge payload was not a JSON object.
    #[error("settings payload must be a JSON object")]
    NotAnObject,

    /// The current document could not be converted for editing.
    #[error("failed to encode settings: {0}")]
    Encode(Arc<serde_json::Error>),
}

/// Error returned while parsing a hex colour.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not a #rgb or #rrggbb colour")]
pub struct InvalidColor(pub String);

/// Error returned while parsing the cards-per-row count.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cards per row must be between 1 and 6, got {0}")]
pub struct InvalidCardsPerRow(pub i64);
