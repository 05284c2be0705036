//! Mapping of service errors onto HTTP responses.

use crate::settings::services::SettingsServiceError;
use crate::task::services::TaskRegistryError;
use crate::upload::services::UploadServiceError;
use crate::user::services::UserRegistryError;
use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error returned by handlers, rendered as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input or malformed body (400).
    Validation(String),
    /// Unknown identifier (404).
    NotFound(String),
    /// Image store failure or timeout (502).
    Upload(String),
    /// Unexpected failure (500).
    Internal(String),
}

impl ApiError {
    /// Returns the status code for the error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upload(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Upload(message)
            | Self::Internal(message) => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = self.message(), "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = self.message(), "request rejected");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<TaskRegistryError> for ApiError {
    fn from(error: TaskRegistryError) -> Self {
        match error {
            TaskRegistryError::Domain(err) => Self::Validation(err.to_string()),
            TaskRegistryError::NotFound(id) => Self::NotFound(format!("task not found: {id}")),
            TaskRegistryError::Repository(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<UserRegistryError> for ApiError {
    fn from(error: UserRegistryError) -> Self {
        match error {
            UserRegistryError::Domain(_) | UserRegistryError::EmailTaken(_) => {
                Self::Validation(error.to_string())
            }
            UserRegistryError::NotFound(id) => Self::NotFound(format!("user not found: {id}")),
            UserRegistryError::Repository(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<SettingsServiceError> for ApiError {
    fn from(error: SettingsServiceError) -> Self {
        match error {
            SettingsServiceError::Invalid(err) => Self::Validation(err.to_string()),
            SettingsServiceError::Store(_) | SettingsServiceError::Theme(_) => {
                Self::Internal(error.to_string())
            }
        }
    }
}

impl From<UploadServiceError> for ApiError {
    fn from(error: UploadServiceError) -> Self {
        match error {
            UploadServiceError::Invalid(err) => Self::Validation(err.to_string()),
            UploadServiceError::Store(_) | UploadServiceError::TimedOut(_) => {
                Self::Upload(error.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
