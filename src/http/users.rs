//! User endpoints.

use super::{ApiError, AppState};
use crate::user::{
    domain::{User, UserStatus},
    services::RegisterUserRequest,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RegisterUserBody {
    name: String,
    email: String,
    department: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateUserBody {
    id: String,
    status: Option<String>,
    is_online: Option<bool>,
}

pub(super) async fn list_users<C>(
    State(state): State<AppState<C>>,
) -> Result<Json<Vec<User>>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.users.list_users().await?))
}

pub(super) async fn register_user<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<RegisterUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let request = RegisterUserRequest::new(body.name, body.email, body.department);
    let user = state.users.register_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Applies a review decision and/or a presence change as one write.
///
/// The status is parsed before the service is called so that an unknown
/// value is reported as a validation error.
pub(super) async fn update_user<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<UpdateUserBody>, JsonRejection>,
) -> Result<Json<User>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let status = body
        .status
        .as_deref()
        .map(UserStatus::try_from)
        .transpose()
        .map_err(|err| ApiError::Validation(err.to_string()))?;

    let user = state
        .users
        .review_and_set_presence(&body.id, status, body.is_online)
        .await?;
    Ok(Json(user))
}
