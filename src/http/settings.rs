//! Customization endpoints.

use super::{ApiError, AppState};
use crate::settings::domain::Customization;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use mockable::Clock;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct ApplySettingBody {
    key: String,
    value: Value,
}

pub(super) async fn get_settings<C>(
    State(state): State<AppState<C>>,
) -> Result<Json<Customization>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.settings.current_settings().await?))
}

pub(super) async fn merge_settings<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Customization>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let Json(patch) = payload?;
    Ok(Json(state.settings.merge_settings(patch).await?))
}

pub(super) async fn apply_setting<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<ApplySettingBody>, JsonRejection>,
) -> Result<Json<Customization>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let Json(ApplySettingBody { key, value }) = payload?;
    Ok(Json(state.settings.apply_setting(&key, value).await?))
}

pub(super) async fn theme_stylesheet<C>(
    State(state): State<AppState<C>>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let css = state.settings.theme_stylesheet().await?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
