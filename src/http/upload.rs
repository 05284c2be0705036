//! Image upload endpoint.

use super::{ApiError, AppState};
use crate::upload::domain::ImageUpload;
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::BytesRejection},
    http::{HeaderMap, StatusCode, header},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UploadQuery {
    file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct UploadResponse {
    url: String,
}

pub(super) async fn upload_image<C>(
    State(state): State<AppState<C>>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let bytes = body?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let mut upload = ImageUpload::new(bytes, content_type);
    if let Some(name) = query.file_name {
        upload = upload.with_file_name(name);
    }
    let url = state.uploads.upload(upload).await?;
    Ok((StatusCode::CREATED, Json(UploadResponse { url })))
}
