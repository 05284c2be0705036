//! Task endpoints.

use super::{ApiError, AppState};
use crate::task::{
    domain::{Task, TaskUpdate},
    services::CreateTaskRequest,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListTasksQuery {
    user_email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct CreateTaskBody {
    description: String,
    assigned_staff: String,
    area: String,
    date_assigned: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateTaskBody {
    id: String,
    #[serde(flatten)]
    update: TaskUpdate,
}

pub(super) async fn list_tasks<C>(
    State(state): State<AppState<C>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let tasks = match query.user_email {
        Some(staff) => state.tasks.list_tasks_for_user(&staff).await?,
        None => state.tasks.list_all_tasks().await?,
    };
    Ok(Json(tasks))
}

pub(super) async fn create_task<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let request = CreateTaskRequest::new(body.description, body.assigned_staff)
        .with_area(body.area)
        .with_optional_date_assigned(body.date_assigned)
        .with_optional_deadline(body.deadline);
    let task = state.tasks.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub(super) async fn update_task<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let Json(UpdateTaskBody { id, update }) = payload?;
    Ok(Json(state.tasks.update_task(&id, update).await?))
}

pub(super) async fn get_task<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.tasks.find_task(&id).await?))
}
