//! HTTP surface of the tracker.
//!
//! JSON endpoints for tasks, users and settings plus raw-body image upload.
//! Errors are returned as `{"error": message}` with the status chosen by
//! [`ApiError`].

mod error;
mod settings;
mod tasks;
mod upload;
mod users;

pub use error::ApiError;

use crate::notification::ports::NotificationSink;
use crate::settings::services::CustomizationService;
use crate::task::{ports::TaskRepository, services::TaskRegistryService};
use crate::upload::services::UploadService;
use crate::user::{ports::UserRepository, services::UserRegistryService};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use mockable::Clock;

/// Task registry as wired into the HTTP state.
pub type TaskRegistry<C> = TaskRegistryService<dyn TaskRepository, dyn NotificationSink, C>;

/// User registry as wired into the HTTP state.
pub type UserRegistry<C> = UserRegistryService<dyn UserRepository, dyn NotificationSink, C>;

/// Services shared by all handlers.
pub struct AppState<C>
where
    C: Clock + Send + Sync,
{
    /// Task registry.
    pub tasks: TaskRegistry<C>,
    /// User registry.
    pub users: UserRegistry<C>,
    /// Customization document.
    pub settings: CustomizationService<C>,
    /// Image uploads.
    pub uploads: UploadService,
}

impl<C> Clone for AppState<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            users: self.users.clone(),
            settings: self.settings.clone(),
            uploads: self.uploads.clone(),
        }
    }
}

/// Builds the router over `state`.
pub fn router<C>(state: AppState<C>) -> Router
where
    C: Clock + Send + Sync + 'static,
{
    // One byte over the ceiling so oversize bodies are caught by the limit.
    let upload_limit = state.uploads.policy().max_bytes().saturating_add(1);

    Router::new()
        .route(
            "/tasks",
            get(tasks::list_tasks::<C>)
                .post(tasks::create_task::<C>)
                .put(tasks::update_task::<C>),
        )
        .route("/tasks/{id}", get(tasks::get_task::<C>))
        .route(
            "/users",
            get(users::list_users::<C>)
                .post(users::register_user::<C>)
                .put(users::update_user::<C>),
        )
        .route(
            "/settings",
            get(settings::get_settings::<C>)
                .post(settings::merge_settings::<C>)
                .put(settings::apply_setting::<C>),
        )
        .route("/settings/theme.css", get(settings::theme_stylesheet::<C>))
        .route(
            "/upload",
            post(upload::upload_image::<C>).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests;
