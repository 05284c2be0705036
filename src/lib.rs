//! Task tracker: task assignment, account review and branding service.
//!
//! An operator assigns tasks to staff, reviews account registrations and
//! customizes the look of the client; staff report progress on their tasks.
//! Every change is announced through a best-effort notification channel.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, files, logging)
//! - **Services**: Orchestration over injected ports and a clock
//!
//! # Modules
//!
//! - [`task`]: Task assignment, updates and lookup
//! - [`user`]: Account registration, review and presence
//! - [`settings`]: Customization document and theme stylesheet
//! - [`notification`]: Notification events and delivery
//! - [`upload`]: Image upload validation and storage
//! - [`persistence`]: Whole-collection snapshot storage
//! - [`http`]: axum router over the services
//! - [`config`]: Layered configuration
//! - [`app`]: Assembly of configuration into services

pub mod app;
pub mod config;
pub mod http;
pub mod notification;
pub mod persistence;
pub mod settings;
pub mod task;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test_support;
