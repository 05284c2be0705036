//! Service layer for reading and editing the customization document.

use crate::persistence::{SnapshotError, SnapshotStore};
use crate::settings::{
    domain::{Customization, SettingPath, SettingsError},
    theme,
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for customization operations.
#[derive(Debug, Error)]
pub enum SettingsServiceError {
    /// The edit was rejected.
    #[error(transparent)]
    Invalid(#[from] SettingsError),

    /// The document could not be loaded or saved.
    #[error(transparent)]
    Store(#[from] SnapshotError),

    /// The theme stylesheet could not be rendered.
    #[error("failed to render theme: {0}")]
    Theme(Arc<minijinja::Error>),
}

/// Result type for customization operations.
pub type SettingsServiceResult<T> = Result<T, SettingsServiceError>;

/// Customization document orchestration service.
///
/// Edits are serialized so that concurrent writers never lose each other's
/// changes.
pub struct CustomizationService<C>
where
    C: Clock + Send + Sync,
{
    store: Arc<dyn SnapshotStore>,
    clock: Arc<C>,
    writer: Arc<Mutex<()>>,
}

impl<C> Clone for CustomizationService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<C> CustomizationService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new customization service.
    #[must_use]
    pub fn new(store: Arc<dyn SnapshotStore>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the saved document, or the defaults when none was saved.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Store`] when the document cannot be
    /// loaded.
    pub async fn current_settings(&self) -> SettingsServiceResult<Customization> {
        Ok(self.store.load_settings().await?.unwrap_or_default())
    }

    /// Sets the field named by the dot-delimited `key` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Invalid`] when the key or value is
    /// rejected, or [`SettingsServiceError::Store`] when persistence fails.
    pub async fn apply_setting(&self, key: &str, value: Value) -> SettingsServiceResult<Customization> {
        let path: SettingPath = key.parse()?;
        let _guard = self.writer.lock().await;
        let mut settings = self.current_settings().await?;
        settings.apply_setting(&path, value, &*self.clock)?;
        self.store.save_settings(&settings).await?;
        tracing::info!(setting = %path, "customization setting updated");
        Ok(settings)
    }

    /// Replaces the top-level fields present in `patch`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Invalid`] when the patch is rejected,
    /// or [`SettingsServiceError::Store`] when persistence fails.
    pub async fn merge_settings(&self, patch: Value) -> SettingsServiceResult<Customization> {
        let _guard = self.writer.lock().await;
        let mut settings = self.current_settings().await?;
        settings.merge(patch, &*self.clock)?;
        self.store.save_settings(&settings).await?;
        tracing::info!("customization settings merged");
        Ok(settings)
    }

    /// Renders the theme stylesheet for the current document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Store`] when the document cannot be
    /// loaded, or [`SettingsServiceError::Theme`] when rendering fails.
    pub async fn theme_stylesheet(&self) -> SettingsServiceResult<String> {
        let settings = self.current_settings().await?;
        theme::render_stylesheet(&settings).map_err(|err| SettingsServiceError::Theme(Arc::new(err)))
    }
}
