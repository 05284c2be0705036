//! Application services for the customization document.

mod customization;

pub use customization::{CustomizationService, SettingsServiceError, SettingsServiceResult};
