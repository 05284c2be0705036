//! Dot-path editing of the customization document.

use super::{Customization, SettingsError};
use mockable::Clock;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Field maintained by the document itself.
const UPDATED_AT_KEY: &str = "updatedAt";

/// Dot-delimited path naming a field of the settings document, such as
/// `colors.primary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingPath {
    segments: Vec<String>,
}

impl SettingPath {
    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for SettingPath {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SettingsError::EmptyPath);
        }
        let segments: Vec<String> = trimmed.split('.').map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(SettingsError::EmptySegment(trimmed.to_owned()));
        }
        if segments.first().is_some_and(|head| head == UPDATED_AT_KEY) {
            return Err(SettingsError::ReadOnly(trimmed.to_owned()));
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl Customization {
    /// Replaces the field at `path` with `value` and stamps `updatedAt`.
    ///
    /// Only existing fields can be set; no new structure is created. The
    /// document is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownPath`] when `path` names no field, or
    /// [`SettingsError::InvalidValue`] when `value` does not fit it.
    pub fn apply_setting(
        &mut self,
        path: &SettingPath,
        value: Value,
        clock: &impl Clock,
    ) -> Result<(), SettingsError> {
        let mut document = self.to_document()?;
        let slot = path
            .segments()
            .iter()
            .try_fold(&mut document, |node, segment| {
                node.as_object_mut().and_then(|fields| fields.get_mut(segment))
            })
            .ok_or_else(|| SettingsError::UnknownPath(path.to_string()))?;
        *slot = value;

        self.replace_from(document, &path.to_string(), clock)
    }

    /// Replaces whole top-level fields with those present in `patch`.
    ///
    /// A nested object in `patch` replaces the corresponding section
    /// entirely and must therefore be complete. `updatedAt` in the patch is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotAnObject`] when `patch` is not an object,
    /// [`SettingsError::UnknownPath`] for an unknown key, or
    /// [`SettingsError::InvalidValue`] when a value does not fit its field.
    pub fn merge(&mut self, patch: Value, clock: &impl Clock) -> Result<(), SettingsError> {
        let Value::Object(entries) = patch else {
            return Err(SettingsError::NotAnObject);
        };
        let mut document = self.to_document()?;
        let fields = document
            .as_object_mut()
            .ok_or(SettingsError::NotAnObject)?;
        merge_fields(fields, entries)?;

        self.replace_from(document, "settings", clock)
    }

    fn to_document(&self) -> Result<Value, SettingsError> {
        serde_json::to_value(self).map_err(|err| SettingsError::Encode(Arc::new(err)))
    }

    fn replace_from(
        &mut self,
        document: Value,
        path: &str,
        clock: &impl Clock,
    ) -> Result<(), SettingsError> {
        let mut next: Self =
            serde_json::from_value(document).map_err(|err| SettingsError::InvalidValue {
                path: path.to_owned(),
                reason: err.to_string(),
            })?;
        next.updated_at = Some(clock.utc());
        *self = next;
        Ok(())
    }
}

fn merge_fields(
    fields: &mut Map<String, Value>,
    entries: Map<String, Value>,
) -> Result<(), SettingsError> {
    for (key, value) in entries {
        if key == UPDATED_AT_KEY {
            continue;
        }
        let slot = fields
            .get_mut(&key)
            .ok_or_else(|| SettingsError::UnknownPath(key.clone()))?;
        *slot = value;
    }
    Ok(())
}
