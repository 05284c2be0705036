//! Hex colour value.

use super::error::InvalidColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS colour in `#rgb` or `#rrggbb` notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses a hex colour.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColor`] when the value is not `#` followed by three
    /// or six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidColor> {
        let raw = value.into();
        let trimmed = raw.trim();
        let valid = trimmed.strip_prefix('#').is_some_and(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        });
        if !valid {
            return Err(InvalidColor(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the colour as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(super) fn literal(value: &'static str) -> Self {
        Self(value.to_owned())
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
