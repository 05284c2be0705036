//! The customization settings document.

use super::{HexColor, LayoutSettings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand colour palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPalette {
    /// Primary brand colour.
    pub primary: HexColor,
    /// Secondary surface colour.
    pub secondary: HexColor,
    /// Accent colour.
    pub accent: HexColor,
    /// Page background.
    pub background: HexColor,
    /// Success state colour.
    pub success: HexColor,
    /// Warning state colour.
    pub warning: HexColor,
    /// Error state colour.
    pub error: HexColor,
    /// Informational state colour.
    pub info: HexColor,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: HexColor::literal("#e84d0e"),
            secondary: HexColor::literal("#f0f0f0"),
            accent: HexColor::literal("#4caf50"),
            background: HexColor::literal("#f8f9fa"),
            success: HexColor::literal("#22c55e"),
            warning: HexColor::literal("#f59e0b"),
            error: HexColor::literal("#ef4444"),
            info: HexColor::literal("#3b82f6"),
        }
    }
}

/// Texts shown on the welcome and login pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentSettings {
    /// Welcome page heading.
    pub welcome_title: String,
    /// Welcome page introduction.
    pub welcome_description: String,
    /// Login page heading.
    pub login_title: String,
    /// Login page subheading.
    pub login_subtitle: String,
    /// Login page instructions.
    pub login_instructions: String,
    /// Footer copyright line.
    pub copyright: String,
    /// Footer version line.
    pub version: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            welcome_title: "Welcome to Engineering and General Services Data Monitoring System"
                .to_owned(),
            welcome_description: concat!(
                "A system providing solutions to help professionals and administrators manage ",
                "operations with ease. The Data Monitoring System offers real-time insights, ",
                "actionable data, and advanced analytics, ensuring the Hospital's Engineering ",
                "and General Services run efficiently and effectively."
            )
            .to_owned(),
            login_title: "Task Tracker System".to_owned(),
            login_subtitle: "Engineering & General Services".to_owned(),
            login_instructions:
                "Please sign in with your credentials to access the task tracking system."
                    .to_owned(),
            copyright: "\u{a9} 2024 Ilocos Sur Medical Center. All rights reserved.".to_owned(),
            version: "Version 1.0-2024-12-21".to_owned(),
        }
    }
}

/// Logo and favicon URLs; empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LogoSettings {
    /// Organisation logo.
    pub main_logo: String,
    /// Department logo.
    pub dept_logo: String,
    /// Browser favicon.
    pub favicon: String,
}

/// The customization settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Customization {
    /// Browser and header title.
    pub system_title: String,
    /// Organisation name.
    pub organization_name: String,
    /// Department name.
    pub department_name: String,
    /// Header tagline.
    pub tagline: String,
    /// Colour palette.
    pub colors: ColorPalette,
    /// Layout options.
    pub layout: LayoutSettings,
    /// Page texts.
    pub content: ContentSettings,
    /// Logo URLs.
    pub logos: LogoSettings,
    /// Time of the latest edit, `None` until first edited.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            system_title: "Task Tracker System".to_owned(),
            organization_name: "Ilocos Sur Medical Center".to_owned(),
            department_name: "Engineering & General Services".to_owned(),
            tagline: "Empowering Smarter Healthcare Operations".to_owned(),
            colors: ColorPalette::default(),
            layout: LayoutSettings::default(),
            content: ContentSettings::default(),
            logos: LogoSettings::default(),
            updated_at: None,
        }
    }
}
