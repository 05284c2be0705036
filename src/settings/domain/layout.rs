//! Layout options of the customization document.

use super::error::InvalidCardsPerRow;
use serde::{Deserialize, Serialize};

/// Side of the page holding the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    /// Sidebar on the left.
    #[default]
    Left,
    /// Sidebar on the right.
    Right,
}

/// Positioning of the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Always at the top of the viewport.
    #[default]
    Fixed,
    /// Scrolls until it reaches the top, then sticks.
    Sticky,
    /// Scrolls with the page.
    Static,
}

/// Maximum width of the main content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentWidth {
    /// Full viewport width.
    Full,
    /// Centred 1280px container.
    #[default]
    Container,
    /// Centred 1024px column.
    Narrow,
}

/// Visual treatment of dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    /// Drop shadow.
    #[default]
    Elevated,
    /// Thin border.
    Outlined,
    /// No decoration.
    Flat,
}

/// Number of dashboard cards per row, `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CardsPerRow(u8);

impl CardsPerRow {
    /// Creates a validated count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardsPerRow`] when the value lies outside `1..=6`.
    pub fn new(value: i64) -> Result<Self, InvalidCardsPerRow> {
        u8::try_from(value)
            .ok()
            .filter(|count| (1..=6).contains(count))
            .map(Self)
            .ok_or(InvalidCardsPerRow(value))
    }

    /// Returns the count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for CardsPerRow {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<i64> for CardsPerRow {
    type Error = InvalidCardsPerRow;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardsPerRow> for u8 {
    fn from(value: CardsPerRow) -> Self {
        value.0
    }
}

/// Page layout options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutSettings {
    /// Sidebar side.
    pub sidebar_position: SidebarPosition,
    /// Header positioning.
    pub header_style: HeaderStyle,
    /// Content column width.
    pub content_width: ContentWidth,
    /// Whether breadcrumbs are shown.
    pub show_breadcrumbs: bool,
    /// Dashboard cards per row.
    pub cards_per_row: CardsPerRow,
    /// Card decoration.
    pub card_style: CardStyle,
    /// Whether cards show icons.
    pub show_card_icons: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            sidebar_position: SidebarPosition::Left,
            header_style: HeaderStyle::Fixed,
            content_width: ContentWidth::Container,
            show_breadcrumbs: true,
            cards_per_row: CardsPerRow::default(),
            card_style: CardStyle::Elevated,
            show_card_icons: true,
        }
    }
}
