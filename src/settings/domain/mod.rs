//! Domain model for the customization document.

mod color;
mod customization;
mod error;
mod layout;
mod path;

pub use color::HexColor;
pub use customization::{ColorPalette, ContentSettings, Customization, LogoSettings};
pub use error::{InvalidCardsPerRow, InvalidColor, SettingsError};
pub use layout::{CardStyle, CardsPerRow, ContentWidth, HeaderStyle, LayoutSettings, SidebarPosition};
pub use path::SettingPath;
