//! Theme configuration for the editor UI.
//!
//! Defines the colors used for section labels, focused fields, the edit
//! prompt, placeholders, and notification banners. Themes are
//! serializable so they can be loaded from configuration files.

use ratatui::style::Color as RatColor;
use serde::{Deserialize, Serialize};


/// A named color that can be converted to a ratatui color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    White,
    Gray,
    DarkGray,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Convert to the ratatui color type.
    pub fn to_ratatui(self) -> RatColor {
        match self {
            Color::Default => RatColor::Reset,
            Color::Red => RatColor::Red,
            Color::Green => RatColor::Green,
            Color::Yellow => RatColor::Yellow,
            Color::Blue => RatColor::Blue,
            Color::Cyan => RatColor::Cyan,
            Color::Magenta => RatColor::Magenta,
            Color::White => RatColor::White,
            Color::Gray => RatColor::Gray,
            Color::DarkGray => RatColor::DarkGray,
            Color::Rgb(r, g, b) => RatColor::Rgb(r, g, b),
        }
    }
}


/// A complete color theme for the Pageforge editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// The page title in the header.
    pub page_title: Color,
    /// Section kind labels ("Hero", "Text", ...).
    pub section_label: Color,
    /// The border/marker of the selected section.
    pub selection: Color,
    /// The focused field inside the selected section.
    pub field_focus: Color,
    /// Placeholder text for absent fields and unresolvable images.
    pub placeholder: Color,
    /// The edit prompt and draft text.
    pub edit: Color,
    /// Informational notifications.
    pub info: Color,
    /// Success notifications (save confirmation).
    pub success: Color,
    /// Warnings.
    pub warning: Color,
    /// Errors.
    pub error: Color,
    /// Footer text.
    pub footer: Color,
}

impl Theme {
    /// The built-in default theme.
    pub fn default_theme() -> Theme {
        Theme {
            name: "default".into(),
            page_title: Color::White,
            section_label: Color::Cyan,
            selection: Color::Yellow,
            field_focus: Color::Cyan,
            placeholder: Color::DarkGray,
            edit: Color::Cyan,
            info: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            footer: Color::DarkGray,
        }
    }
}
