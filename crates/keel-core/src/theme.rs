//! # Theming
//!
//! A [`Theme`] is a bag of per-role [`Style`]s. The engine keeps a stack of
//! themes; every widget built while a theme is on top copies the style for its
//! role into its own attributes, so a pushed theme affects exactly the widgets
//! built inside the push/pop bracket.
//!
//! ```rust
//! use keel_core::*;
//!
//! let mut light = Theme::default();
//! light.panel.background = Color::from_hex("#F5F5F5");
//! light.label.text = Color::from_hex("#222222");
//! ```
//!
//! Styles are plain data; nothing in the engine branches on particular values.

use crate::{Color, FontId};

/// Visual attributes of one widget role.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub background: Color,
    /// Background while hovered.
    pub hover: Color,
    /// Background while pressed, focused or dragged.
    pub active: Color,
    pub border: Color,
    pub text: Color,
    pub corner_radius: f32,
    pub border_width: f32,
    pub font: FontId,
}

impl Style {
    pub const fn flat(background: Color, text: Color) -> Self {
        Self {
            background,
            hover: background,
            active: background,
            border: Color::TRANSPARENT,
            text,
            corner_radius: 0.0,
            border_width: 0.0,
            font: FontId(0),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::flat(Color::TRANSPARENT, Color::WHITE)
    }
}

/// Styles for every widget role.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Window body and border.
    pub window: Style,
    /// Window title bar; `text` is the title color.
    pub title_bar: Style,
    pub button: Style,
    pub label: Style,
    /// Text boxes; `active` doubles as the caret color.
    pub input: Style,
    pub panel: Style,
    /// Scroll region track.
    pub scrollbar: Style,
    pub scrollbar_thumb: Style,
    pub tree_node: Style,
    /// Checkbox square; `active` is the fill when checked.
    pub checkbox: Style,
    /// Tint for icons.
    pub icon: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let on_surface = Color::from_hex("#DDDDDD");
        Self {
            window: Style {
                background: Color::from_hex("#1E1E1E"),
                hover: Color::from_hex("#1E1E1E"),
                active: Color::from_hex("#232323"),
                border: Color::from_hex("#555555"),
                text: on_surface,
                corner_radius: 4.0,
                border_width: 1.0,
                font: FontId(0),
            },
            title_bar: Style {
                background: Color::from_hex("#2A2A2A"),
                hover: Color::from_hex("#303030"),
                active: Color::from_hex("#34AF82"),
                border: Color::TRANSPARENT,
                text: Color::WHITE,
                corner_radius: 4.0,
                border_width: 0.0,
                font: FontId(0),
            },
            button: Style {
                background: Color::from_hex("#34AF82"),
                hover: Color::from_hex("#2A8F6A"),
                active: Color::from_hex("#1F7556"),
                border: Color::TRANSPARENT,
                text: Color::WHITE,
                corner_radius: 3.0,
                border_width: 0.0,
                font: FontId(0),
            },
            label: Style::flat(Color::TRANSPARENT, on_surface),
            input: Style {
                background: Color::from_hex("#121212"),
                hover: Color::from_hex("#161616"),
                active: Color::from_hex("#88CCFF"),
                border: Color::from_hex("#555555"),
                text: on_surface,
                corner_radius: 2.0,
                border_width: 1.0,
                font: FontId(0),
            },
            panel: Style {
                border: Color::from_hex("#333333"),
                border_width: 1.0,
                ..Style::flat(Color::from_hex("#181818"), on_surface)
            },
            scrollbar: Style::flat(Color(0xDD, 0xDD, 0xDD, 32), on_surface),
            scrollbar_thumb: Style {
                hover: Color(0xDD, 0xDD, 0xDD, 180),
                active: Color(0xDD, 0xDD, 0xDD, 220),
                corner_radius: 3.0,
                ..Style::flat(Color(0xDD, 0xDD, 0xDD, 140), on_surface)
            },
            tree_node: Style {
                hover: Color(0xFF, 0xFF, 0xFF, 20),
                ..Style::flat(Color::TRANSPARENT, on_surface)
            },
            checkbox: Style {
                background: Color::from_hex("#121212"),
                hover: Color::from_hex("#1A1A1A"),
                active: Color::from_hex("#34AF82"),
                border: Color::from_hex("#555555"),
                text: on_surface,
                corner_radius: 2.0,
                border_width: 1.0,
                font: FontId(0),
            },
            icon: Style::flat(Color::TRANSPARENT, Color::WHITE),
        }
    }
}
