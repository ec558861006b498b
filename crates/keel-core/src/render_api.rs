//! Interfaces to the collaborators the engine drives but does not own: the
//! renderer (through [`DrawSink`]) and the font rasterizer (through
//! [`FontService`]).
//!
//! [`DrawList`] and [`MonospaceFont`] are small in-memory implementations for
//! headless runs and tests.

use crate::{Color, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontId(pub u32);

/// Accumulates primitives for an external renderer.
pub trait DrawSink {
    fn draw_rect(&mut self, rect: Rect, corner_radius: f32, border_width: f32, color: Color);
    fn draw_text(&mut self, rect: Rect, text: &str, font: FontId, color: Color);
    /// `uv` is the icon's rectangle inside the renderer's atlas.
    fn draw_icon(&mut self, rect: Rect, uv: Rect);
}

/// Glyph metrics. Widths include kerning between adjacent characters.
pub trait FontService {
    fn text_width(&self, font: FontId, text: &str) -> f32;
    fn text_height(&self, font: FontId) -> f32;
    fn kerning(&self, font: FontId, a: char, b: char) -> f32;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        corner_radius: f32,
        border_width: f32,
        color: Color,
    },
    Text {
        rect: Rect,
        text: String,
        font: FontId,
        color: Color,
    },
    Icon {
        rect: Rect,
        uv: Rect,
    },
}

/// Records every primitive in submission order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = (&Rect, &str)> {
        self.cmds.iter().filter_map(|c| match c {
            DrawCmd::Text { rect, text, .. } => Some((rect, text.as_str())),
            _ => None,
        })
    }

    pub fn icons(&self) -> impl Iterator<Item = (&Rect, &Rect)> {
        self.cmds.iter().filter_map(|c| match c {
            DrawCmd::Icon { rect, uv } => Some((rect, uv)),
            _ => None,
        })
    }
}

impl DrawSink for DrawList {
    fn draw_rect(&mut self, rect: Rect, corner_radius: f32, border_width: f32, color: Color) {
        self.cmds.push(DrawCmd::Rect {
            rect,
            corner_radius,
            border_width,
            color,
        });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, font: FontId, color: Color) {
        self.cmds.push(DrawCmd::Text {
            rect,
            text: text.to_string(),
            font,
            color,
        });
    }

    fn draw_icon(&mut self, rect: Rect, uv: Rect) {
        self.cmds.push(DrawCmd::Icon { rect, uv });
    }
}

/// Fixed-advance font: every char is `advance` wide and lines are `line_height` tall.
/// Pairs listed in `kerning_pairs` are tightened by the given amount.
#[derive(Clone, Debug)]
pub struct MonospaceFont {
    pub advance: f32,
    pub line_height: f32,
    pub kerning_pairs: Vec<(char, char, f32)>,
}

impl Default for MonospaceFont {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: 16.0,
            kerning_pairs: Vec::new(),
        }
    }
}

impl FontService for MonospaceFont {
    fn text_width(&self, font: FontId, text: &str) -> f32 {
        let mut width = 0.0;
        let mut prev: Option<char> = None;
        for c in text.chars() {
            if let Some(p) = prev {
                width += self.kerning(font, p, c);
            }
            width += self.advance;
            prev = Some(c);
        }
        width
    }

    fn text_height(&self, _font: FontId) -> f32 {
        self.line_height
    }

    fn kerning(&self, _font: FontId, a: char, b: char) -> f32 {
        self.kerning_pairs
            .iter()
            .find(|(x, y, _)| *x == a && *y == b)
            .map(|(_, _, k)| *k)
            .unwrap_or(0.0)
    }
}
