//! Single-line text editing for text boxes.
//!
//! The caret is a byte offset into the text, always on a grapheme boundary
//! and within `[0, len]`. Only printable ASCII is inserted from key input;
//! text set by the application may contain anything.

use keel_core::{FontId, FontService, InputSnapshot, KeyFlags};
use unicode_segmentation::UnicodeSegmentation;

fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            return i;
        }
    }
    text.len()
}

/// Start of the grapheme containing `byte`, or the end of the text.
fn snap_to_boundary(text: &str, byte: usize) -> usize {
    if byte >= text.len() {
        return text.len();
    }
    let mut start = 0;
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            break;
        }
        start = i;
    }
    start
}

fn is_insertable(c: char) -> bool {
    c.is_ascii_graphic() || c == ' '
}

/// What one frame of key input did to a text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub changed: bool,
    pub submitted: bool,
    /// Escape pressed; the box should give up focus.
    pub cancelled: bool,
    /// Keys the box handled; they are hidden from `Context::last_event`.
    pub consumed: KeyFlags,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextCursor {
    /// Byte offset of the caret.
    pub cursor: usize,
    /// Byte offset of the first visible character.
    pub scroll_start: usize,
}

impl TextCursor {
    pub fn at_end(text: &str) -> Self {
        Self {
            cursor: text.len(),
            scroll_start: 0,
        }
    }

    pub fn clamp(&mut self, text: &str) {
        self.cursor = snap_to_boundary(text, self.cursor);
        self.scroll_start = snap_to_boundary(text, self.scroll_start.min(self.cursor));
    }

    /// Inserts the printable ASCII characters of `s` at the caret.
    pub fn insert(&mut self, text: &mut String, s: &str) -> bool {
        self.clamp(text);
        let before = text.len();
        for c in s.chars().filter(|&c| is_insertable(c)) {
            text.insert(self.cursor, c);
            self.cursor += c.len_utf8();
        }
        text.len() != before
    }

    pub fn backspace(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.cursor == 0 {
            return false;
        }
        let prev = prev_grapheme_boundary(text, self.cursor);
        text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    /// Deletes back to the start of the previous word, skipping whitespace
    /// directly before the caret.
    pub fn delete_word(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.cursor == 0 {
            return false;
        }
        let head = &text[..self.cursor];
        let start = head
            .split_word_bound_indices()
            .rev()
            .find(|(_, seg)| !seg.chars().all(char::is_whitespace))
            .map(|(i, _)| i)
            .unwrap_or(0);
        text.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    pub fn move_left(&mut self, text: &str) {
        self.clamp(text);
        self.cursor = prev_grapheme_boundary(text, self.cursor);
    }

    pub fn move_right(&mut self, text: &str) {
        self.clamp(text);
        self.cursor = next_grapheme_boundary(text, self.cursor);
    }

    /// Applies one frame of keyboard input.
    pub fn apply(&mut self, text: &mut String, input: &InputSnapshot) -> EditOutcome {
        let mut out = EditOutcome::default();
        let keys = input.keys;

        if keys.contains(KeyFlags::CLIPBOARD_PASTE) {
            if let Some(paste) = input.clipboard.as_deref() {
                out.changed |= self.insert(text, paste);
            }
            out.consumed |= KeyFlags::CLIPBOARD_PASTE;
        }
        if let Some(c) = input.key_char {
            let mut buf = [0u8; 4];
            out.changed |= self.insert(text, c.encode_utf8(&mut buf));
        }
        if keys.contains(KeyFlags::WORD_DELETE) {
            out.changed |= self.delete_word(text);
            out.consumed |= KeyFlags::WORD_DELETE;
        } else if keys.contains(KeyFlags::BACKSPACE) {
            out.changed |= self.backspace(text);
            out.consumed |= KeyFlags::BACKSPACE;
        }
        if keys.contains(KeyFlags::LEFT) {
            self.move_left(text);
            out.consumed |= KeyFlags::LEFT;
        }
        if keys.contains(KeyFlags::RIGHT) {
            self.move_right(text);
            out.consumed |= KeyFlags::RIGHT;
        }
        if keys.contains(KeyFlags::RETURN) {
            out.submitted = true;
            out.consumed |= KeyFlags::RETURN;
        }
        if keys.contains(KeyFlags::ESCAPE) {
            out.cancelled = true;
            out.consumed |= KeyFlags::ESCAPE;
        }
        self.clamp(text);
        out
    }

    /// Moves `scroll_start` so the caret stays inside a box `width` wide.
    pub fn scroll_into_view(&mut self, text: &str, font: &dyn FontService, font_id: FontId, width: f32) {
        self.clamp(text);
        if self.cursor < self.scroll_start {
            self.scroll_start = self.cursor;
        }
        while self.scroll_start < self.cursor
            && font.text_width(font_id, &text[self.scroll_start..self.cursor]) > width
        {
            self.scroll_start = next_grapheme_boundary(text, self.scroll_start);
        }
    }

    /// The part of `text` visible from `scroll_start` that fits in `width`.
    pub fn visible<'t>(&self, text: &'t str, font: &dyn FontService, font_id: FontId, width: f32) -> &'t str {
        let start = snap_to_boundary(text, self.scroll_start);
        fit_prefix(&text[start..], font, font_id, width)
    }
}

/// Longest prefix of `text` no wider than `width`.
pub fn fit_prefix<'t>(text: &'t str, font: &dyn FontService, font_id: FontId, width: f32) -> &'t str {
    if font.text_width(font_id, text) <= width {
        return text;
    }
    let mut end = 0;
    for (i, _) in text.grapheme_indices(true).skip(1) {
        if font.text_width(font_id, &text[..i]) > width {
            break;
        }
        end = i;
    }
    &text[..end]
}
