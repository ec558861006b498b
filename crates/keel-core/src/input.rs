use bitflags::bitflags;

use crate::{Size, Vec2};

bitflags! {
    /// Key events resolved by the platform layer for one frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyFlags: u32 {
        const BACKSPACE = 1 << 0;
        const LEFT = 1 << 1;
        const RIGHT = 1 << 2;
        const RETURN = 1 << 3;
        const ESCAPE = 1 << 4;
        /// Delete back to the previous word boundary (Ctrl+Backspace).
        const WORD_DELETE = 1 << 5;
        const FRAMEBUFFER_RESIZED = 1 << 6;
        /// `InputSnapshot::clipboard` holds text to insert.
        const CLIPBOARD_PASTE = 1 << 7;
    }
}

/// Everything the engine reads from the outside world during one frame.
///
/// The snapshot is taken once before `begin` and never re-sampled, so every
/// interaction decision inside a frame sees the same values.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    pub cursor: Vec2,
    /// Cursor movement since the previous frame.
    pub cursor_delta: Vec2,
    /// Primary button went down this frame.
    pub button_pressed: bool,
    /// Primary button went up this frame.
    pub button_released: bool,
    /// Primary button is held at the end of this frame.
    pub button_down: bool,
    /// Printable character typed this frame, if any.
    pub key_char: Option<char>,
    pub keys: KeyFlags,
    pub clipboard: Option<String>,
    /// Framebuffer size; the root widget spans it.
    pub screen: Size,
}

impl InputSnapshot {
    /// Idle snapshot: cursor parked at `cursor`, nothing pressed.
    pub fn at(cursor: Vec2, screen: Size) -> Self {
        Self {
            cursor,
            screen,
            ..Default::default()
        }
    }

    /// Snapshot for a frame in which the cursor moved by `delta` from `from`.
    pub fn moved(from: Vec2, delta: Vec2, screen: Size) -> Self {
        Self {
            cursor: from + delta,
            cursor_delta: delta,
            screen,
            ..Default::default()
        }
    }

    pub fn press(mut self) -> Self {
        self.button_pressed = true;
        self.button_down = true;
        self
    }

    pub fn hold(mut self) -> Self {
        self.button_down = true;
        self
    }

    pub fn release(mut self) -> Self {
        self.button_released = true;
        self.button_down = false;
        self
    }

    pub fn with_keys(mut self, keys: KeyFlags) -> Self {
        self.keys |= keys;
        self
    }

    pub fn with_char(mut self, c: char) -> Self {
        self.key_char = Some(c);
        self
    }

    pub fn with_paste(mut self, text: impl Into<String>) -> Self {
        self.clipboard = Some(text.into());
        self.keys |= KeyFlags::CLIPBOARD_PASTE;
        self
    }
}
