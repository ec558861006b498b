//! Hover, focus, click, drag and resize.
//!
//! A widget is hovered when it is drawable, the cursor is inside both its
//! rect and the scroll viewport it was laid out in, and it belongs to the
//! front-most window under the cursor. On a press,
//! every hovered interactive widget claims focus in build order, so the
//! widget built last (the innermost) ends up focused. Whether the press
//! starts a drag or a resize is decided once, from where it landed, and
//! holds until release; the two can never be active together.

use keel_core::{Rect, Vec2};

use crate::context::Context;
use crate::widget::{Interaction, WidgetId, WidgetOptions};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Drag,
    Resize,
}

/// Square in the bottom-right corner of `rect` that starts a resize.
pub fn resize_corner(rect: Rect, side: f32) -> Rect {
    Rect::new(rect.right() - side, rect.bottom() - side, side, side)
}

fn mode_for_press(options: WidgetOptions, rect: Rect, at: Vec2, corner: f32) -> DragMode {
    if options.contains(WidgetOptions::RESIZABLE) && resize_corner(rect, corner).contains(at) {
        DragMode::Resize
    } else if options.contains(WidgetOptions::DRAGGABLE) {
        DragMode::Drag
    } else {
        DragMode::None
    }
}

impl Context {
    /// Hover checks pass only for widgets in the window under the cursor
    /// (or at root level when no window is under it).
    pub(crate) fn hoverable(&self) -> bool {
        self.hover_window == self.current_window()
    }

    /// Runs this frame's interaction pass for `id` and stores the result in
    /// its flags.
    pub(crate) fn interact(&mut self, id: WidgetId) -> Interaction {
        let cursor = self.input.cursor;
        let hoverable = self.hoverable();
        let (rect, options, drawable, clip) = {
            let w = &self.store[id];
            (w.rect, w.options, w.drawable, w.clip)
        };

        let mut flags = Interaction::empty();
        let hovered = drawable
            && hoverable
            && rect.contains(cursor)
            && clip.is_none_or(|c| c.contains(cursor));
        if hovered {
            flags |= Interaction::HOVERED;
        }

        if options.contains(WidgetOptions::INTERACTIVE) {
            if hovered && self.input.button_pressed {
                self.set_focus(id);
                self.focus_claims.push(id);
                self.click_anchor = cursor;
                self.drag = mode_for_press(options, rect, cursor, self.config.resize_corner);
            }

            if self.focus == id {
                flags |= Interaction::FOCUSED;
                if self.input.button_down {
                    flags |= Interaction::PRESSED;
                }
                if self.input.button_released {
                    if hovered {
                        flags |= Interaction::CLICKED;
                    } else {
                        let null = self.store.null();
                        self.set_focus(null);
                        flags.remove(Interaction::FOCUSED);
                    }
                    self.drag = DragMode::None;
                } else if self.input.button_down && !self.input.button_pressed {
                    flags |= self.apply_drag(id);
                }
            }
        }

        self.store[id].flags |= flags;
        flags
    }

    fn apply_drag(&mut self, id: WidgetId) -> Interaction {
        let delta = self.input.cursor_delta;
        let min = self.config.min_window_size;
        let w = &mut self.store[id];
        match self.drag {
            DragMode::Resize => {
                let width = w.rect.w + delta.x;
                let height = w.rect.h + delta.y;
                if width < min || height < min {
                    log::trace!("resize clamped to minimum {min}");
                }
                w.rect.w = width.max(min);
                w.rect.h = height.max(min);
                Interaction::RESIZING
            }
            DragMode::Drag => {
                w.rect = w.rect.translate(delta);
                Interaction::DRAGGING
            }
            DragMode::None => Interaction::empty(),
        }
    }
}
