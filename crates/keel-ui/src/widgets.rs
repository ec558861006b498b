//! Widget calls.
//!
//! Each call resolves its identity from the label and the current parent,
//! takes a box from the current layout scope, runs the interaction pass and
//! returns a [`Response`]. Calls that open a scope (`begin_*`) must be closed
//! by the matching `end_*`; the closure forms do that for you.
//!
//! A label may carry a hidden suffix: `"Delete##row3"` shows `Delete` but is
//! identified by the whole string, and `"Count: 4###count"` is identified by
//! `###count` alone so its caption can change freely.

use keel_core::Rect;

use crate::compositor;
use crate::context::{Context, display_text};
use crate::layout::LayoutScope;
use crate::textedit::TextCursor;
use crate::widget::{Interaction, Response, Widget, WidgetKind, WidgetOptions};

impl Context {
    pub fn label(&mut self, text: &str) -> Response {
        let (id, created) = self.acquire(text, WidgetKind::Label, WidgetOptions::empty(), true);
        self.place(id, created, None);
        self.store[id].set_text(display_text(text));
        self.interact(id);
        self.response(id)
    }

    pub fn button(&mut self, label: &str) -> Response {
        let (id, created) = self.acquire(label, WidgetKind::Button, WidgetOptions::INTERACTIVE, true);
        self.place(id, created, None);
        self.store[id].set_text(display_text(label));
        self.interact(id);
        self.response(id)
    }

    /// Shows `value` and flips it when clicked.
    pub fn checkbox(&mut self, label: &str, value: &mut bool) -> Response {
        let (id, created) = self.acquire(
            label,
            WidgetKind::Checkbox { checked: *value },
            WidgetOptions::INTERACTIVE,
            true,
        );
        self.place(id, created, None);
        let flags = self.interact(id);
        if flags.contains(Interaction::CLICKED) {
            *value = !*value;
        }
        let w = &mut self.store[id];
        w.set_text(display_text(label));
        if flags.contains(Interaction::CLICKED) {
            w.flags |= Interaction::CHANGED;
        }
        if let WidgetKind::Checkbox { checked } = &mut w.kind {
            *checked = *value;
        }
        self.response(id)
    }

    /// Draws `uv` from the renderer's icon atlas in the next layout box.
    pub fn icon(&mut self, label: &str, uv: Rect) -> Response {
        let (id, created) = self.acquire(label, WidgetKind::Icon { uv }, WidgetOptions::empty(), true);
        self.place(id, created, None);
        if let WidgetKind::Icon { uv: current } = &mut self.store[id].kind {
            *current = uv;
        }
        self.interact(id);
        self.response(id)
    }

    /// Single-line editable text. `initial` is only used the first time the
    /// box is built; afterwards the box keeps its own text.
    pub fn text_box(&mut self, label: &str, initial: &str) -> Response {
        let (id, created) = self.acquire(
            label,
            WidgetKind::TextBox(TextCursor::at_end(initial)),
            WidgetOptions::INTERACTIVE,
            true,
        );
        if created {
            self.store[id].set_text(initial);
        }
        self.place(id, created, None);
        self.interact(id);

        if self.focus == id {
            let inset = self.config.text_inset;
            let Widget {
                kind,
                text,
                rect,
                style,
                flags,
                ..
            } = &mut self.store[id];
            if let WidgetKind::TextBox(cursor) = kind {
                let out = cursor.apply(text, &self.input);
                self.consumed |= out.consumed;
                if out.changed {
                    *flags |= Interaction::CHANGED;
                }
                if out.submitted {
                    *flags |= Interaction::SUBMITTED;
                }
                let inner = (rect.w - 2.0 * inset).max(0.0);
                cursor.scroll_into_view(text, &*self.font, style.font, inner);
                if out.cancelled {
                    flags.remove(Interaction::FOCUSED);
                    let null = self.store.null();
                    self.set_focus(null);
                }
            }
        }
        self.response(id)
    }

    /// Collapsible node. Returns whether it is open; when it is, the
    /// caller builds the children and then calls [`end_tree_node`](Self::end_tree_node).
    pub fn begin_tree_node(&mut self, label: &str) -> bool {
        let (id, created) = self.acquire(
            label,
            WidgetKind::TreeNode { open: false },
            WidgetOptions::INTERACTIVE,
            true,
        );
        self.place(id, created, None);
        let flags = self.interact(id);
        let w = &mut self.store[id];
        w.set_text(display_text(label));
        let open = match &mut w.kind {
            WidgetKind::TreeNode { open } => {
                if flags.contains(Interaction::CLICKED) {
                    *open = !*open;
                    w.flags |= Interaction::CHANGED;
                }
                *open
            }
            _ => false,
        };
        if open {
            self.parents.push(id);
            self.layouts.top_mut().indent += self.config.tree_indent;
        }
        open
    }

    pub fn end_tree_node(&mut self) {
        self.layouts.top_mut().indent -= self.config.tree_indent;
        self.parents.pop();
    }

    pub fn tree_node(&mut self, label: &str, f: impl FnOnce(&mut Self)) -> bool {
        let open = self.begin_tree_node(label);
        if open {
            f(self);
            self.end_tree_node();
        }
        open
    }

    /// A framed box `height` tall; children are laid out inside it.
    pub fn begin_panel(&mut self, label: &str, height: f32) -> Response {
        let (id, created) = self.acquire(label, WidgetKind::Panel, WidgetOptions::empty(), true);
        self.place(id, created, Some(height));
        self.interact(id);
        let inner = self.store[id].rect.inset(self.config.text_inset);
        let scope = self.layouts.top().nested(inner);
        self.parents.push(id);
        self.layouts.push(scope);
        self.response(id)
    }

    pub fn end_panel(&mut self) {
        self.layouts.pop();
        self.parents.pop();
    }

    pub fn panel(&mut self, label: &str, height: f32, f: impl FnOnce(&mut Self)) -> Response {
        let r = self.begin_panel(label, height);
        f(self);
        self.end_panel();
        r
    }

    /// Opens a top-level window. `rect` is used on the first frame only;
    /// after that the window keeps wherever dragging and resizing left it.
    /// Pass [`WidgetOptions::DRAGGABLE`] and/or [`WidgetOptions::RESIZABLE`].
    pub fn begin_window(&mut self, label: &str, rect: Rect, options: WidgetOptions) -> Response {
        let options = options | WidgetOptions::INTERACTIVE | WidgetOptions::PERSISTENT_POSITION;
        let (id, created) = self.acquire(label, WidgetKind::Window { depth: 0 }, options, false);
        if created {
            self.store[id].rect = rect;
            self.all_windows.push(id);
            compositor::push_front(&mut self.store, &self.all_windows, id);
            log::debug!("new window {label:?}");
        }
        {
            let w = &mut self.store[id];
            w.set_text(display_text(label));
            w.drawable = true;
        }
        self.windows.push(id);
        self.frame_windows.push(id);

        let flags = self.interact(id);
        if flags.contains(Interaction::PRESSED) && self.input.button_pressed {
            compositor::raise(&mut self.store, &self.all_windows, id);
        }

        let r = self.store[id].rect;
        let title = self.config.title_bar_height.min(r.h);
        let body = Rect::new(r.x, r.y + title, r.w, r.h - title).inset(self.config.text_inset);
        let scope = LayoutScope::new(body, self.layouts.top().options());
        self.parents.push(id);
        self.layouts.push(scope);
        self.response(id)
    }

    pub fn end_window(&mut self) {
        self.layouts.pop();
        self.parents.pop();
        self.windows.pop();
    }

    pub fn window(
        &mut self,
        label: &str,
        rect: Rect,
        options: WidgetOptions,
        f: impl FnOnce(&mut Self),
    ) -> Response {
        let r = self.begin_window(label, rect, options);
        f(self);
        self.end_window();
        r
    }

    /// Empty space `height` tall in the current scope.
    pub fn spacing(&mut self, height: f32) {
        self.ensure_frame();
        let placement = self.layouts.top_mut().place_with_height(height);
        self.grow_parent(placement.extent);
    }
}
