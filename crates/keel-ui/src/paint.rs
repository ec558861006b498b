//! Turns the built tree into draw calls.
//!
//! The root subtree is painted first, then every window back to front.
//! Within a subtree a widget is painted before its children, and children
//! are visited newest first.

use keel_core::{Color, DrawSink, FontService, FrameArena, Rect, Style, UiConfig};

use crate::compositor::WindowRecord;
use crate::store::WidgetStore;
use crate::textedit::fit_prefix;
use crate::widget::{Interaction, Widget, WidgetId, WidgetKind, WidgetOptions};

pub(crate) struct PaintEnv<'a> {
    pub font: &'a dyn FontService,
    pub arena: &'a mut FrameArena,
    pub config: &'a UiConfig,
    pub focus: WidgetId,
    pub sink: &'a mut dyn DrawSink,
}

/// Paints the frame and returns how many widgets were drawn.
pub(crate) fn paint_frame(
    store: &WidgetStore,
    root: WidgetId,
    windows: &[WindowRecord],
    env: &mut PaintEnv<'_>,
) -> usize {
    let mut drawn = subtree(store, root, env);
    for w in windows {
        drawn += subtree(store, w.widget, env);
    }
    drawn
}

fn subtree(store: &WidgetStore, id: WidgetId, env: &mut PaintEnv<'_>) -> usize {
    let w = &store[id];
    let mut drawn = 0;
    if w.drawable {
        widget(id, w, env);
        drawn += 1;
    }
    for child in store.children(id) {
        drawn += subtree(store, child, env);
    }
    drawn
}

fn fill(sink: &mut dyn DrawSink, rect: Rect, style: &Style, color: Color) {
    if color.3 > 0 {
        sink.draw_rect(rect, style.corner_radius, 0.0, color);
    }
}

fn border(sink: &mut dyn DrawSink, rect: Rect, style: &Style, color: Color) {
    if style.border_width > 0.0 && color.3 > 0 {
        sink.draw_rect(rect, style.corner_radius, style.border_width, color);
    }
}

fn state_color(style: &Style, flags: Interaction) -> Color {
    if flags.intersects(Interaction::PRESSED | Interaction::DRAGGING | Interaction::RESIZING) {
        style.active
    } else if flags.contains(Interaction::HOVERED) {
        style.hover
    } else {
        style.background
    }
}

/// Left-aligned, vertically centered, cut to fit.
fn text(sink: &mut dyn DrawSink, font: &dyn FontService, rect: Rect, inset: f32, s: &str, style: &Style) {
    if s.is_empty() {
        return;
    }
    let width = (rect.w - 2.0 * inset).max(0.0);
    let shown = fit_prefix(s, font, style.font, width);
    if shown.is_empty() {
        return;
    }
    let h = font.text_height(style.font);
    let y = rect.y + (rect.h - h) * 0.5;
    let w = font.text_width(style.font, shown);
    sink.draw_text(Rect::new(rect.x + inset, y, w, h), shown, style.font, style.text);
}

/// Draws the widget's icon at the left of `rect` and returns the space left for text.
fn leading_icon(sink: &mut dyn DrawSink, w: &Widget, rect: Rect, inset: f32) -> Rect {
    let Some(uv) = w.icon else {
        return rect;
    };
    let side = (rect.h - 2.0 * inset).max(0.0);
    sink.draw_icon(Rect::new(rect.x + inset, rect.y + inset, side, side), uv);
    let used = side + inset;
    Rect::new(rect.x + used, rect.y, (rect.w - used).max(0.0), rect.h)
}

fn widget(id: WidgetId, w: &Widget, env: &mut PaintEnv<'_>) {
    let inset = env.config.text_inset;
    let r = w.rect;
    let style = &w.style;
    let sink = &mut *env.sink;
    let font = env.font;

    match &w.kind {
        WidgetKind::Root => {}
        WidgetKind::Window { .. } => {
            fill(sink, r, style, style.background);
            let chrome = w.chrome.unwrap_or(*style);
            let title_h = env.config.title_bar_height.min(r.h);
            let bar = Rect::new(r.x, r.y, r.w, title_h);
            fill(sink, bar, &chrome, state_color(&chrome, w.flags));
            text(sink, font, bar, inset, &w.text, &chrome);
            if w.options.contains(WidgetOptions::RESIZABLE) {
                let grip = crate::interaction::resize_corner(r, env.config.resize_corner);
                fill(sink, grip, &Style::default(), style.border);
            }
            border(sink, r, style, style.border);
        }
        WidgetKind::Button => {
            fill(sink, r, style, state_color(style, w.flags));
            let rest = leading_icon(sink, w, r, inset);
            text(sink, font, rest, inset, &w.text, style);
        }
        WidgetKind::Label => {
            fill(sink, r, style, style.background);
            let rest = leading_icon(sink, w, r, inset);
            text(sink, font, rest, inset, &w.text, style);
        }
        WidgetKind::TextBox(cursor) => {
            let focused = env.focus == id;
            let bg = if w.flags.contains(Interaction::HOVERED) {
                style.hover
            } else {
                style.background
            };
            fill(sink, r, style, bg);
            border(sink, r, style, if focused { style.active } else { style.border });

            let inner_w = (r.w - 2.0 * inset).max(0.0);
            let shown = cursor.visible(&w.text, font, style.font, inner_w);
            let h = font.text_height(style.font);
            let y = r.y + (r.h - h) * 0.5;
            if !shown.is_empty() {
                let tw = font.text_width(style.font, shown);
                sink.draw_text(Rect::new(r.x + inset, y, tw, h), shown, style.font, style.text);
            }
            if focused {
                let start = cursor.scroll_start.min(cursor.cursor);
                let before = w.text.get(start..cursor.cursor).unwrap_or("");
                let cx = r.x + inset + font.text_width(style.font, before).min(inner_w);
                sink.draw_rect(Rect::new(cx, y, 1.0, h), 0.0, 0.0, style.active);
            }
        }
        WidgetKind::Panel => {
            fill(sink, r, style, style.background);
            border(sink, r, style, style.border);
        }
        WidgetKind::ScrollRegion(state) => {
            if state.content_height > r.h {
                let width = env.config.scrollbar_width;
                let track = Rect::new(r.right() - width, r.y, width, r.h);
                fill(sink, track, style, style.background);
            }
        }
        WidgetKind::ScrollThumb => {
            fill(sink, r, style, state_color(style, w.flags));
        }
        WidgetKind::TreeNode { open } => {
            if w.flags.contains(Interaction::HOVERED) {
                fill(sink, r, style, style.hover);
            }
            let marker = if *open { '-' } else { '+' };
            let caption = env.arena.alloc_fmt(format_args!("{marker} {}", w.text));
            let s = env.arena.get(caption).unwrap_or_default();
            text(sink, font, r, inset, s, style);
        }
        WidgetKind::Checkbox { checked } => {
            let side = r.h.min(r.w);
            let square = Rect::new(r.x, r.y, side, side);
            fill(sink, square, style, state_color(style, w.flags & !Interaction::PRESSED));
            border(sink, square, style, style.border);
            if *checked {
                fill(sink, square.inset(side * 0.2), style, style.active);
            }
            let label = Rect::new(r.x + side, r.y, (r.w - side).max(0.0), r.h);
            text(sink, font, label, inset, &w.text, style);
        }
        WidgetKind::Icon { uv } => {
            sink.draw_icon(r, *uv);
        }
    }
}
