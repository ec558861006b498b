//! Vertical scroll regions.
//!
//! A region is a fixed-height viewport with a thumb along its right edge.
//! Children are laid out as if the region were infinitely tall, shifted up
//! by the current offset; anything that does not overlap the viewport is
//! marked not drawable, so it is neither hit-tested nor painted.
//!
//! The offset used for a frame's children is the one computed at the end of
//! the previous frame's thumb update. Content height is only known after the
//! children are built, so thumb size and scroll ratio lag one frame behind
//! the content as well.

use keel_core::Rect;

use crate::context::Context;
use crate::widget::{Response, ScrollState, WidgetId, WidgetKind, WidgetOptions};

const THUMB_LABEL: &str = "#thumb";

/// Thumb height and scroll ratio for a viewport showing part of `content`.
/// Returns `None` when everything fits.
pub fn thumb_metrics(viewport: f32, content: f32, min_thumb: f32) -> Option<(f32, f32)> {
    if viewport <= 0.0 || content <= viewport {
        return None;
    }
    let thumb = (viewport * viewport / content).max(min_thumb).min(viewport);
    let track = viewport - thumb;
    let ratio = if track > 0.0 {
        (content - viewport) / track
    } else {
        0.0
    };
    Some((thumb, ratio))
}

impl Context {
    /// Opens a scroll region `viewport_height` tall. Close with
    /// [`end_scroll_view`](Self::end_scroll_view).
    pub fn begin_scroll_view(&mut self, label: &str, viewport_height: f32) -> Response {
        let (id, created) = self.acquire(
            label,
            WidgetKind::ScrollRegion(ScrollState::default()),
            WidgetOptions::empty(),
            true,
        );
        self.place(id, created, Some(viewport_height));
        self.interact(id);

        let region = self.store[id].rect;
        let region_drawable = self.store[id].drawable;
        let state = match self.store[id].kind {
            WidgetKind::ScrollRegion(s) => s,
            _ => ScrollState::default(),
        };
        let offset = state.offset();

        self.parents.push(id);
        self.update_thumb(id, region, region_drawable, state);

        let outer = self.layouts.top();
        let content = Rect::new(
            region.x,
            region.y,
            (region.w - self.config.scrollbar_width).max(0.0),
            region.h,
        );
        let mut scope = outer.nested(content);
        scope.scroll = offset;
        scope.viewport = Some(match outer.viewport {
            Some(v) => region
                .intersect(&v)
                .unwrap_or(Rect::new(region.x, region.y, region.w, 0.0)),
            None => region,
        });
        if !region_drawable {
            scope.viewport = Some(Rect::new(region.x, region.y, region.w, 0.0));
        }
        self.layouts.push(scope);
        self.response(id)
    }

    pub fn end_scroll_view(&mut self) {
        let scope = self.layouts.pop();
        let id = self.parents.pop();
        match &mut self.store[id].kind {
            WidgetKind::ScrollRegion(state) => state.content_height = scope.content.height,
            other => log::warn!("end_scroll_view closed a {} scope", other.name()),
        }
    }

    pub fn scroll_view(&mut self, label: &str, viewport_height: f32, f: impl FnOnce(&mut Self)) -> Response {
        let r = self.begin_scroll_view(label, viewport_height);
        f(self);
        self.end_scroll_view();
        r
    }

    /// Builds the thumb as the region's first child and carries its
    /// position into the region's state for the next frame.
    fn update_thumb(&mut self, region_id: WidgetId, region: Rect, region_drawable: bool, mut state: ScrollState) {
        let width = self.config.scrollbar_width;
        let metrics = thumb_metrics(region.h, state.content_height, self.config.min_thumb_size);
        let (thumb, _) = self.acquire(
            THUMB_LABEL,
            WidgetKind::ScrollThumb,
            WidgetOptions::INTERACTIVE | WidgetOptions::DRAGGABLE,
            true,
        );

        let x = region.right() - width;
        let top = region.y;
        let (thumb_h, ratio) = metrics.unwrap_or((region.h, 0.0));
        let track = (region.h - thumb_h).max(0.0);
        let clip = self.store[region_id].clip;
        {
            let w = &mut self.store[thumb];
            w.rect = Rect::new(x, top + state.carried_delta.clamp(0.0, track), width, thumb_h);
            w.drawable = metrics.is_some() && region_drawable;
            w.clip = clip;
        }

        self.interact(thumb);

        let w = &mut self.store[thumb];
        let y = w.rect.y.clamp(top, top + track);
        if y != w.rect.y {
            log::trace!("thumb clamped to {y}");
        }
        w.rect = Rect::new(x, y, width, thumb_h);

        state.carried_delta = if metrics.is_some() { y - top } else { 0.0 };
        state.ratio = ratio;
        self.store[region_id].kind = WidgetKind::ScrollRegion(state);
    }
}
