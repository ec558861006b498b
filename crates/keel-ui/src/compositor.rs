//! Window ordering.
//!
//! Every window carries a depth; 0 is the front. Once per frame the windows
//! built that frame are sorted back to front (largest depth first) with a
//! stable sort, so windows with equal depth keep the order they were built
//! in. The sorted list is what gets drawn, and next frame it is what hover
//! tests consult to find the front-most window under the cursor.

use keel_core::{Rect, Vec2};

use crate::store::WidgetStore;
use crate::widget::{WidgetId, WidgetKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowRecord {
    pub widget: WidgetId,
    pub rect: Rect,
    pub depth: u32,
}

/// Sorts `windows` back to front.
pub fn composite(windows: &mut [WindowRecord]) {
    windows.sort_by(|a, b| b.depth.cmp(&a.depth));
}

/// Front-most window in a back-to-front list whose rect contains `p`.
pub fn window_at(windows: &[WindowRecord], p: Vec2) -> Option<WidgetId> {
    windows
        .iter()
        .rev()
        .find(|w| w.rect.contains(p))
        .map(|w| w.widget)
}

fn depth_of(store: &WidgetStore, id: WidgetId) -> Option<u32> {
    match store[id].kind {
        WidgetKind::Window { depth } => Some(depth),
        _ => None,
    }
}

fn set_depth(store: &mut WidgetStore, id: WidgetId, depth: u32) {
    if let WidgetKind::Window { depth: d } = &mut store[id].kind {
        *d = depth;
    }
}

/// Brings `target` to the front: it gets depth 0 and every window that was
/// in front of it moves back by one.
pub fn raise(store: &mut WidgetStore, windows: &[WidgetId], target: WidgetId) {
    let Some(old) = depth_of(store, target) else {
        return;
    };
    if old == 0 {
        return;
    }
    for &w in windows {
        if w == target {
            continue;
        }
        if let Some(d) = depth_of(store, w).filter(|&d| d < old) {
            set_depth(store, w, d + 1);
        }
    }
    set_depth(store, target, 0);
    log::trace!("raised window {target:?} from depth {old}");
}

/// Puts a new window in front of every existing one.
pub fn push_front(store: &mut WidgetStore, windows: &[WidgetId], new: WidgetId) {
    for &w in windows {
        if w == new {
            continue;
        }
        if let Some(d) = depth_of(store, w) {
            set_depth(store, w, d.saturating_add(1));
        }
    }
    set_depth(store, new, 0);
}
