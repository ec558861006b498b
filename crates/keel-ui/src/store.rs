//! Persistent widget storage and the per-frame tree links.
//!
//! Widgets are never freed. A null widget is inserted first; its links point
//! at itself and every unset link elsewhere points at it, so walking off the
//! end of a list lands on the sentinel instead of a dangling key.
//!
//! Children are attached front-first: the child attached last becomes
//! `recent_child` and is visited first. Lists are rebuilt every frame, so a
//! widget that was not built simply is not linked anywhere.

use slotmap::SlotMap;

use crate::identity::Identity;
use crate::widget::{Widget, WidgetId, WidgetKind};

pub struct WidgetStore {
    widgets: SlotMap<WidgetId, Widget>,
    null: WidgetId,
}

impl WidgetStore {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut widgets = SlotMap::with_capacity_and_key(capacity + 1);
        let null = widgets.insert_with_key(|k| {
            let mut w = Widget::new(Identity::default(), WidgetKind::Root, k);
            w.drawable = false;
            w
        });
        Self { widgets, null }
    }

    pub fn null(&self) -> WidgetId {
        self.null
    }

    /// Number of widgets, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.widgets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn alloc(&mut self, identity: Identity, kind: WidgetKind) -> WidgetId {
        let null = self.null;
        self.widgets.insert(Widget::new(identity, kind, null))
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id).filter(|_| id != self.null)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        let null = self.null;
        self.widgets.get_mut(id).filter(|_| id != null)
    }

    /// Forgets last frame's children of `id`.
    pub fn clear_children(&mut self, id: WidgetId) {
        debug_assert!(id != self.null);
        let null = self.null;
        let links = &mut self.widgets[id].links;
        links.first_child = null;
        links.recent_child = null;
    }

    /// Links `child` in front of `parent`'s current children.
    pub fn attach(&mut self, parent: WidgetId, child: WidgetId) {
        debug_assert!(parent != self.null && child != self.null);
        let null = self.null;
        let head = self.widgets[parent].links.recent_child;
        {
            let links = &mut self.widgets[child].links;
            links.parent = parent;
            links.prev = null;
            links.next = head;
        }
        if head == null {
            self.widgets[parent].links.first_child = child;
        } else {
            self.widgets[head].links.prev = child;
        }
        self.widgets[parent].links.recent_child = child;
    }

    /// Children of `id`, newest first.
    pub fn children(&self, id: WidgetId) -> Children<'_> {
        Children {
            store: self,
            next: self.widgets[id].links.recent_child,
        }
    }
}

impl std::ops::Index<WidgetId> for WidgetStore {
    type Output = Widget;
    fn index(&self, id: WidgetId) -> &Widget {
        &self.widgets[id]
    }
}

impl std::ops::IndexMut<WidgetId> for WidgetStore {
    fn index_mut(&mut self, id: WidgetId) -> &mut Widget {
        &mut self.widgets[id]
    }
}

pub struct Children<'a> {
    store: &'a WidgetStore,
    next: WidgetId,
}

impl Iterator for Children<'_> {
    type Item = WidgetId;

    fn next(&mut self) -> Option<WidgetId> {
        if self.next == self.store.null {
            return None;
        }
        let id = self.next;
        self.next = self.store.widgets[id].links.next;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_links_to_itself() {
        let store = WidgetStore::with_capacity(4);
        let null = store.null();
        let links = store[null].links;
        assert_eq!(links.parent, null);
        assert_eq!(links.next, null);
        assert_eq!(links.recent_child, null);
        assert!(store.get(null).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_children_are_visited_newest_first() {
        let mut store = WidgetStore::with_capacity(4);
        let root = store.alloc(Identity::ROOT, WidgetKind::Root);
        let a = store.alloc(Identity(1), WidgetKind::Label);
        let b = store.alloc(Identity(2), WidgetKind::Label);
        let c = store.alloc(Identity(3), WidgetKind::Label);
        for id in [a, b, c] {
            store.attach(root, id);
        }
        assert_eq!(store.children(root).collect::<Vec<_>>(), vec![c, b, a]);
        assert_eq!(store[root].links.first_child, a);
        assert_eq!(store[a].links.prev, b);
        assert_eq!(store[c].links.prev, store.null());
    }

    #[test]
    fn test_clear_children_then_relink_subset() {
        let mut store = WidgetStore::with_capacity(4);
        let root = store.alloc(Identity::ROOT, WidgetKind::Root);
        let a = store.alloc(Identity(1), WidgetKind::Label);
        let b = store.alloc(Identity(2), WidgetKind::Label);
        store.attach(root, a);
        store.attach(root, b);

        store.clear_children(root);
        assert_eq!(store.children(root).count(), 0);

        store.attach(root, b);
        assert_eq!(store.children(root).collect::<Vec<_>>(), vec![b]);
        assert_eq!(store.len(), 3);
    }
}
