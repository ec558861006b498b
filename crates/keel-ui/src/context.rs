//! # The frame controller
//!
//! [`Context`] owns all persistent state: the identity table, the widget
//! store, the scope stacks and focus. Applications drive it once per frame:
//!
//! ```rust
//! use keel_core::*;
//! use keel_ui::*;
//!
//! let mut ctx = Context::new(UiConfig::default(), Box::new(MonospaceFont::default())).unwrap();
//! let mut list = DrawList::new();
//!
//! ctx.begin(InputSnapshot::at(Vec2::ZERO, Size::new(800.0, 600.0)));
//! ctx.window("Settings", Rect::new(20.0, 20.0, 300.0, 200.0), WidgetOptions::DRAGGABLE, |ui| {
//!     ui.label("Volume");
//!     if ui.button("Reset").clicked() {
//!         // ...
//!     }
//! });
//! let stats = ctx.end(&mut list);
//! assert_eq!(stats.windows, 1);
//! ```
//!
//! Everything a widget call needs (cursor, buttons, keys) comes from the
//! [`InputSnapshot`] given to [`Context::begin`]; nothing is re-sampled
//! mid-frame. Drawing happens only in [`Context::end`].

use keel_core::{
    DrawSink, FontService, FrameArena, InputSnapshot, KeyFlags, Rect, ScopeKind, Size, Theme,
    UiConfig, UiError, Vec2,
};
use web_time::Instant;

use crate::compositor::{self, WindowRecord};
use crate::identity::{Identity, IdentityTable};
use crate::interaction::DragMode;
use crate::layout::{Axis, LayoutOptions, LayoutScope};
use crate::paint;
use crate::scope::ScopeStack;
use crate::store::WidgetStore;
use crate::widget::{Interaction, Response, Widget, WidgetId, WidgetKind, WidgetOptions};

/// Counters for one finished frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub widgets_built: usize,
    pub widgets_drawn: usize,
    pub windows: usize,
    /// Wall time between `begin` and the end of painting.
    pub build_ms: f32,
    /// Scratch bytes used this frame.
    pub arena_bytes: usize,
}

pub struct Context {
    pub(crate) config: UiConfig,
    pub(crate) font: Box<dyn FontService>,
    pub(crate) ids: IdentityTable,
    pub(crate) store: WidgetStore,
    pub(crate) arena: FrameArena,

    pub(crate) themes: ScopeStack<Theme>,
    pub(crate) layouts: ScopeStack<LayoutScope>,
    pub(crate) windows: ScopeStack<WidgetId>,
    pub(crate) parents: ScopeStack<WidgetId>,
    pub(crate) base_theme: Theme,

    pub(crate) root: WidgetId,
    /// Every window ever built, in creation order.
    pub(crate) all_windows: Vec<WidgetId>,
    /// Windows built this frame, in build order.
    pub(crate) frame_windows: Vec<WidgetId>,
    /// Last composited order, back to front.
    pub(crate) composited: Vec<WindowRecord>,
    /// Front-most window under the cursor at `begin`; `None` means the root.
    pub(crate) hover_window: Option<WidgetId>,

    /// The null widget when nothing has focus.
    pub(crate) focus: WidgetId,
    /// Widgets that took focus during this frame's press, in build order.
    pub(crate) focus_claims: Vec<WidgetId>,
    pub(crate) drag: DragMode,
    pub(crate) click_anchor: Vec2,

    pub(crate) input: InputSnapshot,
    pub(crate) consumed: KeyFlags,
    pub(crate) frame: u64,
    pub(crate) in_frame: bool,
    pub(crate) frame_start: Option<Instant>,
    pub(crate) stats: FrameStats,
    pub(crate) last_stats: FrameStats,
}

impl Context {
    pub fn new(config: UiConfig, font: Box<dyn FontService>) -> Result<Self, UiError> {
        config.validate()?;
        let mut store = WidgetStore::with_capacity(config.identity_capacity + 1);
        let root = store.alloc(Identity::ROOT, WidgetKind::Root);
        store[root].drawable = false;
        let focus = store.null();

        log::debug!(
            "ui context: {} identities, scopes theme={} layout={} window={} parent={}",
            config.identity_capacity,
            config.theme_depth,
            config.layout_depth,
            config.window_depth,
            config.parent_depth
        );

        Ok(Self {
            ids: IdentityTable::with_capacity(config.identity_capacity),
            arena: FrameArena::with_capacity(config.frame_arena_bytes),
            themes: ScopeStack::new(ScopeKind::Theme, config.theme_depth),
            layouts: ScopeStack::new(ScopeKind::Layout, config.layout_depth),
            windows: ScopeStack::new(ScopeKind::Window, config.window_depth),
            parents: ScopeStack::new(ScopeKind::Parent, config.parent_depth),
            base_theme: Theme::default(),
            root,
            all_windows: Vec::new(),
            frame_windows: Vec::new(),
            composited: Vec::new(),
            hover_window: None,
            focus,
            focus_claims: Vec::new(),
            drag: DragMode::None,
            click_anchor: Vec2::ZERO,
            input: InputSnapshot::default(),
            consumed: KeyFlags::empty(),
            frame: 0,
            in_frame: false,
            frame_start: None,
            stats: FrameStats::default(),
            last_stats: FrameStats::default(),
            store,
            font,
            config,
        })
    }

    /// Theme pushed at the bottom of the stack every frame.
    pub fn set_theme(&mut self, theme: Theme) {
        self.base_theme = theme;
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn font(&self) -> &dyn FontService {
        &*self.font
    }

    /// Starts a frame. Panics if the previous frame was not ended.
    pub fn begin(&mut self, input: InputSnapshot) {
        if self.in_frame {
            panic!("{}", UiError::FrameAlreadyOpen);
        }
        self.in_frame = true;
        self.frame += 1;
        self.frame_start = Some(Instant::now());
        self.arena.reset();
        self.consumed = KeyFlags::empty();
        self.focus_claims.clear();
        self.frame_windows.clear();
        self.themes.clear();
        self.layouts.clear();
        self.windows.clear();
        self.parents.clear();
        self.stats = FrameStats {
            frame: self.frame,
            ..FrameStats::default()
        };

        if input.keys.contains(KeyFlags::FRAMEBUFFER_RESIZED) {
            log::debug!(
                "framebuffer resized to {}x{}",
                input.screen.width,
                input.screen.height
            );
        }

        let screen = Rect::new(0.0, 0.0, input.screen.width, input.screen.height);
        let frame = self.frame;
        let root = &mut self.store[self.root];
        root.rect = screen;
        root.content = Size::default();
        root.flags = Interaction::empty();
        root.built_frame = frame;
        self.store.clear_children(self.root);

        // Window rects may have moved since they were composited.
        for rec in &mut self.composited {
            rec.rect = self.store[rec.widget].rect;
        }
        self.hover_window = compositor::window_at(&self.composited, input.cursor);
        self.input = input;

        self.themes.push(self.base_theme);
        self.parents.push(self.root);
        self.layouts.push(LayoutScope::new(
            screen,
            LayoutOptions {
                box_size: Size::new(0.0, self.config.box_height),
                ..LayoutOptions::default()
            },
        ));
    }

    /// Ends the frame: resolves focus, orders windows and paints everything
    /// into `sink`.
    pub fn end(&mut self, sink: &mut dyn DrawSink) -> FrameStats {
        self.ensure_frame();
        self.windows.assert_depth(0);
        self.parents.assert_depth(1);
        self.layouts.assert_depth(1);
        self.themes.assert_depth(1);
        if let Some(uv) = self.layouts.top().pending_icon {
            log::warn!("icon {uv:?} was set but no widget followed it");
        }
        self.parents.pop();
        self.layouts.pop();
        self.themes.pop();

        self.resolve_focus();

        self.composited.clear();
        for &w in &self.frame_windows {
            let depth = match self.store[w].kind {
                WidgetKind::Window { depth } => depth,
                _ => 0,
            };
            self.composited.push(WindowRecord {
                widget: w,
                rect: self.store[w].rect,
                depth,
            });
        }
        compositor::composite(&mut self.composited);

        self.stats.widgets_drawn = paint::paint_frame(
            &self.store,
            self.root,
            &self.composited,
            &mut paint::PaintEnv {
                font: &*self.font,
                arena: &mut self.arena,
                config: &self.config,
                focus: self.focus,
                sink,
            },
        );
        self.stats.windows = self.composited.len();
        self.stats.arena_bytes = self.arena.used();
        self.stats.build_ms = self
            .frame_start
            .take()
            .map(|t| t.elapsed().as_secs_f32() * 1000.0)
            .unwrap_or(0.0);

        log::trace!(
            "frame {}: built {} drawn {} windows {} in {:.2}ms",
            self.stats.frame,
            self.stats.widgets_built,
            self.stats.widgets_drawn,
            self.stats.windows,
            self.stats.build_ms
        );

        self.in_frame = false;
        self.last_stats = self.stats;
        self.stats
    }

    fn resolve_focus(&mut self) {
        let null = self.store.null();
        if self.input.button_pressed && self.focus_claims.is_empty() && self.focus != null {
            log::debug!("focus cleared by press outside any interactive widget");
            self.focus = null;
        }
        if self.focus != null && self.store[self.focus].built_frame != self.frame {
            log::debug!("focused widget was not built this frame; dropping focus");
            self.focus = null;
        }
        // Earlier claimants this frame lost focus to a later-built widget.
        for &w in &self.focus_claims {
            if w != self.focus {
                self.store[w].flags.remove(Interaction::FOCUSED);
            }
        }
        if !self.input.button_down {
            self.drag = DragMode::None;
        }
    }

    pub(crate) fn ensure_frame(&self) {
        if !self.in_frame {
            panic!("{}", UiError::OutsideFrame);
        }
    }

    pub(crate) fn set_focus(&mut self, id: WidgetId) {
        if self.focus != id {
            log::trace!("focus {:?} -> {:?}", self.focus, id);
            self.focus = id;
        }
    }

    /// Finds or creates the widget for `label` under the current parent and
    /// marks it built this frame. `attach` links it into the parent's
    /// children; windows are their own roots and pass `false`.
    pub(crate) fn acquire(
        &mut self,
        label: &str,
        kind: WidgetKind,
        options: WidgetOptions,
        attach: bool,
    ) -> (WidgetId, bool) {
        self.ensure_frame();
        let parent = *self.parents.top();
        let parent_identity = self.store[parent].identity;
        let label = identity_key(label);

        let (mut identity, mut existing) = self.ids.resolve(label, parent_identity);
        let mut salted: Option<String> = None;
        let mut occurrence = 1;
        // The same label twice under one parent in one frame: later
        // occurrences get a numbered key so each keeps its own widget.
        while let Some(id) = existing {
            if self.store[id].built_frame != self.frame {
                break;
            }
            if occurrence == 1 {
                log::warn!("label {label:?} built twice under {parent_identity:?} in one frame");
            }
            let key = format!("{label}\u{0}{occurrence}");
            occurrence += 1;
            (identity, existing) = self.ids.resolve(&key, parent_identity);
            salted = Some(key);
        }

        let created = existing.is_none();
        let id = match existing {
            Some(id) => id,
            None => {
                let name = kind.name();
                let id = self.store.alloc(identity, kind);
                let key = salted.as_deref().unwrap_or(label);
                if let Err(e) = self.ids.insert(identity, key, parent_identity, id) {
                    panic!("{e}");
                }
                log::trace!("new {name} {key:?} ({identity:?}) under {parent_identity:?}");
                id
            }
        };

        let frame = self.frame;
        let theme = self.themes.top();
        let w = &mut self.store[id];
        w.style = w.kind.style_in(theme);
        w.chrome = w.kind.chrome_in(theme);
        w.built_frame = frame;
        w.options = options;
        w.flags = Interaction::empty();
        w.content = Size::default();
        w.icon = None;
        w.clip = None;
        self.store.clear_children(id);
        if attach {
            self.store.attach(parent, id);
        } else {
            self.store[id].links.parent = parent;
        }
        self.stats.widgets_built += 1;
        (id, created)
    }

    /// Assigns the widget its box from the current layout scope.
    pub(crate) fn place(&mut self, id: WidgetId, first_frame: bool, height: Option<f32>) {
        let scope = self.layouts.top_mut();
        let placement = match height {
            Some(h) => scope.place_with_height(h),
            None => scope.place(),
        };
        let icon = scope.pending_icon.take();
        let viewport = scope.viewport;

        let w = &mut self.store[id];
        if w.options.contains(WidgetOptions::PERSISTENT_POSITION) && !first_frame {
            w.rect = Rect::new(w.rect.x, w.rect.y, placement.rect.w, placement.rect.h);
        } else {
            w.rect = placement.rect;
        }
        w.icon = icon;
        w.clip = viewport;
        w.drawable = viewport.is_none_or(|v| v.h > 0.0 && w.rect.overlaps_y(&v));
        self.grow_parent(placement.extent);
    }

    /// Adds space taken in the current layout scope to the current parent's
    /// content. Inside a row or column group nothing is added until the
    /// outermost group ends and reports its whole extent.
    pub(crate) fn grow_parent(&mut self, extent: Size) {
        let scope = self.layouts.top();
        if scope.group_depth() > 0 {
            return;
        }
        let axis = scope.axis;
        let parent = *self.parents.top();
        let content = &mut self.store[parent].content;
        match axis {
            Axis::Column => {
                content.height += extent.height;
                content.width = content.width.max(extent.width);
            }
            Axis::Row => {
                content.width += extent.width;
                content.height = content.height.max(extent.height);
            }
        }
    }

    pub(crate) fn response(&self, id: WidgetId) -> Response {
        let w = &self.store[id];
        Response {
            id: w.identity,
            flags: w.flags,
        }
    }

    pub(crate) fn current_window(&self) -> Option<WidgetId> {
        self.windows.iter().last().copied()
    }

    // ---- scopes ----

    /// Builds the following widgets as children of an already built widget.
    /// An unknown identity keeps the current parent.
    pub fn push_parent(&mut self, identity: Identity) {
        self.ensure_frame();
        let id = if identity == Identity::ROOT {
            self.root
        } else {
            match self.ids.lookup(identity) {
                Some(id) => id,
                None => {
                    log::warn!("push_parent: no widget with {identity:?}");
                    *self.parents.top()
                }
            }
        };
        self.parents.push(id);
    }

    pub fn pop_parent(&mut self) {
        self.parents.pop();
    }

    pub fn push_theme(&mut self, theme: Theme) {
        self.ensure_frame();
        self.themes.push(theme);
    }

    pub fn pop_theme(&mut self) {
        self.themes.pop();
    }

    pub fn theme(&self) -> &Theme {
        self.themes.top()
    }

    /// Opens a nested layout scope over `bounds`.
    pub fn push_layout(&mut self, bounds: Rect, options: LayoutOptions) {
        self.ensure_frame();
        let mut scope = LayoutScope::new(bounds, options);
        scope.viewport = self.layouts.top().viewport;
        self.layouts.push(scope);
    }

    pub fn pop_layout(&mut self) -> LayoutScope {
        self.layouts.pop()
    }

    pub fn layout(&self) -> &LayoutScope {
        self.layouts.top()
    }

    pub fn layout_mut(&mut self) -> &mut LayoutScope {
        self.layouts.top_mut()
    }

    /// Box size for the rest of the current layout scope, until it is popped.
    pub fn set_layout_box_size(&mut self, size: Size) {
        self.layouts.top_mut().box_size = size;
    }

    /// Padding for the rest of the current layout scope, until it is popped.
    pub fn set_layout_padding(&mut self, padding: f32) {
        self.layouts.top_mut().padding = padding;
    }

    /// Gap between boxes for the rest of the current layout scope, until it
    /// is popped.
    pub fn set_layout_spacer(&mut self, spacer: f32) {
        self.layouts.top_mut().spacer = spacer;
    }

    /// Heights for the next boxes of the current layout scope. The table
    /// lasts until the scope is popped or the sizes are set again.
    pub fn set_layout_row_sizes(&mut self, sizes: &[f32]) {
        self.layouts.top_mut().set_row_sizes(sizes);
    }

    /// Widths for the next boxes in a row, or for the columns of the next
    /// column group. Lasts until the scope is popped or the sizes are set again.
    pub fn set_layout_column_sizes(&mut self, sizes: &[f32]) {
        self.layouts.top_mut().set_column_sizes(sizes);
    }

    pub fn begin_row(&mut self) {
        self.layouts.top_mut().begin_row();
    }

    pub fn end_row(&mut self) {
        if let Some(extent) = self.layouts.top_mut().end_row() {
            self.grow_parent(extent);
        }
    }

    pub fn row(&mut self, f: impl FnOnce(&mut Self)) {
        self.begin_row();
        f(self);
        self.end_row();
    }

    pub fn begin_column(&mut self) {
        self.layouts.top_mut().begin_column();
    }

    pub fn set_next_column(&mut self) {
        self.layouts.top_mut().set_next_column();
    }

    pub fn end_column(&mut self) {
        if let Some(extent) = self.layouts.top_mut().end_column() {
            self.grow_parent(extent);
        }
    }

    /// The next widget placed in the current scope shows this atlas icon.
    pub fn set_next_icon(&mut self, uv: Rect) {
        self.layouts.top_mut().pending_icon = Some(uv);
    }

    // ---- queries ----

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    /// Stats of the most recently ended frame.
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn widget_count(&self) -> usize {
        self.store.len()
    }

    pub fn identity_count(&self) -> usize {
        self.ids.len()
    }

    pub fn widget(&self, identity: Identity) -> Option<&Widget> {
        if identity == Identity::ROOT {
            return self.store.get(self.root);
        }
        self.ids.lookup(identity).and_then(|id| self.store.get(id))
    }

    pub fn rect_of(&self, identity: Identity) -> Option<Rect> {
        self.widget(identity).map(|w| w.rect)
    }

    /// Current text of a widget (label caption, text box contents, ...).
    pub fn text_from_widget(&self, identity: Identity) -> Option<&str> {
        self.widget(identity).map(|w| w.text.as_str())
    }

    pub fn focus(&self) -> Option<Identity> {
        self.store.get(self.focus).map(|w| w.identity)
    }

    /// This frame's key flags minus those a focused text box consumed.
    pub fn last_event(&self) -> KeyFlags {
        self.input.keys - self.consumed
    }

    /// Cursor position when the current press started.
    pub fn click_anchor(&self) -> Vec2 {
        self.click_anchor
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag
    }

    /// Windows as of the last `end`, back to front: identity, rect, depth.
    pub fn windows(&self) -> impl Iterator<Item = (Identity, Rect, u32)> + '_ {
        self.composited
            .iter()
            .map(|r| (self.store[r.widget].identity, r.rect, r.depth))
    }

    /// Scratch storage that is reset at the start of every frame.
    pub fn frame_arena(&mut self) -> &mut FrameArena {
        &mut self.arena
    }
}

/// Part of a label shown on screen: everything before `##`.
pub fn display_text(label: &str) -> &str {
    match label.find("##") {
        Some(i) => &label[..i],
        None => label,
    }
}

/// Part of a label that feeds the identity hash. `"Save###save"` hashes as
/// `"###save"`, so the visible caption can change without a new widget.
pub fn identity_key(label: &str) -> &str {
    match label.find("###") {
        Some(i) => &label[i..],
        None => label,
    }
}
