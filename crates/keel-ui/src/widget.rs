use bitflags::bitflags;
use keel_core::{Rect, Size, Style, Theme};

use crate::identity::Identity;
use crate::textedit::TextCursor;

slotmap::new_key_type! {
    /// Handle into the widget store. Stays valid for the context's lifetime.
    pub struct WidgetId;
}

bitflags! {
    /// Per-widget behavior switches, set by the widget constructors.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WidgetOptions: u32 {
        /// Takes part in press/focus/click handling.
        const INTERACTIVE = 1 << 0;
        /// Moves with the cursor while focused and held.
        const DRAGGABLE = 1 << 1;
        /// A press in the bottom-right corner resizes instead of dragging.
        const RESIZABLE = 1 << 2;
        /// After the first frame, layout no longer assigns the position.
        const PERSISTENT_POSITION = 1 << 3;
    }
}

bitflags! {
    /// Outcome of this frame's interaction pass for one widget.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interaction: u32 {
        const HOVERED = 1 << 0;
        /// Button went down on the widget this frame, or is held while it has focus.
        const PRESSED = 1 << 1;
        /// Button released over the widget that had focus.
        const CLICKED = 1 << 2;
        const FOCUSED = 1 << 3;
        const DRAGGING = 1 << 4;
        const RESIZING = 1 << 5;
        /// Value changed this frame (text edited, checkbox toggled, node opened).
        const CHANGED = 1 << 6;
        /// Return pressed in a focused text box.
        const SUBMITTED = 1 << 7;
    }
}

/// Per-kind persistent state.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    Root,
    Window {
        /// 0 is the front-most window.
        depth: u32,
    },
    Button,
    Label,
    TextBox(TextCursor),
    Panel,
    ScrollRegion(ScrollState),
    ScrollThumb,
    TreeNode {
        open: bool,
    },
    Checkbox {
        checked: bool,
    },
    Icon {
        uv: Rect,
    },
}

impl WidgetKind {
    /// The theme role this kind copies its style from.
    pub fn style_in(&self, theme: &Theme) -> Style {
        match self {
            WidgetKind::Root => Style::default(),
            WidgetKind::Window { .. } => theme.window,
            WidgetKind::Button => theme.button,
            WidgetKind::Label => theme.label,
            WidgetKind::TextBox(_) => theme.input,
            WidgetKind::Panel => theme.panel,
            WidgetKind::ScrollRegion(_) => theme.scrollbar,
            WidgetKind::ScrollThumb => theme.scrollbar_thumb,
            WidgetKind::TreeNode { .. } => theme.tree_node,
            WidgetKind::Checkbox { .. } => theme.checkbox,
            WidgetKind::Icon { .. } => theme.icon,
        }
    }

    /// Secondary style: the title bar for windows.
    pub fn chrome_in(&self, theme: &Theme) -> Option<Style> {
        match self {
            WidgetKind::Window { .. } => Some(theme.title_bar),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Root => "root",
            WidgetKind::Window { .. } => "window",
            WidgetKind::Button => "button",
            WidgetKind::Label => "label",
            WidgetKind::TextBox(_) => "text_box",
            WidgetKind::Panel => "panel",
            WidgetKind::ScrollRegion(_) => "scroll_region",
            WidgetKind::ScrollThumb => "scroll_thumb",
            WidgetKind::TreeNode { .. } => "tree_node",
            WidgetKind::Checkbox { .. } => "checkbox",
            WidgetKind::Icon { .. } => "icon",
        }
    }
}

/// Scroll bookkeeping carried from one frame to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Thumb displacement from the top of the track.
    pub carried_delta: f32,
    /// Content pixels per thumb pixel.
    pub ratio: f32,
    /// Content height measured at the end of the previous build.
    pub content_height: f32,
}

impl ScrollState {
    /// How far the content is shifted up this frame.
    pub fn offset(&self) -> f32 {
        self.carried_delta * self.ratio
    }
}

/// Tree relations. Unset links point at the store's null widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Links {
    pub parent: WidgetId,
    pub prev: WidgetId,
    pub next: WidgetId,
    /// Oldest child attached this frame.
    pub first_child: WidgetId,
    /// Newest child attached this frame; traversal starts here.
    pub recent_child: WidgetId,
}

impl Links {
    pub fn all(id: WidgetId) -> Self {
        Self {
            parent: id,
            prev: id,
            next: id,
            first_child: id,
            recent_child: id,
        }
    }
}

/// One persistent widget record.
#[derive(Clone, Debug)]
pub struct Widget {
    pub identity: Identity,
    pub kind: WidgetKind,
    pub options: WidgetOptions,
    pub flags: Interaction,
    pub rect: Rect,
    /// Extent of the children laid out inside this widget this frame.
    pub content: Size,
    pub text: String,
    pub style: Style,
    pub chrome: Option<Style>,
    pub icon: Option<Rect>,
    /// Inside the enclosing scroll viewport (or not in one).
    pub drawable: bool,
    /// Scroll viewport the widget was laid out in. Hit tests outside it miss.
    pub clip: Option<Rect>,
    pub links: Links,
    /// Frame this widget was last built in. 0 before the first build.
    pub built_frame: u64,
}

impl Widget {
    pub fn new(identity: Identity, kind: WidgetKind, null: WidgetId) -> Self {
        Self {
            identity,
            kind,
            options: WidgetOptions::empty(),
            flags: Interaction::empty(),
            rect: Rect::default(),
            content: Size::default(),
            text: String::new(),
            style: Style::default(),
            chrome: None,
            icon: None,
            drawable: true,
            clip: None,
            links: Links::all(null),
            built_frame: 0,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }
}

/// What a widget call hands back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Response {
    pub id: Identity,
    pub flags: Interaction,
}

impl Response {
    pub fn clicked(&self) -> bool {
        self.flags.contains(Interaction::CLICKED)
    }

    pub fn hovered(&self) -> bool {
        self.flags.contains(Interaction::HOVERED)
    }

    pub fn pressed(&self) -> bool {
        self.flags.contains(Interaction::PRESSED)
    }

    pub fn focused(&self) -> bool {
        self.flags.contains(Interaction::FOCUSED)
    }

    pub fn changed(&self) -> bool {
        self.flags.contains(Interaction::CHANGED)
    }

    pub fn submitted(&self) -> bool {
        self.flags.contains(Interaction::SUBMITTED)
    }

    pub fn dragging(&self) -> bool {
        self.flags.contains(Interaction::DRAGGING)
    }

    pub fn resizing(&self) -> bool {
        self.flags.contains(Interaction::RESIZING)
    }
}
