//! Cursor-based layout.
//!
//! A [`LayoutScope`] owns a bounding rectangle and a cursor inside it. Each
//! call to [`LayoutScope::place`] hands out the next box:
//!
//! - origin = `bounds` origin + `cursor` (+ `indent` horizontally), moved up
//!   by the scroll offset;
//! - size = `box_size`, where a zero width means "fill the remaining width",
//!   overridden by the current row/column size table entry;
//! - the returned rect is then inset by `padding` on every side.
//!
//! The cursor then advances along `axis` by the full box extent plus
//! `spacer`. Row and column groups save and restore the cursor so boxes can
//! be arranged in grids without a separate layout pass.

use keel_core::{Rect, Size, Vec2};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    /// Boxes stack top to bottom.
    #[default]
    Column,
    /// Boxes run left to right.
    Row,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub axis: Axis,
    pub box_size: Size,
    pub padding: f32,
    pub spacer: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Column,
            box_size: Size::new(0.0, 24.0),
            padding: 0.0,
            spacer: 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Group {
    axis: Axis,
    start: Vec2,
    extent: f32,
    /// Right edge reached by any box in the group, relative to `bounds`.
    right: f32,
    column_width: Option<f32>,
    column_index: usize,
}

/// One box handed out by [`LayoutScope::place`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Final rect, padding applied.
    pub rect: Rect,
    /// Space consumed along the axis (box + spacer) and across it.
    pub extent: Size,
}

#[derive(Clone, Debug)]
pub struct LayoutScope {
    pub bounds: Rect,
    pub cursor: Vec2,
    /// Furthest extent reached by any box, relative to `bounds`.
    pub content: Size,
    pub box_size: Size,
    pub padding: f32,
    pub spacer: f32,
    pub axis: Axis,
    /// Heights for successive boxes in a column; wins over `box_size.height`.
    pub row_sizes: SmallVec<[f32; 8]>,
    /// Widths for successive boxes in a row, or successive column groups.
    pub column_sizes: SmallVec<[f32; 8]>,
    pub row_index: usize,
    pub column_index: usize,
    pub indent: f32,
    /// Vertical shift applied to every box (scroll offset).
    pub scroll: f32,
    /// Visible area; boxes entirely outside it are not drawable.
    pub viewport: Option<Rect>,
    /// Icon to attach to the next widget placed in this scope.
    pub pending_icon: Option<Rect>,
    column_width: Option<f32>,
    groups: SmallVec<[Group; 4]>,
}

impl LayoutScope {
    pub fn new(bounds: Rect, options: LayoutOptions) -> Self {
        Self {
            bounds,
            cursor: Vec2::ZERO,
            content: Size::default(),
            box_size: options.box_size,
            padding: options.padding,
            spacer: options.spacer,
            axis: options.axis,
            row_sizes: SmallVec::new(),
            column_sizes: SmallVec::new(),
            row_index: 0,
            column_index: 0,
            indent: 0.0,
            scroll: 0.0,
            viewport: None,
            pending_icon: None,
            column_width: None,
            groups: SmallVec::new(),
        }
    }

    /// A scope for a child region that inherits box size, padding and spacing.
    pub fn nested(&self, bounds: Rect) -> Self {
        let mut scope = Self::new(
            bounds,
            LayoutOptions {
                axis: Axis::Column,
                box_size: self.box_size,
                padding: self.padding,
                spacer: self.spacer,
            },
        );
        scope.viewport = self.viewport;
        scope
    }

    pub fn options(&self) -> LayoutOptions {
        LayoutOptions {
            axis: self.axis,
            box_size: self.box_size,
            padding: self.padding,
            spacer: self.spacer,
        }
    }

    pub fn set_row_sizes(&mut self, sizes: &[f32]) {
        self.row_sizes = SmallVec::from_slice(sizes);
        self.row_index = 0;
    }

    pub fn set_column_sizes(&mut self, sizes: &[f32]) {
        self.column_sizes = SmallVec::from_slice(sizes);
        self.column_index = 0;
    }

    fn remaining_width(&self) -> f32 {
        (self.bounds.w - self.cursor.x - self.indent).max(0.0)
    }

    fn default_width(&self) -> f32 {
        if self.box_size.width > 0.0 {
            self.box_size.width
        } else {
            self.remaining_width()
        }
    }

    /// Hands out the next box and advances the cursor.
    pub fn place(&mut self) -> Placement {
        self.place_with(None)
    }

    /// Like [`place`](Self::place) but with an explicit box height.
    pub fn place_with_height(&mut self, height: f32) -> Placement {
        self.place_with(Some(height))
    }

    fn place_with(&mut self, height: Option<f32>) -> Placement {
        let mut w = self.column_width.unwrap_or_else(|| self.default_width());
        let mut h = self.box_size.height;
        match self.axis {
            Axis::Column => {
                if let Some(&rh) = self.row_sizes.get(self.row_index) {
                    h = rh;
                }
                self.row_index += 1;
            }
            Axis::Row => {
                if let Some(&cw) = self.column_sizes.get(self.column_index) {
                    w = cw;
                }
                self.column_index += 1;
            }
        }
        if let Some(explicit) = height {
            h = explicit;
        }

        let x = self.cursor.x + self.indent;
        let y = self.cursor.y;
        let rect = Rect::new(
            self.bounds.x + x,
            self.bounds.y + y - self.scroll,
            w,
            h,
        )
        .inset(self.padding);

        self.content.width = self.content.width.max(x + w);
        for g in &mut self.groups {
            g.right = g.right.max(x + w);
        }
        self.content.height = self.content.height.max(y + h);

        let extent = match self.axis {
            Axis::Column => {
                self.cursor.y += h + self.spacer;
                Size::new(w, h + self.spacer)
            }
            Axis::Row => {
                self.cursor.x += w + self.spacer;
                if let Some(g) = self.groups.last_mut() {
                    g.extent = g.extent.max(h);
                }
                Size::new(w + self.spacer, h)
            }
        };
        Placement { rect, extent }
    }

    fn push_group(&mut self) {
        self.groups.push(Group {
            axis: self.axis,
            start: self.cursor,
            extent: 0.0,
            right: self.cursor.x,
            column_width: self.column_width,
            column_index: self.column_index,
        });
    }

    /// Subsequent boxes run left to right until [`end_row`](Self::end_row).
    pub fn begin_row(&mut self) {
        self.push_group();
        self.axis = Axis::Row;
        self.column_width = None;
        self.column_index = 0;
    }

    /// Puts the cursor under the tallest box of the row and returns the
    /// space the row took.
    pub fn end_row(&mut self) -> Option<Size> {
        let Some(g) = self.groups.pop() else {
            log::warn!("end_row without begin_row");
            return None;
        };
        let height = g.extent + self.spacer;
        self.cursor = Vec2::new(g.start.x, g.start.y + height);
        self.axis = g.axis;
        self.column_width = g.column_width;
        self.column_index = g.column_index;
        Some(Size::new(g.right - g.start.x, height))
    }

    fn column_width_at(&self, index: usize) -> f32 {
        self.column_sizes
            .get(index)
            .copied()
            .unwrap_or_else(|| self.default_width())
    }

    /// Starts a grid of columns; boxes in each column stack vertically.
    pub fn begin_column(&mut self) {
        self.push_group();
        self.axis = Axis::Column;
        self.column_index = 0;
        self.column_width = Some(self.column_width_at(0));
    }

    /// Moves the cursor to the top of the next column.
    pub fn set_next_column(&mut self) {
        let width = self.column_width.unwrap_or(0.0);
        let Some(g) = self.groups.last_mut() else {
            log::warn!("set_next_column outside begin_column");
            return;
        };
        g.extent = g.extent.max(self.cursor.y - g.start.y);
        self.cursor.x += width + self.spacer;
        self.cursor.y = g.start.y;
        self.column_index += 1;
        self.column_width = Some(self.column_width_at(self.column_index));
    }

    /// Puts the cursor under the tallest column and returns the space the
    /// columns took.
    pub fn end_column(&mut self) -> Option<Size> {
        let Some(g) = self.groups.pop() else {
            log::warn!("end_column without begin_column");
            return None;
        };
        let height = g.extent.max(self.cursor.y - g.start.y);
        self.cursor = Vec2::new(g.start.x, g.start.y + height);
        self.axis = g.axis;
        self.column_width = g.column_width;
        self.column_index = g.column_index;
        Some(Size::new(g.right - g.start.x, height))
    }

    /// Open row/column groups.
    pub fn group_depth(&self) -> usize {
        self.groups.len()
    }
}
