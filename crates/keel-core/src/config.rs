use crate::error::{Result, UiError};

/// Construction-time sizing and geometry constants for a UI context.
///
/// Tables and stacks never grow after construction, so these bound what a
/// frame may build. Validate with [`UiConfig::validate`]; `Context::new`
/// calls it for you.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UiConfig {
    /// Maximum number of distinct widget identities over the context's lifetime.
    pub identity_capacity: usize,
    pub theme_depth: usize,
    pub layout_depth: usize,
    pub window_depth: usize,
    pub parent_depth: usize,
    /// Initial size of the per-frame scratch buffer.
    pub frame_arena_bytes: usize,

    pub title_bar_height: f32,
    /// Side of the square in a window's bottom-right corner that starts a resize.
    pub resize_corner: f32,
    pub min_window_size: f32,
    pub scrollbar_width: f32,
    pub min_thumb_size: f32,
    pub tree_indent: f32,
    /// Default height of a layout box.
    pub box_height: f32,
    /// Horizontal text inset inside text boxes.
    pub text_inset: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            identity_capacity: 4096,
            theme_depth: 16,
            layout_depth: 32,
            window_depth: 16,
            parent_depth: 64,
            frame_arena_bytes: 16 * 1024,
            title_bar_height: 24.0,
            resize_corner: 12.0,
            min_window_size: 48.0,
            scrollbar_width: 8.0,
            min_thumb_size: 20.0,
            tree_indent: 16.0,
            box_height: 24.0,
            text_inset: 4.0,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<()> {
        self.check()
            .inspect_err(|e| log::warn!("rejected ui config: {e}"))
    }

    fn check(&self) -> Result<()> {
        let non_zero = [
            ("identity_capacity", self.identity_capacity),
            ("theme_depth", self.theme_depth),
            ("layout_depth", self.layout_depth),
            ("window_depth", self.window_depth),
            ("parent_depth", self.parent_depth),
        ];
        for (field, v) in non_zero {
            if v == 0 {
                return Err(UiError::InvalidConfig {
                    field,
                    reason: "must be non-zero",
                });
            }
        }
        // Every window pushes a parent and a layout scope on top of the root's.
        if self.parent_depth < 2 || self.layout_depth < 2 {
            return Err(UiError::InvalidConfig {
                field: "parent_depth/layout_depth",
                reason: "must leave room above the root scope",
            });
        }
        if self.identity_capacity > u32::MAX as usize {
            return Err(UiError::InvalidConfig {
                field: "identity_capacity",
                reason: "must fit in 32 bits",
            });
        }
        let positive = [
            ("title_bar_height", self.title_bar_height),
            ("min_window_size", self.min_window_size),
            ("scrollbar_width", self.scrollbar_width),
            ("min_thumb_size", self.min_thumb_size),
            ("box_height", self.box_height),
        ];
        for (field, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(UiError::InvalidConfig {
                    field,
                    reason: "must be a positive number",
                });
            }
        }
        if !(self.resize_corner >= 0.0 && self.tree_indent >= 0.0 && self.text_inset >= 0.0) {
            return Err(UiError::InvalidConfig {
                field: "resize_corner/tree_indent/text_inset",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
