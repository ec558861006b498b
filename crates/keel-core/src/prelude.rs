pub use crate::arena::{FrameArena, ScratchStr};
pub use crate::color::Color;
pub use crate::config::UiConfig;
pub use crate::error::{ScopeKind, UiError};
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::input::{InputSnapshot, KeyFlags};
pub use crate::render_api::{DrawCmd, DrawList, DrawSink, FontId, FontService, MonospaceFont};
pub use crate::theme::{Style, Theme};
