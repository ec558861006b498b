//! # Keel core types
//!
//! Plain data shared by the engine (`keel-ui`) and the collaborators around
//! it:
//!
//! - geometry (`Vec2`, `Size`, `Rect`) and `Color`;
//! - `Theme`/`Style`, the visual attributes widgets copy when built;
//! - `InputSnapshot`, the once-per-frame view of cursor, buttons and keys;
//! - `DrawSink` and `FontService`, the renderer and font interfaces;
//! - `FrameArena`, scratch storage reset every frame;
//! - `UiConfig` and `UiError`.
//!
//! Nothing here knows about widgets or frames.

pub mod arena;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod render_api;
pub mod theme;

pub use arena::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use render_api::*;
pub use theme::*;
