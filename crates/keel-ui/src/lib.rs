//! # Keel UI engine
//!
//! An immediate-mode UI whose widgets persist between frames. The
//! application rebuilds its UI every frame by calling widget functions; each
//! call is matched to a stored widget through a stable identity derived from
//! its label and its parent, so focus, scroll positions, window placement
//! and text contents survive without the application holding any handles.
//!
//! A frame is `begin` → widget calls → `end`. `end` paints into any
//! [`keel_core::DrawSink`]; font metrics come from a
//! [`keel_core::FontService`] given at construction.
//!
//! Modules, bottom up:
//!
//! - [`identity`]: label + parent → identity, with collision chaining;
//! - [`store`]: the widget slots and per-frame child lists;
//! - [`scope`] and [`layout`]: bounded scope stacks and cursor layout;
//! - [`interaction`]: hover, focus, click, drag, resize;
//! - [`scroll`] and [`compositor`]: scroll regions and window order;
//! - [`textedit`]: single-line editing;
//! - [`context`] and [`widgets`]: the frame controller and widget calls.

pub mod compositor;
pub mod context;
pub mod identity;
pub mod interaction;
pub mod layout;
mod paint;
pub mod prelude;
pub mod scope;
pub mod scroll;
pub mod store;
pub mod tests;
pub mod textedit;
pub mod widget;
pub mod widgets;

pub use compositor::WindowRecord;
pub use context::*;
pub use identity::*;
pub use interaction::*;
pub use layout::*;
pub use scope::*;
pub use scroll::*;
pub use store::*;
pub use textedit::*;
pub use widget::*;

pub use keel_core;
