pub use crate::context::{Context, FrameStats};
pub use crate::identity::{Identity, hash_identity};
pub use crate::layout::{Axis, LayoutOptions};
pub use crate::widget::{Interaction, Response, WidgetOptions};
pub use keel_core::prelude::*;
