//! Foundation for swipe-dismiss panels: pointer input, configuration and the
//! drag-to-close gesture interpreter.

pub mod config;
pub mod gesture_constants;
pub mod nodes;
pub mod orientation;

#[cfg(test)]
mod tests;

pub use config::{
    AttributeSet, AttributeValue, ConfigError, GestureConfig, SharedGestureConfig,
};
pub use nodes::input::gestures::{DragToCloseGesture, GestureSession, ResolvedOutcome};
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId};
pub use orientation::Orientation;
pub use swipe_dismiss_ui_graphics::{Point, Size};

pub mod prelude {
    pub use crate::config::{AttributeSet, AttributeValue, GestureConfig, SharedGestureConfig};
    pub use crate::nodes::input::gestures::{DragToCloseGesture, ResolvedOutcome};
    pub use crate::nodes::input::prelude::*;
    pub use crate::orientation::Orientation;
}
