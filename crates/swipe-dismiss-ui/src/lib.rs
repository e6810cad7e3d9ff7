//! Swipe-to-dismiss behavior for a single panel.
//!
//! [`SwipeDismissPanel`] composes any [`PanelSurface`]: it interprets the
//! pointer stream with the drag-to-close gesture, moves the surface while the
//! finger is down and, on release, either animates it back to rest or slides
//! it off-screen, notifies the [`CloseListener`] and asks the [`DismissHost`]
//! to tear the container down.

mod host;
mod panel;
mod surface;

pub use host::{CloseListener, DismissHost};
pub use panel::{PanelPhase, SwipeDismissPanel};
pub use surface::{LayerSurface, PanelSurface};

pub use swipe_dismiss_animation::{AnimationSpec, Easing};
pub use swipe_dismiss_foundation::{
    AttributeSet, AttributeValue, ConfigError, GestureConfig, Orientation, PointerEvent,
    PointerEventKind, ResolvedOutcome, SharedGestureConfig,
};
pub use swipe_dismiss_ui_graphics::{Point, Size};

pub mod prelude {
    pub use crate::host::{CloseListener, DismissHost};
    pub use crate::panel::{PanelPhase, SwipeDismissPanel};
    pub use crate::surface::{LayerSurface, PanelSurface};
    pub use swipe_dismiss_foundation::prelude::*;
}
