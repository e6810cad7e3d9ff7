//! Drag-to-close gesture recogniser.
//!
//! Decides whether a touch stream belongs to the panel (interception) and
//! turns raw pointer travel into a panel offset along the configured axis.
//! It never touches the panel itself; the caller applies the offsets and acts
//! on the [`ResolvedOutcome`] of a release.

use crate::config::SharedGestureConfig;
use crate::gesture_constants::{INTERCEPT_SLOP_MULTIPLIER, MIN_FRICTION};
use crate::nodes::input::types::{PointerEvent, PointerEventKind};
use crate::orientation::Orientation;
use swipe_dismiss_ui_graphics::{Point, Size};

/// How a finished drag resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedOutcome {
    /// Snap back to rest.
    Open,
    /// Slide off-screen and notify.
    Close,
}

/// State of one press-to-release cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Raw pointer coordinates of the press.
    pub intercept_origin: Point,
    /// Last applied offset along the axis. Never negative.
    pub current_offset: f32,
    /// Latched once a move claims the stream.
    pub intercepted: bool,
    /// Set by the first move that applied an offset.
    pub dragging: bool,
}

impl GestureSession {
    pub fn new(origin: Point) -> Self {
        Self {
            intercept_origin: origin,
            current_offset: 0.0,
            intercepted: false,
            dragging: false,
        }
    }
}

pub struct DragToCloseGesture {
    config: SharedGestureConfig,
    session: Option<GestureSession>,
}

impl DragToCloseGesture {
    pub fn new(config: SharedGestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &SharedGestureConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn current_offset(&self) -> f32 {
        self.session.map_or(0.0, |session| session.current_offset)
    }

    pub fn is_intercepted(&self) -> bool {
        self.session.is_some_and(|session| session.intercepted)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|session| session.dragging)
    }

    /// Starts a new session at the raw coordinates of a press.
    pub fn press(&mut self, event: &PointerEvent) {
        self.session = Some(GestureSession::new(event.global_position));
    }

    /// Whether the panel should take this event away from its descendants.
    ///
    /// Presses only record the origin. Releases never intercept and end the
    /// session of a stream the panel did not claim. A move
    /// intercepts when its travel along the axis reaches three touch slops or
    /// dominates the cross-axis travel; after that the session stays latched.
    pub fn should_intercept(&mut self, event: &PointerEvent) -> bool {
        if !self.config.borrow().drag_enabled() {
            return false;
        }
        match event.kind {
            PointerEventKind::Down => {
                self.press(event);
                false
            }
            PointerEventKind::Move => {
                let Some(orientation) = self.orientation_or_disable() else {
                    return false;
                };
                let touch_slop = self.config.borrow().touch_slop();
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                if session.intercepted {
                    return true;
                }
                let origin = session.intercept_origin;
                let raw = event.global_position;
                let offset_primary = (orientation.primary(raw) - orientation.primary(origin)).abs();
                let offset_secondary =
                    (orientation.secondary(raw) - orientation.secondary(origin)).abs();
                let intercept = offset_primary >= touch_slop * INTERCEPT_SLOP_MULTIPLIER
                    || offset_primary > offset_secondary;
                if intercept {
                    session.intercepted = true;
                    log::debug!(
                        "drag-to-close intercepted: {offset_primary} along {orientation:?}, {offset_secondary} across"
                    );
                }
                intercept
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                // The stream ended with the descendants; its origin is spent.
                self.session = None;
                false
            }
        }
    }

    /// Applies a move and returns the new offset, or `None` when nothing moved.
    ///
    /// The offset is the raw travel from the press divided by the current
    /// friction. Travel back past the origin is ignored, so the last positive
    /// offset is kept.
    pub fn handle_move(&mut self, event: &PointerEvent) -> Option<f32> {
        if !self.config.borrow().drag_enabled() {
            return None;
        }
        let orientation = self.orientation_or_disable()?;
        let friction = self.config.borrow().friction().max(MIN_FRICTION);
        let session = self.session.as_mut()?;
        let delta = (orientation.primary(event.global_position)
            - orientation.primary(session.intercept_origin))
            / friction;
        if delta > 0.0 {
            session.current_offset = delta;
            session.dragging = true;
            Some(delta)
        } else {
            None
        }
    }

    /// Ends the session and decides between snapping back and closing.
    ///
    /// Closes only when the offset is strictly past `extent / threshold_fraction`.
    pub fn handle_release(&mut self, panel_size: Size) -> ResolvedOutcome {
        let offset = self.session.take().map_or(0.0, |session| session.current_offset);
        let config = self.config.borrow();
        let orientation = config.orientation().unwrap_or_default();
        let threshold = config.close_threshold(orientation.extent(panel_size));
        let outcome = if offset > threshold {
            ResolvedOutcome::Close
        } else {
            ResolvedOutcome::Open
        };
        log::debug!("drag released at {offset} (threshold {threshold}): {outcome:?}");
        outcome
    }

    /// Ends the session without a decision. A cancelled stream always snaps back.
    pub fn cancel(&mut self) -> ResolvedOutcome {
        self.session = None;
        ResolvedOutcome::Open
    }

    pub fn reset(&mut self) {
        self.session = None;
    }

    fn orientation_or_disable(&self) -> Option<Orientation> {
        let mut config = self.config.borrow_mut();
        let orientation = config.orientation();
        if orientation.is_none() && config.drag_enabled() {
            log::warn!(
                "unrecognized panel orientation {}, disabling drag",
                config.orientation_raw()
            );
            config.set_drag_enabled(false);
        }
        orientation
    }
}
