//! Swipe-to-dismiss panel: gesture routing, outcome resolution and the two
//! terminal animations.

use crate::host::{CloseListener, DismissHost};
use crate::surface::PanelSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use swipe_dismiss_animation::{AnimationSpec, Easing};
use swipe_dismiss_foundation::{
    AttributeSet, ConfigError, DragToCloseGesture, GestureConfig, PointerEvent, PointerEventKind,
    ResolvedOutcome, SharedGestureConfig,
};
use web_time::Instant;

/// Where a panel is in its press, drag, animate cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Idle,
    Dragging,
    Animating(ResolvedOutcome),
}

type ListenerSlot = Rc<RefCell<Option<Rc<dyn CloseListener>>>>;
type HostSlot = Rc<RefCell<Option<Rc<dyn DismissHost>>>>;

/// Single-flight lock for the terminal animations.
///
/// Completion handlers carry the generation they were started with; a
/// handler whose generation is no longer current does nothing.
#[derive(Default)]
struct AnimationGuard {
    running: Cell<Option<ResolvedOutcome>>,
    deadline: Cell<Option<Instant>>,
    generation: Cell<u64>,
}

impl AnimationGuard {
    fn running(&self) -> Option<ResolvedOutcome> {
        self.running.get()
    }

    fn acquire(&self, outcome: ResolvedOutcome, timeout: Duration) -> u64 {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.running.set(Some(outcome));
        self.deadline.set(Instant::now().checked_add(timeout));
        generation
    }

    /// Releases the lock for a completing animation. False for stale handlers.
    fn release(&self, generation: u64) -> bool {
        if self.generation.get() != generation || self.running.get().is_none() {
            return false;
        }
        self.running.set(None);
        self.deadline.set(None);
        true
    }

    fn is_overdue(&self) -> bool {
        self.running.get().is_some()
            && self
                .deadline
                .get()
                .is_some_and(|deadline| Instant::now() > deadline)
    }

    fn force_release(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.running.set(None);
        self.deadline.set(None);
    }
}

/// Drag-to-close behavior composed over any [`PanelSurface`].
///
/// Pointer events are fed either through [`SwipeDismissPanel::dispatch`],
/// which also routes them to the panel's content, or through the two
/// container hooks [`on_intercept_pointer_event`](Self::on_intercept_pointer_event)
/// and [`on_pointer_event`](Self::on_pointer_event) when the host already
/// implements intercept-style dispatch.
pub struct SwipeDismissPanel<S: PanelSurface> {
    surface: S,
    gesture: DragToCloseGesture,
    guard: Rc<AnimationGuard>,
    close_listener: ListenerSlot,
    host: HostSlot,
    easing: Easing,
    /// The panel owns the current stream, either by interception or because
    /// no descendant took the press.
    touch_target: bool,
}

impl<S: PanelSurface> SwipeDismissPanel<S> {
    pub fn new(surface: S, config: GestureConfig) -> Self {
        Self::with_shared_config(surface, config.shared())
    }

    /// Builds a panel that reads `config` live on every event.
    ///
    /// A touch slop reported by the surface replaces the configured one.
    pub fn with_shared_config(surface: S, config: SharedGestureConfig) -> Self {
        if let Some(touch_slop) = surface.scaled_touch_slop() {
            config.borrow_mut().set_touch_slop(touch_slop);
        }
        Self {
            surface,
            gesture: DragToCloseGesture::new(config),
            guard: Rc::new(AnimationGuard::default()),
            close_listener: Rc::new(RefCell::new(None)),
            host: Rc::new(RefCell::new(None)),
            easing: Easing::default(),
            touch_target: false,
        }
    }

    pub fn from_attributes(surface: S, attributes: &AttributeSet) -> Result<Self, ConfigError> {
        Ok(Self::new(surface, GestureConfig::from_attributes(attributes)?))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &SharedGestureConfig {
        self.gesture.config()
    }

    pub fn gesture(&self) -> &DragToCloseGesture {
        &self.gesture
    }

    /// Replaces the registered listener. It is read when a close completes.
    pub fn set_on_drag_close_listener(&self, listener: impl CloseListener + 'static) {
        *self.close_listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn clear_on_drag_close_listener(&self) {
        self.close_listener.borrow_mut().take();
    }

    pub fn set_dismiss_host(&self, host: impl DismissHost + 'static) {
        *self.host.borrow_mut() = Some(Rc::new(host));
    }

    pub fn clear_dismiss_host(&self) {
        self.host.borrow_mut().take();
    }

    pub fn set_drag_enabled(&self, enabled: bool) {
        self.config().borrow_mut().set_drag_enabled(enabled);
    }

    pub fn drag_enabled(&self) -> bool {
        self.config().borrow().drag_enabled()
    }

    pub fn set_friction(&self, friction: f32) -> Result<(), ConfigError> {
        self.config().borrow_mut().set_friction(friction)
    }

    pub fn friction(&self) -> f32 {
        self.config().borrow().friction()
    }

    pub fn set_threshold_fraction(&self, fraction: f32) -> Result<(), ConfigError> {
        self.config().borrow_mut().set_threshold_fraction(fraction)
    }

    pub fn threshold_fraction(&self) -> f32 {
        self.config().borrow().threshold_fraction()
    }

    pub fn set_duration_ms(&self, duration_ms: u64) {
        self.config().borrow_mut().set_animation_duration_ms(duration_ms);
    }

    pub fn duration_ms(&self) -> u64 {
        self.config().borrow().animation_duration_ms()
    }

    pub fn set_orientation_raw(&self, raw: i32) {
        self.config().borrow_mut().set_orientation_raw(raw);
    }

    pub fn orientation_raw(&self) -> i32 {
        self.config().borrow().orientation_raw()
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn phase(&self) -> PanelPhase {
        if let Some(outcome) = self.guard.running() {
            PanelPhase::Animating(outcome)
        } else if self.gesture.is_dragging() {
            PanelPhase::Dragging
        } else {
            PanelPhase::Idle
        }
    }

    pub fn is_animation_running(&self) -> bool {
        self.guard.running().is_some()
    }

    /// Container intercept hook. True when the panel claims the stream.
    ///
    /// Never claims while a terminal animation runs.
    pub fn on_intercept_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.release_overdue_guard();
        }
        if self.is_animation_running() {
            // Track stream boundaries anyway so the next drag starts from its own press.
            match event.kind {
                PointerEventKind::Down => self.gesture.press(event),
                PointerEventKind::Up | PointerEventKind::Cancel => self.gesture.reset(),
                PointerEventKind::Move => {}
            }
            return false;
        }
        self.gesture.should_intercept(event)
    }

    /// Container touch hook for a stream the panel owns. Returns whether the
    /// event was handled, which is false only while dragging is disabled.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.drag_enabled() {
            return false;
        }
        match event.kind {
            PointerEventKind::Down => {
                self.release_overdue_guard();
                self.gesture.press(event);
            }
            PointerEventKind::Move => {
                if !self.is_animation_running() {
                    self.apply_move(event);
                }
            }
            PointerEventKind::Up => {
                if self.is_animation_running() {
                    self.gesture.reset();
                } else {
                    match self.gesture.handle_release(self.surface.size()) {
                        ResolvedOutcome::Open => self.open(),
                        ResolvedOutcome::Close => self.close(),
                    };
                }
            }
            PointerEventKind::Cancel => {
                self.gesture.cancel();
                if !self.is_animation_running() {
                    self.open();
                }
            }
        }
        true
    }

    /// Routes one event between the panel and its content.
    ///
    /// `child` delivers an event to the content and reports whether it was
    /// consumed. Once the panel intercepts, the content receives a `Cancel`
    /// and the rest of the stream goes to the panel alone. A press nobody
    /// consumes also makes the panel the target for that stream.
    pub fn dispatch(
        &mut self,
        event: &PointerEvent,
        child: impl FnOnce(&PointerEvent) -> bool,
    ) -> bool {
        if event.kind == PointerEventKind::Down {
            self.touch_target = false;
        }

        let handled = if self.touch_target {
            self.on_pointer_event(event)
        } else if self.on_intercept_pointer_event(event) {
            self.touch_target = true;
            child(&event.copy_with_kind(PointerEventKind::Cancel));
            self.on_pointer_event(event)
        } else {
            let consumed = child(event);
            if !consumed && event.kind == PointerEventKind::Down {
                self.touch_target = true;
                self.on_pointer_event(event)
            } else {
                consumed
            }
        };

        if handled {
            event.consume();
        }
        if event.kind.ends_stream() {
            self.touch_target = false;
        }
        handled
    }

    /// Animates the panel back to rest. Returns whether an animation started.
    pub fn open(&mut self) -> bool {
        self.start_terminal_animation(ResolvedOutcome::Open)
    }

    /// Slides the panel off by its full extent, then notifies the listener
    /// and dismisses the host. Returns whether an animation started.
    pub fn close(&mut self) -> bool {
        self.start_terminal_animation(ResolvedOutcome::Close)
    }

    fn apply_move(&mut self, event: &PointerEvent) {
        let Some(offset) = self.gesture.handle_move(event) else {
            return;
        };
        let orientation = self.config().borrow().orientation().unwrap_or_default();
        let translation = orientation.with_primary(self.surface.translation(), offset);
        self.surface.set_translation(translation);
    }

    fn release_overdue_guard(&mut self) -> bool {
        if !self.guard.is_overdue() {
            return false;
        }
        log::warn!(
            "terminal animation {:?} never completed, releasing the panel",
            self.guard.running()
        );
        self.guard.force_release();
        self.surface.cancel_animation();
        true
    }

    fn start_terminal_animation(&mut self, outcome: ResolvedOutcome) -> bool {
        if self.is_animation_running() && !self.release_overdue_guard() {
            log::trace!("{outcome:?} dropped, {:?} still running", self.guard.running());
            return false;
        }

        let (orientation, duration_ms, grace_ms) = {
            let config = self.config().borrow();
            (
                config.orientation().unwrap_or_default(),
                config.animation_duration_ms(),
                config.watchdog_grace_ms(),
            )
        };
        let current = self.surface.translation();
        let target_offset = match outcome {
            ResolvedOutcome::Open => 0.0,
            ResolvedOutcome::Close => orientation.extent(self.surface.size()),
        };
        // Already at rest: no snap-back runs and the guard stays free, so a
        // tap-length release cannot lock out the next drag for a full duration.
        if outcome == ResolvedOutcome::Open && orientation.primary(current) == 0.0 {
            return false;
        }

        self.surface.cancel_animation();
        let timeout = Duration::from_millis(duration_ms.saturating_add(grace_ms));
        let generation = self.guard.acquire(outcome, timeout);
        log::debug!("animating {outcome:?} to {target_offset} over {duration_ms}ms");

        let guard = Rc::clone(&self.guard);
        let listener = Rc::clone(&self.close_listener);
        let host = Rc::clone(&self.host);
        let on_end = move || {
            if !guard.release(generation) {
                log::debug!("ignoring completion of a released {outcome:?} animation");
                return;
            }
            if outcome != ResolvedOutcome::Close {
                return;
            }
            // Cloned out so the listener may re-register itself.
            let listener = listener.borrow().clone();
            if let Some(listener) = listener {
                listener.on_drag_close();
            }
            let host = host.borrow().clone();
            if let Some(host) = host {
                host.dismiss();
            }
        };

        self.surface.animate_translation(
            orientation.with_primary(current, target_offset),
            AnimationSpec::tween(duration_ms, self.easing),
            Box::new(on_end),
        );
        true
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod panel_tests;
