//! Robot-style harness for swipe-dismiss panels.
//!
//! A [`SwipeRobot`] owns a runtime, a panel over a [`LayerSurface`] and a
//! recording content child. Tests script pointer streams against it and pump
//! frames by hand, so every animation is deterministic.
//!
//! # Example
//!
//! ```
//! use swipe_dismiss_foundation::GestureConfig;
//! use swipe_dismiss_testing::SwipeRobot;
//! use swipe_dismiss_ui_graphics::Size;
//!
//! let mut robot = SwipeRobot::new(Size::new(600.0, 800.0), GestureConfig::default());
//! robot.drag((0.0, 0.0), (0.0, 500.0), 10);
//! robot.wait_for_idle();
//! assert_eq!(robot.close_count(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipe_dismiss_core::Runtime;
use swipe_dismiss_foundation::{
    AttributeSet, ConfigError, GestureConfig, PointerEvent, PointerEventKind,
};
use swipe_dismiss_ui::{CloseListener, DismissHost, LayerSurface, PanelSurface, SwipeDismissPanel};
use swipe_dismiss_ui_graphics::{Point, Size};

/// Frame interval used by [`SwipeRobot::wait_for_idle`].
pub const FRAME_MILLIS: u64 = 16;

const MAX_IDLE_FRAMES: usize = 10_000;

/// Side effects of a completed close, in the order they happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    Closed,
    Dismissed,
}

type NotificationLog = Rc<RefCell<Vec<Notification>>>;

#[derive(Clone, Default)]
pub struct RecordingListener {
    log: NotificationLog,
}

impl CloseListener for RecordingListener {
    fn on_drag_close(&self) {
        self.log.borrow_mut().push(Notification::Closed);
    }
}

#[derive(Clone, Default)]
pub struct RecordingHost {
    log: NotificationLog,
}

impl DismissHost for RecordingHost {
    fn dismiss(&self) {
        self.log.borrow_mut().push(Notification::Dismissed);
    }
}

/// Content under the panel. Records what it receives.
#[derive(Clone)]
pub struct RecordingChild {
    events: Rc<RefCell<Vec<PointerEventKind>>>,
    consumes: Rc<Cell<bool>>,
}

impl RecordingChild {
    fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
            consumes: Rc::new(Cell::new(true)),
        }
    }

    fn deliver(&self, event: &PointerEvent) -> bool {
        self.events.borrow_mut().push(event.kind);
        self.consumes.get()
    }
}

pub struct SwipeRobot {
    runtime: Runtime,
    panel: SwipeDismissPanel<LayerSurface>,
    layer: LayerSurface,
    log: NotificationLog,
    child: RecordingChild,
    frame_time_nanos: u64,
}

impl SwipeRobot {
    /// Panel of `size` with a recording listener and host registered.
    pub fn new(size: Size, config: GestureConfig) -> Self {
        let runtime = Runtime::default();
        let layer = LayerSurface::new(size, runtime.handle());
        let panel = SwipeDismissPanel::new(layer.clone(), config);
        Self::assemble(runtime, layer, panel)
    }

    pub fn with_attributes(size: Size, attributes: &AttributeSet) -> Result<Self, ConfigError> {
        let runtime = Runtime::default();
        let layer = LayerSurface::new(size, runtime.handle());
        let panel = SwipeDismissPanel::from_attributes(layer.clone(), attributes)?;
        Ok(Self::assemble(runtime, layer, panel))
    }

    fn assemble(
        runtime: Runtime,
        layer: LayerSurface,
        panel: SwipeDismissPanel<LayerSurface>,
    ) -> Self {
        let log = NotificationLog::default();
        panel.set_on_drag_close_listener(RecordingListener { log: log.clone() });
        panel.set_dismiss_host(RecordingHost { log: log.clone() });
        Self {
            runtime,
            panel,
            layer,
            log,
            child: RecordingChild::new(),
            frame_time_nanos: 0,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn panel(&self) -> &SwipeDismissPanel<LayerSurface> {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut SwipeDismissPanel<LayerSurface> {
        &mut self.panel
    }

    /// Routes one event through the panel's dispatch, with the recording
    /// child as content. Returns whether anyone handled it.
    pub fn send(&mut self, kind: PointerEventKind, x: f32, y: f32) -> bool {
        let event = PointerEvent::at(kind, x, y);
        let child = &self.child;
        self.panel.dispatch(&event, |event| child.deliver(event))
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEventKind::Down, x, y)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEventKind::Move, x, y)
    }

    pub fn release(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEventKind::Up, x, y)
    }

    pub fn cancel(&mut self, x: f32, y: f32) -> bool {
        self.send(PointerEventKind::Cancel, x, y)
    }

    /// Press at `from`, move to `to` in `steps` equal moves, release at `to`.
    ///
    /// No frames are pumped.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        self.press(from.0, from.1);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        self.release(to.0, to.1);
    }

    /// Advance the frame clock by `millis` and drain one frame.
    pub fn advance_time(&mut self, millis: u64) {
        self.frame_time_nanos += millis * 1_000_000;
        self.runtime
            .handle()
            .drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Pump frames until no frame callbacks remain. Returns the number pumped.
    pub fn wait_for_idle(&mut self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() && frames < MAX_IDLE_FRAMES {
            self.advance_time(FRAME_MILLIS);
            frames += 1;
        }
        frames
    }

    pub fn translation(&self) -> Point {
        self.layer.translation()
    }

    pub fn layer(&self) -> &LayerSurface {
        &self.layer
    }

    pub fn set_size(&self, size: Size) {
        self.layer.set_size(size);
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    pub fn close_count(&self) -> usize {
        self.count(Notification::Closed)
    }

    pub fn dismiss_count(&self) -> usize {
        self.count(Notification::Dismissed)
    }

    fn count(&self, notification: Notification) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|seen| **seen == notification)
            .count()
    }

    /// Kinds the content child has received, in order.
    pub fn child_events(&self) -> Vec<PointerEventKind> {
        self.child.events.borrow().clone()
    }

    /// Whether the content child consumes what it receives. Defaults to true.
    pub fn set_child_consumes(&self, consumes: bool) {
        self.child.consumes.set(consumes);
    }
}
