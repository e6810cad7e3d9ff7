use std::cell::Cell;
use std::rc::Rc;
use swipe_dismiss_core::Runtime;
use swipe_dismiss_ui::{
    AttributeSet, ConfigError, DismissHost, LayerSurface, PanelSurface, Point, PointerEvent,
    PointerEventKind, Size, SwipeDismissPanel,
};

const FRAME_NANOS: u64 = 16_000_000;
const MAX_FRAMES: usize = 1_000;

/// Stand-in for the screen hosting a swipe-dismiss panel.
#[derive(Clone, Default)]
pub struct DemoScreen {
    dismissed: Rc<Cell<bool>>,
}

impl DemoScreen {
    pub fn is_dismissed(&self) -> bool {
        self.dismissed.get()
    }
}

impl DismissHost for DemoScreen {
    fn dismiss(&self) {
        log::info!("screen dismissed");
        self.dismissed.set(true);
    }
}

/// One screen with one panel, driven by scripted input and a fake vsync.
pub struct DemoSession {
    runtime: Runtime,
    panel: SwipeDismissPanel<LayerSurface>,
    screen: DemoScreen,
    frame_time_nanos: u64,
}

impl DemoSession {
    pub fn new(size: Size, attributes: &AttributeSet) -> Result<Self, ConfigError> {
        let runtime = Runtime::default();
        let layer = LayerSurface::new(size, runtime.handle());
        let panel = SwipeDismissPanel::from_attributes(layer, attributes)?;
        let screen = DemoScreen::default();
        panel.set_dismiss_host(screen.clone());
        panel.set_on_drag_close_listener(|| {
            // Transient acknowledgment, like a toast.
            println!("  -> closed");
        });
        Ok(Self {
            runtime,
            panel,
            screen,
            frame_time_nanos: 0,
        })
    }

    /// Presses at the origin, drags `distance` along `axis_step` in `steps`
    /// moves and releases. Content under the panel ignores everything.
    pub fn swipe(&mut self, axis_step: Point, distance: f32, steps: usize) {
        let steps = steps.max(1);
        let mut send = |kind, t: f32| {
            let at = Point::new(axis_step.x * distance * t, axis_step.y * distance * t);
            let event = PointerEvent::at(kind, at.x, at.y);
            self.panel.dispatch(&event, |_| false);
        };
        send(PointerEventKind::Down, 0.0);
        for i in 1..=steps {
            send(PointerEventKind::Move, i as f32 / steps as f32);
        }
        send(PointerEventKind::Up, 1.0);
    }

    /// Pumps frames until the panel settles. Returns the number of frames.
    pub fn settle(&mut self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() && frames < MAX_FRAMES {
            self.frame_time_nanos += FRAME_NANOS;
            handle.drain_frame_callbacks(self.frame_time_nanos);
            frames += 1;
        }
        frames
    }

    pub fn translation(&self) -> Point {
        self.panel.surface().translation()
    }

    pub fn screen(&self) -> &DemoScreen {
        &self.screen
    }
}
