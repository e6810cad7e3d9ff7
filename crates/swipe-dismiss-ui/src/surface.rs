use std::cell::Cell;
use std::rc::Rc;
use swipe_dismiss_animation::{Animatable, AnimationSpec};
use swipe_dismiss_core::RuntimeHandle;
use swipe_dismiss_ui_graphics::{Point, Size};

/// What a panel needs from the thing it moves.
pub trait PanelSurface {
    fn translation(&self) -> Point;

    fn set_translation(&mut self, translation: Point);

    /// Measured size. Zero until layout has happened.
    fn size(&self) -> Size;

    /// Abandon any running translation animation without completing it.
    fn cancel_animation(&mut self);

    /// Animate the translation to `target`.
    ///
    /// Must return immediately. `on_end` runs at most once, later, from the
    /// host's frame loop, and only if the animation reaches its target.
    fn animate_translation(
        &mut self,
        target: Point,
        spec: AnimationSpec,
        on_end: Box<dyn FnOnce() + 'static>,
    );

    /// Device-scaled touch slop, when the platform knows it.
    fn scaled_touch_slop(&self) -> Option<f32> {
        None
    }
}

/// In-memory graphics layer: a translation animated on the runtime's frame clock.
///
/// Clones share the same layer, so a renderer can keep one to read the
/// translation while the panel owns another.
#[derive(Clone)]
pub struct LayerSurface {
    translation: Rc<Cell<Point>>,
    size: Rc<Cell<Size>>,
    animatable: Animatable<Point>,
    touch_slop: Option<f32>,
}

impl LayerSurface {
    pub fn new(size: Size, runtime: RuntimeHandle) -> Self {
        let translation = Rc::new(Cell::new(Point::ZERO));
        let animatable = Animatable::new(Point::ZERO, runtime);
        let sink = Rc::clone(&translation);
        animatable.set_value_observer(move |value| sink.set(*value));
        Self {
            translation,
            size: Rc::new(Cell::new(size)),
            animatable,
            touch_slop: None,
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = Some(touch_slop);
        self
    }

    /// Layout pass result.
    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    pub fn is_animating(&self) -> bool {
        self.animatable.is_running()
    }
}

impl PanelSurface for LayerSurface {
    fn translation(&self) -> Point {
        self.translation.get()
    }

    fn set_translation(&mut self, translation: Point) {
        self.animatable.snap_to(translation);
    }

    fn size(&self) -> Size {
        self.size.get()
    }

    fn cancel_animation(&mut self) {
        self.animatable.stop();
    }

    fn animate_translation(
        &mut self,
        target: Point,
        spec: AnimationSpec,
        on_end: Box<dyn FnOnce() + 'static>,
    ) {
        self.animatable.animate_to(target, spec, on_end);
    }

    fn scaled_touch_slop(&self) -> Option<f32> {
        self.touch_slop
    }
}
