//! Tween animation driven by frame callbacks.
//!
//! Starting an animation never blocks and never completes synchronously: the
//! first sample is taken on the next drained frame, and the completion handler
//! runs from the frame that reaches the target.

use crate::{Easing, Lerp};
use std::cell::RefCell;
use std::rc::Rc;
use swipe_dismiss_core::{FrameCallbackRegistration, RuntimeHandle};

/// Tween parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

type ValueObserver<T> = Box<dyn FnMut(&T) + 'static>;
type CompletionHandler = Box<dyn FnOnce() + 'static>;

/// Animated value holder.
///
/// Clones share the same animation. Each call to [`Animatable::animate_to`]
/// carries its own completion handler, which runs at most once: when that
/// animation reaches its target. Replacing or stopping the animation drops
/// the handler without running it.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    runtime: RuntimeHandle,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    observer: Option<ValueObserver<T>>,
    on_end: Option<CompletionHandler>,
    /// Bumped whenever the running animation is replaced, snapped or stopped.
    generation: u64,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            runtime,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::linear(0),
            start_time_nanos: None,
            registration: None,
            observer: None,
            on_end: None,
            generation: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Called with every new value, including snaps. Replaces any previous observer.
    pub fn set_value_observer(&self, observer: impl FnMut(&T) + 'static) {
        self.inner.borrow_mut().observer = Some(Box::new(observer));
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Animate from the current value to `target`.
    ///
    /// A running animation is abandoned first and its completion handler is
    /// dropped unrun.
    pub fn animate_to(&self, target: T, spec: AnimationSpec, on_end: impl FnOnce() + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
                log::trace!("replacing an unfinished animation");
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.on_end = Some(Box::new(on_end));
            inner.generation += 1;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `value` without animating. Cancels any running animation.
    pub fn snap_to(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.on_end = None;
            inner.generation += 1;
            inner.current = value.clone();
            inner.start = value.clone();
            inner.target = value.clone();
            inner.start_time_nanos = None;
        }
        Self::notify(&self.inner, &value);
    }

    /// Abandon the running animation where it is. Its completion never runs.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.on_end = None;
        inner.generation += 1;
        inner.target = inner.current.clone();
        inner.start_time_nanos = None;
    }

    fn notify(this: &Rc<RefCell<AnimatableInner<T>>>, value: &T) {
        // Taken out so the observer may read the animatable.
        let observer = this.borrow_mut().observer.take();
        if let Some(mut observer) = observer {
            observer(value);
            let mut inner = this.borrow_mut();
            if inner.observer.is_none() {
                inner.observer = Some(observer);
            }
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        } else {
            // No runtime means no frames will ever come; finish in place.
            log::warn!("animation started without a live runtime, jumping to target");
            let (target, on_end) = {
                let mut inner = this.borrow_mut();
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                (inner.target.clone(), inner.on_end.take())
            };
            Self::notify(this, &target);
            if let Some(on_end) = on_end {
                on_end();
            }
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (value, finished, generation) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let generation = inner.generation;

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = spec.duration_millis.saturating_mul(1_000_000);
            let linear_progress = if duration_nanos == 0 {
                1.0
            } else {
                (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0)
            };

            if linear_progress >= 1.0 {
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                inner.start_time_nanos = None;
                (inner.current.clone(), true, generation)
            } else {
                let progress = spec.easing.transform(linear_progress);
                inner.current = inner.start.lerp(&inner.target, progress);
                (inner.current.clone(), false, generation)
            }
        };

        Self::notify(this, &value);

        // The observer replaced or stopped this animation; the new one owns the state.
        if this.borrow().generation != generation {
            return;
        }

        if finished {
            let on_end = this.borrow_mut().on_end.take();
            if let Some(on_end) = on_end {
                on_end();
            }
        } else {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
