use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn frame_callbacks_run_on_drain_not_on_register() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let seen = Rc::new(Cell::new(None));

    let seen_in_callback = Rc::clone(&seen);
    let _registration = clock.with_frame_nanos(move |time| seen_in_callback.set(Some(time)));

    assert_eq!(seen.get(), None, "callback must not run synchronously");
    assert!(runtime.needs_frame());

    runtime.handle().drain_frame_callbacks(16_000_000);
    assert_eq!(seen.get(), Some(16_000_000));
    assert!(!runtime.needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let fired = Rc::new(Cell::new(false));

    let fired_in_callback = Rc::clone(&fired);
    let registration = runtime
        .frame_clock()
        .with_frame_nanos(move |_| fired_in_callback.set(true));
    drop(registration);

    runtime.handle().drain_frame_callbacks(1);
    assert!(!fired.get(), "cancelled callback must never run");
    assert!(!runtime.handle().has_frame_callbacks());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let keep_alive = Rc::new(RefCell::new(Vec::new()));

    let clock = runtime.frame_clock();
    let frames_outer = Rc::clone(&frames);
    let keep_alive_outer = Rc::clone(&keep_alive);
    let outer_clock = clock.clone();
    let registration = outer_clock.with_frame_nanos(move |nanos| {
        frames_outer.borrow_mut().push(nanos);
        let frames_inner = Rc::clone(&frames_outer);
        let next = clock.with_frame_nanos(move |nanos| frames_inner.borrow_mut().push(nanos));
        keep_alive_outer.borrow_mut().push(next);
    });
    keep_alive.borrow_mut().push(registration);

    handle.drain_frame_callbacks(16_000_000);
    assert_eq!(frames.borrow().as_slice(), &[16_000_000]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(32_000_000);
    assert_eq!(frames.borrow().as_slice(), &[16_000_000, 32_000_000]);
}

#[test]
fn scheduler_is_asked_once_per_pending_frame() {
    let scheduler = Rc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let clock = runtime.frame_clock();

    let _a = clock.with_frame_nanos(|_| {});
    let _b = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 1);

    runtime.handle().drain_frame_callbacks(1);
    let _c = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 2);
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    handle.drain_frame_callbacks(1);
}
