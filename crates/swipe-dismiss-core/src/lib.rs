//! Frame runtime for swipe-dismiss panels.
//!
//! Everything here runs on one UI thread. Work that has to happen "later"
//! (animation frames, completion handlers) is queued as a frame callback and
//! executed when the host drains the queue with a frame timestamp.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::RuntimeScheduler;
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
