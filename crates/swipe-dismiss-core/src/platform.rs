//! Platform abstraction for frame scheduling.
//!
//! The runtime never spins its own loop. It asks the host for a frame and
//! expects the host to call [`RuntimeHandle::drain_frame_callbacks`] once the
//! frame arrives.
//!
//! [`RuntimeHandle::drain_frame_callbacks`]: crate::RuntimeHandle::drain_frame_callbacks

/// Schedules frames on behalf of the runtime.
pub trait RuntimeScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}
