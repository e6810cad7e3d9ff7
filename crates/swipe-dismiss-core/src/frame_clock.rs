use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

/// Source of one-shot frame callbacks for a runtime.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Runs `callback` with the frame time of the next drained frame.
    ///
    /// Dropping the returned registration before that frame cancels it.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let pending = self
            .runtime
            .register_frame_callback(callback)
            .map(|id| (self.runtime.clone(), id));
        FrameCallbackRegistration { pending }
    }
}

/// A queued frame callback. Cancels on drop unless the frame already ran it.
#[must_use = "dropping the registration cancels the frame callback"]
pub struct FrameCallbackRegistration {
    pending: Option<(RuntimeHandle, FrameCallbackId)>,
}

impl FrameCallbackRegistration {
    /// False when the runtime was already gone at registration time.
    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some((runtime, id)) = self.pending.take() {
            runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}
