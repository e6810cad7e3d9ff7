//! Capabilities the hosting container hands to a panel.

/// Notified once per successful close, after the slide-out finishes.
pub trait CloseListener {
    fn on_drag_close(&self);
}

impl<F: Fn()> CloseListener for F {
    fn on_drag_close(&self) {
        self()
    }
}

/// A container that can be torn down once its panel has slid away.
pub trait DismissHost {
    fn dismiss(&self);
}

impl<F: Fn()> DismissHost for F {
    fn dismiss(&self) {
        self()
    }
}
