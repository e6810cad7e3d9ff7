pub mod drag;

pub use drag::{DragToCloseGesture, GestureSession, ResolvedOutcome};
