//! Time-based animations driven by the runtime's frame clock.

mod animation;
mod easing;

pub use animation::*;
pub use easing::*;
