//! Shared gesture constants for the drag-to-close interaction.
//!
//! Distances are in logical pixels. Hosts that know the device density should
//! report their own scaled touch slop; [`DEFAULT_TOUCH_SLOP`] is only the
//! fallback when none is available.

/// Touch slop used when the host surface cannot report a scaled value.
pub const DEFAULT_TOUCH_SLOP: f32 = 20.0;

/// A move of at least `touch_slop * INTERCEPT_SLOP_MULTIPLIER` along the
/// configured axis claims the stream regardless of the cross-axis movement.
pub const INTERCEPT_SLOP_MULTIPLIER: f32 = 3.0;

/// Divisor applied to raw finger travel. 2.0 moves the panel at half speed.
pub const DEFAULT_FRICTION: f32 = 2.0;

/// Smallest divisor the interpreter will ever use for friction.
pub const MIN_FRICTION: f32 = 0.001;

/// Close threshold divisor: the panel closes past `extent / 4`.
pub const DEFAULT_THRESHOLD_FRACTION: f32 = 4.0;

pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 200;

/// Extra time past the animation duration before a missing completion is
/// treated as lost and the animation guard is released.
pub const DEFAULT_WATCHDOG_GRACE_MS: u64 = 1_000;
