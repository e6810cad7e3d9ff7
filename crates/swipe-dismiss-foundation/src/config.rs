//! Gesture configuration and the attribute table it is read from.

use crate::gesture_constants::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_FRICTION, DEFAULT_THRESHOLD_FRACTION,
    DEFAULT_TOUCH_SLOP, DEFAULT_WATCHDOG_GRACE_MS,
};
use crate::orientation::Orientation;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub const ATTR_ENABLE_DRAG: &str = "sf_enable_drag";
pub const ATTR_FRICTION: &str = "sf_friction";
pub const ATTR_PERCENT_SPRING: &str = "sf_percent_spring";
pub const ATTR_DURATION: &str = "sf_duration";
pub const ATTR_ORIENTATION: &str = "sf_orientation";

/// Live configuration shared between a panel and whoever tunes it.
///
/// The interpreter reads it on every event, so a change made between two
/// moves applies from the next move on and never rewrites an offset that was
/// already applied.
pub type SharedGestureConfig = Rc<RefCell<GestureConfig>>;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Friction must be finite and strictly positive; it divides finger travel.
    InvalidFriction(f32),
    /// The threshold fraction must be finite and strictly positive.
    InvalidThresholdFraction(f32),
    InvalidDuration(i64),
    WrongAttributeType {
        key: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFriction(value) => {
                write!(f, "friction must be a positive number, got {value}")
            }
            ConfigError::InvalidThresholdFraction(value) => {
                write!(f, "threshold fraction must be a positive number, got {value}")
            }
            ConfigError::InvalidDuration(value) => {
                write!(f, "animation duration must not be negative, got {value}ms")
            }
            ConfigError::WrongAttributeType { key, expected } => {
                write!(f, "attribute `{key}` expects a {expected} value")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Float(f32),
    Int(i64),
}

impl AttributeValue {
    fn as_bool(self) -> Option<bool> {
        match self {
            AttributeValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Integers are accepted where a float is expected.
    fn as_float(self) -> Option<f32> {
        match self {
            AttributeValue::Float(value) => Some(value),
            AttributeValue::Int(value) => Some(value as f32),
            AttributeValue::Bool(_) => None,
        }
    }

    fn as_int(self) -> Option<i64> {
        match self {
            AttributeValue::Int(value) => Some(value),
            _ => None,
        }
    }
}

/// Styled attributes handed to a panel at construction, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    entries: SmallVec<[(String, AttributeValue); 5]>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Later values for the same key replace earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, value: AttributeValue) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<AttributeValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tuning for the drag-to-close gesture.
///
/// Orientation is stored as its raw attribute value. An unrecognized value is
/// kept as-is and disables dragging the first time a move needs the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    drag_enabled: bool,
    friction: f32,
    threshold_fraction: f32,
    animation_duration_ms: u64,
    orientation_raw: i32,
    touch_slop: f32,
    watchdog_grace_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_enabled: true,
            friction: DEFAULT_FRICTION,
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            orientation_raw: Orientation::VERTICAL_RAW,
            touch_slop: DEFAULT_TOUCH_SLOP,
            watchdog_grace_ms: DEFAULT_WATCHDOG_GRACE_MS,
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the `sf_*` attribute table on top of the defaults.
    ///
    /// Unknown keys are ignored. The first malformed value aborts with an error.
    pub fn from_attributes(attributes: &AttributeSet) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in attributes.iter() {
            let wrong_type = |expected| ConfigError::WrongAttributeType {
                key: key.to_string(),
                expected,
            };
            match key {
                ATTR_ENABLE_DRAG => {
                    config.drag_enabled = value.as_bool().ok_or_else(|| wrong_type("bool"))?;
                }
                ATTR_FRICTION => {
                    config.set_friction(value.as_float().ok_or_else(|| wrong_type("float"))?)?;
                }
                ATTR_PERCENT_SPRING => {
                    config.set_threshold_fraction(
                        value.as_float().ok_or_else(|| wrong_type("float"))?,
                    )?;
                }
                ATTR_DURATION => {
                    let millis = value.as_int().ok_or_else(|| wrong_type("integer"))?;
                    config.animation_duration_ms =
                        u64::try_from(millis).map_err(|_| ConfigError::InvalidDuration(millis))?;
                }
                ATTR_ORIENTATION => {
                    let raw = value.as_int().ok_or_else(|| wrong_type("integer"))?;
                    // Out-of-range values stay unrecognized rather than wrapping.
                    config.orientation_raw = i32::try_from(raw).unwrap_or(i32::MIN);
                }
                unknown => log::warn!("ignoring unknown panel attribute `{unknown}`"),
            }
        }
        Ok(config)
    }

    pub fn shared(self) -> SharedGestureConfig {
        Rc::new(RefCell::new(self))
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation_raw = orientation.raw();
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.set_touch_slop(touch_slop);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Rejects zero, negative and non-finite values, keeping the old friction.
    pub fn set_friction(&mut self, friction: f32) -> Result<(), ConfigError> {
        if !friction.is_finite() || friction <= 0.0 {
            log::warn!("rejecting friction {friction}, keeping {}", self.friction);
            return Err(ConfigError::InvalidFriction(friction));
        }
        self.friction = friction;
        Ok(())
    }

    pub fn threshold_fraction(&self) -> f32 {
        self.threshold_fraction
    }

    pub fn set_threshold_fraction(&mut self, fraction: f32) -> Result<(), ConfigError> {
        if !fraction.is_finite() || fraction <= 0.0 {
            log::warn!(
                "rejecting threshold fraction {fraction}, keeping {}",
                self.threshold_fraction
            );
            return Err(ConfigError::InvalidThresholdFraction(fraction));
        }
        self.threshold_fraction = fraction;
        Ok(())
    }

    pub fn animation_duration_ms(&self) -> u64 {
        self.animation_duration_ms
    }

    pub fn set_animation_duration_ms(&mut self, duration_ms: u64) {
        self.animation_duration_ms = duration_ms;
    }

    /// `None` when the stored raw value is not a recognized orientation.
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_raw(self.orientation_raw)
    }

    pub fn orientation_raw(&self) -> i32 {
        self.orientation_raw
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation_raw = orientation.raw();
    }

    /// Accepts any value; unrecognized ones disable dragging on the next move.
    pub fn set_orientation_raw(&mut self, raw: i32) {
        self.orientation_raw = raw;
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Negative or non-finite slop falls back to [`DEFAULT_TOUCH_SLOP`].
    pub fn set_touch_slop(&mut self, touch_slop: f32) {
        self.touch_slop = if touch_slop.is_finite() && touch_slop >= 0.0 {
            touch_slop
        } else {
            DEFAULT_TOUCH_SLOP
        };
    }

    pub fn watchdog_grace_ms(&self) -> u64 {
        self.watchdog_grace_ms
    }

    pub fn set_watchdog_grace_ms(&mut self, grace_ms: u64) {
        self.watchdog_grace_ms = grace_ms;
    }

    /// Minimum offset along the axis that commits a release to closing.
    pub fn close_threshold(&self, extent: f32) -> f32 {
        extent / self.threshold_fraction
    }
}
