use swipe_dismiss_ui_graphics::{Point, Size};

/// Axis along which a panel can be dragged closed.
///
/// The raw values match the `sf_orientation` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Dragged downwards, closes past the bottom edge.
    #[default]
    Vertical,
    /// Dragged rightwards, closes past the right edge.
    Horizontal,
}

impl Orientation {
    pub const VERTICAL_RAW: i32 = 0;
    pub const HORIZONTAL_RAW: i32 = 1;

    /// Returns `None` for values outside the two recognized orientations.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            Self::VERTICAL_RAW => Some(Orientation::Vertical),
            Self::HORIZONTAL_RAW => Some(Orientation::Horizontal),
            _ => None,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Orientation::Vertical => Self::VERTICAL_RAW,
            Orientation::Horizontal => Self::HORIZONTAL_RAW,
        }
    }

    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    pub fn primary(self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.y,
            Orientation::Horizontal => point.x,
        }
    }

    /// Coordinate of `point` across this axis.
    #[inline]
    pub fn secondary(self, point: Point) -> f32 {
        self.cross_axis().primary(point)
    }

    /// Height for vertical panels, width for horizontal ones.
    #[inline]
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Orientation::Vertical => size.height,
            Orientation::Horizontal => size.width,
        }
    }

    /// Replaces the component of `point` along this axis, keeping the other.
    #[inline]
    pub fn with_primary(self, point: Point, value: f32) -> Point {
        match self {
            Orientation::Vertical => Point::new(point.x, value),
            Orientation::Horizontal => Point::new(value, point.y),
        }
    }
}

