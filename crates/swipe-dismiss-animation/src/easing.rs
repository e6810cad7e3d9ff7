use swipe_dismiss_ui_graphics::Point;

/// Values a tween can move between.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

/// Curve mapping the linear progress of a tween to its eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    LinearEasing,
    /// Slow at both ends. Panel animations use this unless told otherwise.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Eased progress for a linear `fraction`. Inputs outside [0, 1] clamp.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseInOut => EASE_IN_OUT.solve(fraction),
        }
    }
}

const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Bezier from (0, 0) to (1, 1) through two control points.
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    /// `y` at the curve parameter whose `x` is `x`. Control x values lie in
    /// [0, 1], so `x(t)` is monotonic and halving the bracket converges.
    fn solve(&self, x: f32) -> f32 {
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        let mut t = x;
        for _ in 0..24 {
            let sampled = Self::component(self.x1, self.x2, t);
            if (sampled - x).abs() < 1e-6 {
                break;
            }
            if sampled < x {
                low = t;
            } else {
                high = t;
            }
            t = 0.5 * (low + high);
        }
        Self::component(self.y1, self.y2, t)
    }
}
