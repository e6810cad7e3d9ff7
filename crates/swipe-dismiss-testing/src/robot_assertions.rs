//! Assertion helpers for robot tests.

use swipe_dismiss_ui_graphics::Point;

/// Assert that a value is within `tolerance` of the expected one.
///
/// Eased animations land on fractional offsets, so intermediate frames are
/// compared fuzzily.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that `values` never decrease.
pub fn assert_non_decreasing(values: &[f32], msg: &str) {
    for pair in values.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "{}: {} follows {} in {:?}",
            msg,
            pair[1],
            pair[0],
            values
        );
    }
}
