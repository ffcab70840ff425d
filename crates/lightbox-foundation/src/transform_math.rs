//! Pure viewport math for the image viewer.
//!
//! Every function here is referentially transparent; the gesture session
//! owns all state. Positions are offsets of the image center from the
//! viewport center in image-space units (pre-scale).

use lightbox_graphics::{Point, Size};

use crate::gesture_constants::{DOUBLE_TAP_SCALE, INITIAL_SCALE, VISIBLE_OPACITY};
use crate::input::TouchPoint;

/// Euclidean distance between two touch points, rounded to one decimal
/// place. The rounding stabilizes pinch jitter from sub-pixel sensor noise.
pub fn touch_distance(first: &TouchPoint, second: &TouchPoint) -> f32 {
    let dx = (first.page_x - second.page_x).abs();
    let dy = (first.page_y - second.page_y).abs();
    let diagonal = (dx * dx + dy * dy).sqrt();
    (diagonal * 10.0).round() / 10.0
}

/// Midpoint of two touches relative to the viewport center. Anchors pinch
/// zoom around the gesture instead of the image center.
pub fn center_offset(first: &TouchPoint, second: &TouchPoint, viewport: Size) -> Point {
    let center_x = (first.page_x + second.page_x) / 2.0;
    let center_y = (first.page_y + second.page_y) / 2.0;
    Point::new(
        center_x - viewport.width / 2.0,
        center_y - viewport.height / 2.0,
    )
}

/// Per-frame delta from two cumulative displacement samples.
pub fn delta_from_last_gesture(last_cumulative: Point, current_cumulative: Point) -> Point {
    current_cumulative - last_cumulative
}

/// Pan by a screen-space delta. Dividing by the scale keeps panning
/// scale-invariant under the finger.
pub fn apply_pan_delta(scale: f32, position: Point, delta: Point) -> Point {
    Point::new(position.x + delta.x / scale, position.y + delta.y / scale)
}

/// Maximum pan offset along one axis: `(dim * scale - dim) / 2 / scale`.
/// At `scale <= 1` this is non-positive, so panning is not permitted.
pub fn max_pan_extent(scale: f32, dimension: f32) -> f32 {
    (dimension * scale - dimension) / 2.0 / scale
}

/// Clamp a position symmetrically into the pannable range for `scale`.
/// Below 1x the range collapses to zero and the position centers.
pub fn clamp_to_max_pan(scale: f32, position: Point, viewport: Size) -> Point {
    let horizontal_max = max_pan_extent(scale, viewport.width).max(0.0);
    let vertical_max = max_pan_extent(scale, viewport.height).max(0.0);
    Point::new(
        position.x.clamp(-horizontal_max, horizontal_max),
        position.y.clamp(-vertical_max, vertical_max),
    )
}

/// New scale from a pinch-distance delta, clamped into `[min, max]`.
pub fn zoom_from_pinch_delta(scale: f32, distance_diff: f32, min_scale: f32, max_scale: f32) -> f32 {
    (scale + distance_diff).clamp(min_scale, max_scale)
}

/// Shift the position so the zoom appears anchored at the pinch midpoint
/// instead of drifting toward the image center.
pub fn position_from_pinch(
    position: Point,
    center_offset: Point,
    distance_diff: f32,
    zoom: f32,
) -> Point {
    Point::new(
        position.x - center_offset.x * distance_diff / zoom,
        position.y - center_offset.y * distance_diff / zoom,
    )
}

/// Double-tap zoom toggle.
///
/// Zoomed in (or out): reset to 1x, centered. At 1x: zoom to
/// [`DOUBLE_TAP_SCALE`] centering the tapped point, clamped to the pannable
/// range.
pub fn double_tap_zoom(scale: f32, tap: Point, viewport: Size) -> (f32, Point) {
    if scale != INITIAL_SCALE {
        return (INITIAL_SCALE, Point::ZERO);
    }

    let new_scale = DOUBLE_TAP_SCALE;
    let diff_scale = new_scale - scale;
    let position = Point::new(
        (viewport.width / 2.0 - tap.x) * diff_scale / new_scale,
        (viewport.height / 2.0 - tap.y) * diff_scale / new_scale,
    );
    (new_scale, clamp_to_max_pan(new_scale, position, viewport))
}

/// Overlay opacity while dragging at 1x with swipe-to-dismiss enabled:
/// linear fade with vertical displacement. Fully opaque otherwise.
pub fn swipe_opacity(swipe_to_dismiss: bool, scale: f32, dy: f32, viewport_height: f32) -> f32 {
    if swipe_to_dismiss && scale == INITIAL_SCALE {
        ((viewport_height - dy.abs()) / viewport_height).clamp(0.0, VISIBLE_OPACITY)
    } else {
        VISIBLE_OPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_constants::{MAX_SCALE, MIN_SCALE};

    const VIEWPORT: Size = Size::new(375.0, 812.0);

    #[test]
    fn touch_distance_rounds_to_one_decimal() {
        let a = TouchPoint::at(100.0, 300.0);
        let b = TouchPoint::at(200.0, 300.0);
        assert_eq!(touch_distance(&a, &b), 100.0);

        let c = TouchPoint::at(0.0, 0.0);
        let d = TouchPoint::at(1.0, 1.0);
        // sqrt(2) = 1.41421... rounds to 1.4
        assert_eq!(touch_distance(&c, &d), 1.4);
    }

    #[test]
    fn pinch_widening_increases_distance_as_specified() {
        let before = touch_distance(&TouchPoint::at(100.0, 300.0), &TouchPoint::at(200.0, 300.0));
        let after = touch_distance(&TouchPoint::at(90.0, 300.0), &TouchPoint::at(220.0, 300.0));
        assert_eq!(before, 100.0);
        assert_eq!(after, 130.0);

        let distance_diff = (after - before) / 200.0;
        assert!((distance_diff - 0.15).abs() < 1e-6);
        let zoom = zoom_from_pinch_delta(1.0, distance_diff, MIN_SCALE, MAX_SCALE);
        assert!((zoom - 1.15).abs() < 1e-6);
    }

    #[test]
    fn center_offset_is_midpoint_minus_viewport_center() {
        let offset = center_offset(
            &TouchPoint::at(100.0, 300.0),
            &TouchPoint::at(200.0, 300.0),
            VIEWPORT,
        );
        assert_eq!(offset, Point::new(150.0 - 187.5, 300.0 - 406.0));
    }

    #[test]
    fn delta_is_difference_of_cumulative_samples() {
        let delta = delta_from_last_gesture(Point::new(10.0, -5.0), Point::new(25.0, -2.0));
        assert_eq!(delta, Point::new(15.0, 3.0));
    }

    #[test]
    fn pan_delta_is_scale_invariant() {
        let moved = apply_pan_delta(2.0, Point::ZERO, Point::new(30.0, -10.0));
        assert_eq!(moved, Point::new(15.0, -5.0));
    }

    #[test]
    fn clamp_bounds_and_idempotence() {
        for scale in [1.0f32, 1.5, 3.0, 10.0] {
            let horizontal_max = max_pan_extent(scale, VIEWPORT.width).max(0.0);
            let vertical_max = max_pan_extent(scale, VIEWPORT.height).max(0.0);
            for position in [
                Point::new(1_000.0, 1_000.0),
                Point::new(-1_000.0, -1_000.0),
                Point::new(12.0, -40.0),
            ] {
                let clamped = clamp_to_max_pan(scale, position, VIEWPORT);
                assert!(clamped.x >= -horizontal_max && clamped.x <= horizontal_max);
                assert!(clamped.y >= -vertical_max && clamped.y <= vertical_max);
                assert_eq!(clamp_to_max_pan(scale, clamped, VIEWPORT), clamped);
            }
        }
    }

    #[test]
    fn clamp_centers_at_or_below_original_size() {
        for scale in [MIN_SCALE, 0.8, 1.0] {
            let clamped = clamp_to_max_pan(scale, Point::new(50.0, -70.0), VIEWPORT);
            assert_eq!(clamped, Point::ZERO);
        }
    }

    #[test]
    fn pan_clamp_matches_reference_numbers() {
        // Dragging right by 1000 logical px at 3x in a 375-wide viewport.
        let dragged = apply_pan_delta(3.0, Point::ZERO, Point::new(1_000.0, 0.0));
        let clamped = clamp_to_max_pan(3.0, dragged, VIEWPORT);
        assert_eq!(max_pan_extent(3.0, 375.0), 125.0);
        assert_eq!(clamped.x, 125.0);
    }

    #[test]
    fn zoom_from_pinch_delta_clamps_to_bounds() {
        assert_eq!(zoom_from_pinch_delta(1.0, -5.0, MIN_SCALE, MAX_SCALE), MIN_SCALE);
        assert_eq!(zoom_from_pinch_delta(9.0, 4.0, MIN_SCALE, MAX_SCALE), MAX_SCALE);
        assert_eq!(zoom_from_pinch_delta(2.0, 0.5, MIN_SCALE, MAX_SCALE), 2.5);
    }

    #[test]
    fn pinch_position_moves_against_center_offset() {
        let position = position_from_pinch(Point::ZERO, Point::new(50.0, -100.0), 0.2, 2.0);
        assert_eq!(position, Point::new(-5.0, 10.0));
    }

    #[test]
    fn double_tap_is_involutive_on_scale() {
        let tap = Point::new(100.0, 200.0);
        let (zoomed_scale, zoomed_position) = double_tap_zoom(1.0, tap, VIEWPORT);
        assert_eq!(zoomed_scale, 2.0);
        assert_ne!(zoomed_position, Point::ZERO);

        let (reset_scale, reset_position) = double_tap_zoom(zoomed_scale, tap, VIEWPORT);
        assert_eq!(reset_scale, 1.0);
        assert_eq!(reset_position, Point::ZERO);
    }

    #[test]
    fn double_tap_centers_the_tapped_point() {
        let (scale, position) = double_tap_zoom(1.0, Point::new(100.0, 200.0), VIEWPORT);
        assert_eq!(scale, 2.0);
        // (viewport_center - tap) * (2 - 1) / 2, inside the pannable range.
        assert_eq!(position, Point::new(43.75, 103.0));
    }

    #[test]
    fn double_tap_position_is_clamped() {
        let (scale, position) = double_tap_zoom(1.0, Point::new(0.0, 0.0), VIEWPORT);
        let clamped = clamp_to_max_pan(scale, position, VIEWPORT);
        assert_eq!(position, clamped);
    }

    #[test]
    fn swipe_opacity_fades_linearly_at_original_scale() {
        let opacity = swipe_opacity(true, 1.0, 203.0, VIEWPORT.height);
        assert!((opacity - (812.0 - 203.0) / 812.0).abs() < 1e-6);
        assert_eq!(swipe_opacity(true, 1.0, 0.0, VIEWPORT.height), 1.0);
        assert_eq!(swipe_opacity(true, 1.0, -2_000.0, VIEWPORT.height), 0.0);
    }

    #[test]
    fn swipe_opacity_is_opaque_when_zoomed_or_disabled() {
        assert_eq!(swipe_opacity(true, 2.0, 400.0, VIEWPORT.height), 1.0);
        assert_eq!(swipe_opacity(true, 0.8, 400.0, VIEWPORT.height), 1.0);
        assert_eq!(swipe_opacity(false, 1.0, 400.0, VIEWPORT.height), 1.0);
    }
}
