//! Transform driver.
//!
//! Turns resolved gesture intents into presentation values. During a
//! continuous drag or pinch the driver snaps its animatables every frame;
//! on release (and on double-tap toggles) it tweens toward the resolved
//! target. A new target always pre-empts a running tween.

use lightbox_animation::{Animatable, FrameClock};
use lightbox_foundation::gesture_constants::{INITIAL_SCALE, VISIBLE_OPACITY};
use lightbox_foundation::transform_math::clamp_to_max_pan;
use lightbox_graphics::{Point, Size};

use crate::config::ViewerConfig;

/// Authoritative scale + translation of the displayed image. Owned by the
/// gesture session; the driver only mirrors it into presentation values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub position: Point,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: INITIAL_SCALE,
        position: Point::ZERO,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What a completed drag/pinch release resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The transform settled (possibly via a snap-back tween).
    Settled,
    /// The release crossed the dismiss threshold; the viewer must close.
    Dismiss,
}

pub struct TransformDriver {
    scale: Animatable<f32>,
    position: Animatable<Point>,
    opacity: Animatable<f32>,
}

impl TransformDriver {
    pub fn new(clock: &FrameClock) -> Self {
        Self {
            scale: Animatable::new(INITIAL_SCALE, clock.clone()),
            position: Animatable::new(Point::ZERO, clock.clone()),
            opacity: Animatable::new(VISIBLE_OPACITY, clock.clone()),
        }
    }

    pub fn snap_scale(&self, scale: f32) {
        self.scale.snap_to(scale);
    }

    pub fn snap_position(&self, position: Point) {
        self.position.snap_to(position);
    }

    pub fn snap_opacity(&self, opacity: f32) {
        self.opacity.snap_to(opacity);
    }

    pub fn animate_scale(&self, scale: f32, config: &ViewerConfig) {
        self.scale.animate_to(scale, config.tween());
    }

    pub fn animate_position(&self, position: Point, config: &ViewerConfig) {
        self.position.animate_to(position, config.tween());
    }

    pub fn scale_value(&self) -> f32 {
        self.scale.value()
    }

    pub fn position_value(&self) -> Point {
        self.position.value()
    }

    pub fn opacity_value(&self) -> f32 {
        self.opacity.value()
    }

    /// Shared handle to the overlay opacity channel. Swipe fades and the
    /// open/close transition drive the same value.
    pub(crate) fn opacity_handle(&self) -> Animatable<f32> {
        self.opacity.clone()
    }

    /// Reset presentation values for a fresh open.
    pub fn reset(&self) {
        self.scale.snap_to(INITIAL_SCALE);
        self.position.snap_to(Point::ZERO);
    }

    /// Resolve a completed drag/pinch release (not a tap).
    ///
    /// Under-zoom recenters and returns; over-zoom clamps into the pannable
    /// range; at exactly 1x a single-touch drag past the dismiss threshold
    /// dismisses, otherwise the image recenters and the overlay opacity
    /// returns to fully visible.
    pub fn resolve_release(
        &self,
        transform: &mut Transform,
        viewport: Size,
        config: &ViewerConfig,
        single_touch: bool,
    ) -> ReleaseOutcome {
        if transform.scale < INITIAL_SCALE {
            transform.position = Point::ZERO;
            self.animate_position(Point::ZERO, config);
            return ReleaseOutcome::Settled;
        }

        if transform.scale > INITIAL_SCALE {
            transform.position = clamp_to_max_pan(transform.scale, transform.position, viewport);
            self.animate_position(transform.position, config);
        }

        if config.swipe_to_dismiss
            && transform.scale == INITIAL_SCALE
            && single_touch
            && transform.position.y.abs() > config.drag_dismiss_threshold
        {
            log::debug!(
                "release at y={} crossed dismiss threshold",
                transform.position.y
            );
            return ReleaseOutcome::Dismiss;
        }

        if transform.scale == INITIAL_SCALE {
            transform.position = Point::ZERO;
            self.animate_position(Point::ZERO, config);
        }

        self.opacity.animate_to(VISIBLE_OPACITY, config.tween());
        ReleaseOutcome::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_animation::FrameClock;

    const VIEWPORT: Size = Size::new(375.0, 812.0);

    fn driver() -> (TransformDriver, FrameClock) {
        let clock = FrameClock::new();
        (TransformDriver::new(&clock), clock)
    }

    fn settle(clock: &FrameClock, config: &ViewerConfig) {
        clock.tick(0);
        clock.tick(config.animation_duration_ms * 2 + 1);
    }

    #[test]
    fn under_zoom_release_always_recenters() {
        let (driver, clock) = driver();
        let config = ViewerConfig::default();
        let mut transform = Transform {
            scale: 0.8,
            position: Point::new(0.0, 500.0),
        };

        // Even past the dismiss threshold, an under-zoomed image recenters.
        let outcome = driver.resolve_release(&mut transform, VIEWPORT, &config, true);
        assert_eq!(outcome, ReleaseOutcome::Settled);
        assert_eq!(transform.position, Point::ZERO);

        settle(&clock, &config);
        assert_eq!(driver.position_value(), Point::ZERO);
    }

    #[test]
    fn zoomed_in_release_clamps_into_pannable_range() {
        let (driver, clock) = driver();
        let config = ViewerConfig::default();
        let mut transform = Transform {
            scale: 3.0,
            position: Point::new(300.0, -400.0),
        };

        let outcome = driver.resolve_release(&mut transform, VIEWPORT, &config, true);
        assert_eq!(outcome, ReleaseOutcome::Settled);
        let vertical_max = (812.0 * 3.0 - 812.0) / 2.0 / 3.0;
        assert_eq!(transform.position, Point::new(125.0, -vertical_max));

        settle(&clock, &config);
        assert_eq!(driver.position_value(), transform.position);
        assert_eq!(driver.opacity_value(), 1.0);
    }

    #[test]
    fn dismiss_requires_threshold_single_touch_and_enabled_swipe() {
        let config = ViewerConfig::default();

        let over = Transform {
            scale: 1.0,
            position: Point::new(0.0, 151.0),
        };
        let under = Transform {
            scale: 1.0,
            position: Point::new(0.0, 150.0),
        };

        let (driver, _clock) = driver();
        let mut transform = over;
        assert_eq!(
            driver.resolve_release(&mut transform, VIEWPORT, &config, true),
            ReleaseOutcome::Dismiss
        );

        let mut transform = under;
        assert_eq!(
            driver.resolve_release(&mut transform, VIEWPORT, &config, true),
            ReleaseOutcome::Settled
        );
        assert_eq!(transform.position, Point::ZERO);

        // Two-finger release never dismisses.
        let mut transform = over;
        assert_eq!(
            driver.resolve_release(&mut transform, VIEWPORT, &config, false),
            ReleaseOutcome::Settled
        );

        let mut disabled = config;
        disabled.swipe_to_dismiss = false;
        let mut transform = over;
        assert_eq!(
            driver.resolve_release(&mut transform, VIEWPORT, &disabled, true),
            ReleaseOutcome::Settled
        );
    }
}
