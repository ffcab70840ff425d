//! Viewer configuration.

use lightbox_animation::{AnimationSpec, Easing};
use lightbox_foundation::gesture_constants::{
    CLICK_DISTANCE, DOUBLE_CLICK_INTERVAL_MS, DRAG_DISMISS_THRESHOLD, LONG_PRESS_TIME_MS,
    MAX_SCALE, MIN_SCALE,
};

/// Tunable knobs of the viewer. Defaults match the reference tuning in
/// `gesture_constants`.
#[derive(Clone, Copy, Debug)]
pub struct ViewerConfig {
    /// Dragging past [`ViewerConfig::drag_dismiss_threshold`] at 1x closes
    /// the viewer.
    pub swipe_to_dismiss: bool,
    /// Base duration of snap-back, zoom-toggle, and fade tweens. The
    /// open/close frame morph runs at twice this.
    pub animation_duration_ms: u64,
    pub min_scale: f32,
    pub max_scale: f32,
    pub long_press_time_ms: u64,
    pub double_click_interval_ms: u64,
    pub click_distance: f32,
    pub drag_dismiss_threshold: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            swipe_to_dismiss: true,
            animation_duration_ms: 100,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            long_press_time_ms: LONG_PRESS_TIME_MS,
            double_click_interval_ms: DOUBLE_CLICK_INTERVAL_MS,
            click_distance: CLICK_DISTANCE,
            drag_dismiss_threshold: DRAG_DISMISS_THRESHOLD,
        }
    }
}

impl ViewerConfig {
    /// Tween used for gesture-resolution animations.
    pub(crate) fn tween(&self) -> AnimationSpec {
        AnimationSpec::tween(self.animation_duration_ms, Easing::EaseInOut)
    }

    /// Tween for the open/close frame morph, which visibly lags the fade.
    pub(crate) fn frame_tween(&self) -> AnimationSpec {
        AnimationSpec::tween(self.animation_duration_ms * 2, Easing::EaseInOut)
    }
}
