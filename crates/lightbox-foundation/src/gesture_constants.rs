//! Shared gesture constants for the image viewer.
//!
//! These thresholds are intentionally kept in one place so tap, long-press,
//! and dismiss recognition stay consistent with each other. Values are in
//! logical pixels and milliseconds and match the reference tuning of the
//! viewer; `ViewerConfig` exposes the adjustable subset.

/// Scale the image resets to on every open, `1` = original size.
pub const INITIAL_SCALE: f32 = 1.0;

/// Lower bound for pinch zoom. Under-zoom below 1x is allowed mid-gesture
/// and snaps back on release.
pub const MIN_SCALE: f32 = 0.6;

/// Upper bound for pinch zoom.
pub const MAX_SCALE: f32 = 10.0;

/// Scale a double-tap zooms in to when the image is at 1x.
pub const DOUBLE_TAP_SCALE: f32 = 2.0;

/// Hold time before a stationary touch becomes a long-press.
pub const LONG_PRESS_TIME_MS: u64 = 800;

/// Two taps within this window coalesce into a double-tap. Single taps are
/// deferred by the same window so the second tap can still supersede them.
pub const DOUBLE_CLICK_INTERVAL_MS: u64 = 250;

/// Total displacement under which a released single touch counts as a tap.
pub const CLICK_DISTANCE: f32 = 10.0;

/// Movement in either axis beyond which a long-press can no longer fire.
pub const LONG_PRESS_CANCEL_DISTANCE: f32 = 5.0;

/// Vertical displacement past which a 1x single-touch release dismisses the
/// viewer (when swipe-to-dismiss is enabled).
pub const DRAG_DISMISS_THRESHOLD: f32 = 150.0;

/// Divisor turning a pinch-distance delta (logical px) into a scale delta.
/// Tuned sensitivity constant, not derived.
pub const PINCH_DISTANCE_SENSITIVITY: f32 = 200.0;

/// Sentinel for "no pinch distance sampled yet".
pub const INITIAL_PINCH_DISTANCE: f32 = -1.0;

/// Fully opaque overlay.
pub const VISIBLE_OPACITY: f32 = 1.0;
