//! Gesture session state machine.
//!
//! One session per viewer instance, created when the image becomes
//! interactive and reset on every open. Interprets each touch
//! start/move*/end sequence as exactly one of: single-tap, double-tap zoom,
//! long-press, pan, pinch, or dismiss-release. The session owns the
//! authoritative [`Transform`]; the driver only mirrors it.
//!
//! Classification must never contradict itself: a sequence that resolved as
//! a double-tap or long-press is consumed (no tap, no release resolution),
//! and a tap is deferred by the double-tap window so a second quick tap can
//! still supersede it.

use std::cell::Cell;
use std::rc::Rc;

use lightbox_foundation::gesture_constants::{
    INITIAL_PINCH_DISTANCE, INITIAL_SCALE, LONG_PRESS_CANCEL_DISTANCE, PINCH_DISTANCE_SENSITIVITY,
};
use lightbox_foundation::transform_math::{
    apply_pan_delta, center_offset, delta_from_last_gesture, double_tap_zoom, max_pan_extent,
    position_from_pinch, swipe_opacity, touch_distance, zoom_from_pinch_delta,
};
use lightbox_foundation::{TimerHandle, TimerQueue, TouchEvent};
use lightbox_graphics::{Point, Size};

use crate::callbacks::{MoveEvent, MoveKind, TapEvent, ViewerCallbacks};
use crate::config::ViewerConfig;
use crate::driver::{ReleaseOutcome, Transform, TransformDriver};

/// How the current touch sequence is being interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GestureMode {
    None,
    Pan,
    Pinch,
}

pub struct GestureSession {
    viewport: Size,
    config: ViewerConfig,
    callbacks: Rc<ViewerCallbacks>,
    timers: TimerQueue,

    transform: Transform,
    mode: GestureMode,
    /// Cumulative gesture displacement at the last pan sample.
    last_position: Point,
    pinch_last_distance: f32,
    pinch_current_distance: f32,
    /// Pinch anchor relative to the viewport center, computed once at
    /// gesture start and kept stable for the whole pinch.
    center_offset: Point,
    last_tap_time: u64,
    is_double_tap: bool,
    /// Shared with the long-press timer closure.
    is_long_press: Rc<Cell<bool>>,
    long_press_timer: Option<TimerHandle>,
    single_tap_timer: Option<TimerHandle>,
}

impl GestureSession {
    pub fn new(
        viewport: Size,
        config: ViewerConfig,
        callbacks: Rc<ViewerCallbacks>,
        timers: TimerQueue,
    ) -> Self {
        Self {
            viewport,
            config,
            callbacks,
            timers,
            transform: Transform::IDENTITY,
            mode: GestureMode::None,
            last_position: Point::ZERO,
            pinch_last_distance: INITIAL_PINCH_DISTANCE,
            pinch_current_distance: INITIAL_PINCH_DISTANCE,
            center_offset: Point::ZERO,
            last_tap_time: 0,
            is_double_tap: false,
            is_long_press: Rc::new(Cell::new(false)),
            long_press_timer: None,
            single_tap_timer: None,
        }
    }

    /// Authoritative transform for the current viewing.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Reset for a fresh open. Pending timers from the previous viewing are
    /// cancelled so they cannot fire into the new session.
    pub fn reset(&mut self) {
        self.cancel_long_press();
        self.cancel_single_tap();
        self.transform = Transform::IDENTITY;
        self.mode = GestureMode::None;
        self.last_position = Point::ZERO;
        self.pinch_last_distance = INITIAL_PINCH_DISTANCE;
        self.pinch_current_distance = INITIAL_PINCH_DISTANCE;
        self.center_offset = Point::ZERO;
        self.last_tap_time = 0;
        self.is_double_tap = false;
        self.is_long_press.set(false);
    }

    pub fn touch_start(&mut self, event: &TouchEvent, driver: &TransformDriver, suppressed: bool) {
        if suppressed {
            return;
        }

        self.last_position = Point::ZERO;
        self.pinch_last_distance = INITIAL_PINCH_DISTANCE;
        self.is_double_tap = false;
        self.is_long_press.set(false);

        // A pending deferred tap is superseded by any new touch.
        self.cancel_single_tap();

        if event.touches.len() > 1 {
            self.center_offset = center_offset(&event.touches[0], &event.touches[1], self.viewport);
            self.cancel_long_press();
            self.mode = GestureMode::Pinch;
            log::trace!("touch start: pinch, anchor {:?}", self.center_offset);
            return;
        }

        self.mode = GestureMode::Pan;
        self.start_long_press(event.timestamp);

        // `last_tap_time == 0` means "no prior tap": the slot is cleared on
        // reset and after a resolved double-tap.
        if self.last_tap_time > 0
            && event.timestamp.saturating_sub(self.last_tap_time)
                < self.config.double_click_interval_ms
        {
            self.last_tap_time = 0;
            self.cancel_long_press();
            self.is_double_tap = true;

            let tap = event.touches.first().map(|touch| touch.page()).unwrap_or(Point::ZERO);
            let (scale, position) = double_tap_zoom(self.transform.scale, tap, self.viewport);
            log::debug!("double tap at {:?} -> scale {}", tap, scale);

            self.callbacks.fire_on_double_tap();
            self.transform = Transform { scale, position };
            self.fire_move(MoveKind::CenterOn);

            driver.animate_scale(scale, &self.config);
            driver.animate_position(position, &self.config);
        } else {
            self.last_tap_time = event.timestamp;
        }
    }

    pub fn touch_move(&mut self, event: &TouchEvent, driver: &TransformDriver, suppressed: bool) {
        // A just-resolved double-tap or an in-flight open/close transition
        // must not be corrupted by move handling.
        if self.is_double_tap || suppressed {
            return;
        }

        if event.touches.len() <= 1 {
            self.pan(event, driver);
        } else {
            self.pinch(event, driver);
        }

        self.fire_move(MoveKind::Move);
    }

    /// Returns the release outcome so the viewer can trigger the close
    /// transition on a dismissing swipe.
    pub fn touch_end(
        &mut self,
        event: &TouchEvent,
        driver: &TransformDriver,
        suppressed: bool,
    ) -> ReleaseOutcome {
        self.cancel_long_press();
        let mode = self.mode;
        self.mode = GestureMode::None;

        // Double-tap and long-press sequences are already handled.
        if self.is_double_tap || self.is_long_press.get() || suppressed {
            return ReleaseOutcome::Settled;
        }

        let move_distance = (event.dx * event.dx + event.dy * event.dy).sqrt();
        if event.touches.len() == 1 && move_distance < self.config.click_distance {
            // Defer the tap by the double-tap window so a second quick tap
            // can still coalesce into a double-tap.
            let touch = event.touches[0];
            let callbacks = Rc::clone(&self.callbacks);
            self.single_tap_timer = Some(self.timers.schedule(
                event.timestamp,
                self.config.double_click_interval_ms,
                move || {
                    callbacks.fire_on_tap(TapEvent {
                        location_x: touch.location_x,
                        location_y: touch.location_y,
                        page_x: touch.page_x,
                        page_y: touch.page_y,
                    });
                },
            ));
            return ReleaseOutcome::Settled;
        }

        log::trace!("release after {:?} gesture, distance {}", mode, move_distance);
        self.callbacks
            .fire_responder_release(event.vx, self.transform.scale);
        let outcome = driver.resolve_release(
            &mut self.transform,
            self.viewport,
            &self.config,
            event.touches.len() == 1,
        );
        if outcome == ReleaseOutcome::Settled {
            self.fire_move(MoveKind::Release);
        }
        outcome
    }

    fn pan(&mut self, event: &TouchEvent, driver: &TransformDriver) {
        self.mode = GestureMode::Pan;

        let delta = delta_from_last_gesture(self.last_position, event.displacement());
        self.last_position = event.displacement();

        // Movement disqualifies long-press.
        if event.dx.abs() > LONG_PRESS_CANCEL_DISTANCE || event.dy.abs() > LONG_PRESS_CANCEL_DISTANCE
        {
            self.cancel_long_press();
        }

        let scale = self.transform.scale;

        // Horizontal panning only exists above 1x and clamps to the pannable
        // range. Vertical panning accumulates unclamped so swipe-to-dismiss
        // can measure it; release resolution clamps it.
        if scale > INITIAL_SCALE {
            let moved = apply_pan_delta(scale, self.transform.position, Point::new(delta.x, 0.0));
            let horizontal_max = max_pan_extent(scale, self.viewport.width);
            self.transform.position.x = moved.x.clamp(-horizontal_max, horizontal_max);
        }
        self.transform.position.y += delta.y / scale;
        driver.snap_position(self.transform.position);

        if self.config.swipe_to_dismiss && scale == INITIAL_SCALE {
            driver.snap_opacity(swipe_opacity(true, scale, event.dy, self.viewport.height));
        }
    }

    fn pinch(&mut self, event: &TouchEvent, driver: &TransformDriver) {
        self.mode = GestureMode::Pinch;
        self.cancel_long_press();

        let distance = touch_distance(&event.touches[0], &event.touches[1]);
        self.pinch_current_distance = distance;

        if self.pinch_last_distance != INITIAL_PINCH_DISTANCE {
            let distance_diff = (distance - self.pinch_last_distance) / PINCH_DISTANCE_SENSITIVITY;
            let zoom = zoom_from_pinch_delta(
                self.transform.scale,
                distance_diff,
                self.config.min_scale,
                self.config.max_scale,
            );
            self.transform.scale = zoom;
            driver.snap_scale(zoom);

            self.transform.position = position_from_pinch(
                self.transform.position,
                self.center_offset,
                distance_diff,
                zoom,
            );
            driver.snap_position(self.transform.position);
        }
        self.pinch_last_distance = distance;
    }

    fn start_long_press(&mut self, now: u64) {
        self.cancel_long_press();
        let flag = Rc::clone(&self.is_long_press);
        let callbacks = Rc::clone(&self.callbacks);
        self.long_press_timer = Some(self.timers.schedule(
            now,
            self.config.long_press_time_ms,
            move || {
                log::debug!("long press fired");
                flag.set(true);
                callbacks.fire_on_long_press();
            },
        ));
    }

    fn cancel_long_press(&mut self) {
        if let Some(timer) = self.long_press_timer.take() {
            timer.cancel();
        }
    }

    fn cancel_single_tap(&mut self) {
        if let Some(timer) = self.single_tap_timer.take() {
            timer.cancel();
        }
    }

    fn fire_move(&self, kind: MoveKind) {
        self.callbacks.fire_on_move(MoveEvent {
            kind,
            position_x: self.transform.position.x,
            position_y: self.transform.position.y,
            scale: self.transform.scale,
            zoom_current_distance: self.pinch_current_distance,
        });
    }
}
