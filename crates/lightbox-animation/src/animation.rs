//! Tween animations with easing curves.
//!
//! An [`Animatable`] holds one value and drives it toward a target over a
//! fixed duration. Setting a new target always pre-empts the running tween
//! (the new animation starts from the current interpolated value); targets
//! are never queued.

use std::cell::RefCell;
use std::rc::Rc;

use lightbox_graphics::{Point, Rect};

use crate::clock::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
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
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

impl Lerp for Rect {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Rect::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
            self.width.lerp(&target.width, fraction),
            self.height.lerp(&target.height, fraction),
        )
    }
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric value `t` matching the x fraction,
    // clamped to [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Binary subdivision fallback when Newton-Raphson did not converge.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Generic animatable value holder.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_millis: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_millis: None,
            registration: None,
            on_complete: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate to the target value using the specified tween.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        self.animate_to_with(target, spec, || {});
    }

    /// Animate to the target value, invoking `on_complete` when the tween
    /// reaches it. A superseding `animate_to`/`snap_to` drops the pending
    /// completion without invoking it.
    pub fn animate_to_with(&self, target: T, spec: AnimationSpec, on_complete: impl FnOnce() + 'static) {
        {
            let mut inner = self.inner.borrow_mut();

            // Cancel existing animation; its completion never fires.
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.on_complete = Some(Box::new(on_complete));

            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_millis = None;
        }

        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.on_complete = None;
        inner.current = target.clone();
        inner.start = target.clone();
        inner.target = target;
        inner.start_time_millis = None;
    }

    /// Current interpolated value.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    /// True while a tween is in flight.
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_millis(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_millis: u64) {
        let mut schedule_next = false;
        let mut completion = None;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let spec = inner.spec;
            let start_time = inner.start_time_millis.get_or_insert(frame_time_millis);
            let elapsed = frame_time_millis.saturating_sub(*start_time);
            let duration = spec.duration_millis.max(1);
            let linear_progress = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
            let progress = spec.easing.transform(linear_progress);

            let new_value = inner.start.lerp(&inner.target, progress);
            inner.current = new_value;

            if linear_progress >= 1.0 {
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                inner.start_time_millis = None;
                completion = inner.on_complete.take();
            } else {
                schedule_next = true;
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
        // Run the completion after releasing the borrow; it may animate this
        // or other values.
        if let Some(completion) = completion {
            completion();
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
