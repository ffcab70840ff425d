//! Open/close transition controller.
//!
//! Morphs the viewport frame between the thumbnail's origin rect and the
//! full viewport while fading the overlay, in both directions. The frame
//! morph runs at twice the base duration so it visibly lags the fade; this
//! decoupling is intentional. Gesture recognition is suppressed while a
//! transition is active.

use std::cell::Cell;
use std::rc::Rc;

use lightbox_animation::{Animatable, FrameClock};
use lightbox_foundation::gesture_constants::{INITIAL_SCALE, VISIBLE_OPACITY};
use lightbox_graphics::{Point, Rect, Size};

use crate::callbacks::ViewerCallbacks;
use crate::config::ViewerConfig;
use crate::driver::TransformDriver;

/// Lifecycle of the viewer overlay.
///
/// `Closed -(open)-> Opening -> Open -(close)-> Closing -> Closed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Closed,
    Opening,
    Open,
    Closing,
}

pub struct TransitionController {
    viewport: Size,
    config: ViewerConfig,
    state: Rc<Cell<AnimationState>>,
    /// Thumbnail rect captured when `open()` was accepted; the close
    /// transition returns to it.
    origin: Cell<Rect>,
    frame: Animatable<Rect>,
    opacity: Animatable<f32>,
    callbacks: Rc<ViewerCallbacks>,
}

impl TransitionController {
    pub fn new(
        viewport: Size,
        config: ViewerConfig,
        opacity: Animatable<f32>,
        clock: &FrameClock,
        callbacks: Rc<ViewerCallbacks>,
    ) -> Self {
        Self {
            viewport,
            config,
            state: Rc::new(Cell::new(AnimationState::Closed)),
            origin: Cell::new(Rect::ZERO),
            frame: Animatable::new(Rect::from_size(viewport), clock.clone()),
            opacity,
            callbacks,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state.get()
    }

    /// True while opening or closing; gestures are ignored for the duration.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state.get(),
            AnimationState::Opening | AnimationState::Closing
        )
    }

    /// Current frame rect of the viewport morph.
    pub fn frame_rect(&self) -> Rect {
        self.frame.value()
    }

    /// Start the opening morph from `origin` to the full viewport.
    /// No-op unless currently closed.
    pub fn open(&self, origin: Rect) {
        if self.state.get() != AnimationState::Closed {
            log::debug!("open ignored in state {:?}", self.state.get());
            return;
        }
        let origin = origin.sanitized();
        self.origin.set(origin);
        self.state.set(AnimationState::Opening);
        log::debug!("opening from {:?}", origin);

        self.frame.snap_to(origin);
        self.opacity.snap_to(0.0);
        self.opacity.animate_to(VISIBLE_OPACITY, self.config.tween());

        let state = Rc::clone(&self.state);
        let callbacks = Rc::clone(&self.callbacks);
        self.frame.animate_to_with(
            Rect::from_size(self.viewport),
            self.config.frame_tween(),
            move || {
                if state.get() == AnimationState::Opening {
                    state.set(AnimationState::Open);
                    callbacks.fire_did_open();
                }
            },
        );
    }

    /// Start the closing morph back to the origin rect, reverting every
    /// animated value from wherever it currently is. No-op while already
    /// closing or closed.
    pub fn close(&self, driver: &TransformDriver) {
        match self.state.get() {
            AnimationState::Closing | AnimationState::Closed => {
                log::debug!("close ignored in state {:?}", self.state.get());
                return;
            }
            AnimationState::Opening | AnimationState::Open => {}
        }
        self.state.set(AnimationState::Closing);

        // The host reacts before the image leaves the screen.
        self.callbacks.fire_will_close();

        driver.animate_scale(INITIAL_SCALE, &self.config);
        driver.animate_position(Point::ZERO, &self.config);
        self.opacity.animate_to(0.0, self.config.tween());

        let state = Rc::clone(&self.state);
        let callbacks = Rc::clone(&self.callbacks);
        self.frame
            .animate_to_with(self.origin.get(), self.config.frame_tween(), move || {
                if state.get() == AnimationState::Closing {
                    state.set(AnimationState::Closed);
                    callbacks.fire_on_close();
                }
            });
    }
}
