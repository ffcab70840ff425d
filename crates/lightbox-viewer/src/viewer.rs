//! Viewer facade and imperative control surface.

use std::cell::RefCell;
use std::rc::Rc;

use lightbox_animation::FrameClock;
use lightbox_foundation::{TimerQueue, TouchEvent, TouchPhase};
use lightbox_graphics::{Point, Rect, Size};

use crate::callbacks::ViewerCallbacks;
use crate::config::ViewerConfig;
use crate::driver::{ReleaseOutcome, Transform, TransformDriver};
use crate::session::GestureSession;
use crate::transition::{AnimationState, TransitionController};

/// Per-frame render output: everything the (external) visual tree needs to
/// draw the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerFrame {
    pub scale: f32,
    pub translate: Point,
    /// Viewport frame rect of the open/close morph.
    pub frame: Rect,
    /// Overlay background opacity.
    pub opacity: f32,
}

/// One image viewer instance: wires the gesture session, transform driver,
/// and transition controller to a shared frame clock and timer queue.
///
/// The host feeds the touch stream through [`ImageViewer::handle_touch`] and
/// pumps [`ImageViewer::on_frame`] with monotonic millisecond timestamps
/// (its render loop, or `WallClock` from `lightbox-animation`).
pub struct ImageViewer {
    callbacks: Rc<ViewerCallbacks>,
    clock: FrameClock,
    timers: TimerQueue,
    driver: TransformDriver,
    transition: TransitionController,
    session: GestureSession,
}

impl ImageViewer {
    pub fn new(viewport: Size, config: ViewerConfig, callbacks: ViewerCallbacks) -> Self {
        let callbacks = Rc::new(callbacks);
        let clock = FrameClock::new();
        let timers = TimerQueue::new();
        let driver = TransformDriver::new(&clock);
        let transition = TransitionController::new(
            viewport,
            config,
            driver.opacity_handle(),
            &clock,
            Rc::clone(&callbacks),
        );
        let session = GestureSession::new(viewport, config, Rc::clone(&callbacks), timers.clone());
        Self {
            callbacks,
            clock,
            timers,
            driver,
            transition,
            session,
        }
    }

    /// Open the viewer, morphing from the thumbnail's `origin` rect.
    /// Resets the transform to identity; no-op unless currently closed.
    pub fn open(&mut self, origin: Rect) {
        if self.transition.state() != AnimationState::Closed {
            return;
        }
        self.callbacks.fire_on_open();
        self.session.reset();
        self.driver.reset();
        self.transition.open(origin);
    }

    /// Close the viewer, morphing back to the origin rect. No-op while
    /// already closing or closed.
    pub fn close(&mut self) {
        self.transition.close(&self.driver);
    }

    /// Feed one event of the platform touch stream.
    pub fn handle_touch(&mut self, event: &TouchEvent) {
        let suppressed = self.transition.is_active();
        match event.phase {
            TouchPhase::Start => self.session.touch_start(event, &self.driver, suppressed),
            TouchPhase::Move => self.session.touch_move(event, &self.driver, suppressed),
            TouchPhase::End => {
                let outcome = self.session.touch_end(event, &self.driver, suppressed);
                if outcome == ReleaseOutcome::Dismiss {
                    self.transition.close(&self.driver);
                }
            }
        }
    }

    /// Advance deferred timers and animations to `now_millis`.
    pub fn on_frame(&mut self, now_millis: u64) {
        self.timers.fire_due(now_millis);
        self.clock.tick(now_millis);
    }

    /// True while an animation or deferred callback still needs frames.
    pub fn has_pending_work(&self) -> bool {
        self.clock.has_pending() || self.timers.has_pending()
    }

    pub fn state(&self) -> AnimationState {
        self.transition.state()
    }

    /// Authoritative gesture transform (presentation values may lag behind
    /// it while a snap-back tween runs).
    pub fn transform(&self) -> Transform {
        self.session.transform()
    }

    /// Snapshot of the presentation values for rendering.
    pub fn frame(&self) -> ViewerFrame {
        ViewerFrame {
            scale: self.driver.scale_value(),
            translate: self.driver.position_value(),
            frame: self.transition.frame_rect(),
            opacity: self.driver.opacity_value(),
        }
    }
}

/// Imperative `{open, close}` control surface handed to a host, decoupled
/// from the viewer's ownership.
pub struct ViewerHandle {
    open: Box<dyn Fn(Rect)>,
    close: Box<dyn Fn()>,
}

impl ViewerHandle {
    pub fn new(viewer: &Rc<RefCell<ImageViewer>>) -> Self {
        let open_viewer = Rc::clone(viewer);
        let close_viewer = Rc::clone(viewer);
        Self {
            open: Box::new(move |origin| open_viewer.borrow_mut().open(origin)),
            close: Box::new(move || close_viewer.borrow_mut().close()),
        }
    }

    pub fn open(&self, origin: Rect) {
        (self.open)(origin);
    }

    pub fn close(&self) {
        (self.close)();
    }
}
