//! Outbound callback contract to the host component.
//!
//! Every slot is optional; unset slots are skipped. Handlers are plain
//! `Rc<dyn Fn>` values so the session, driver, and transition controller can
//! share one callback set without lifetimes leaking into the public surface.

use std::rc::Rc;

/// Payload of a resolved single tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    pub location_x: f32,
    pub location_y: f32,
    pub page_x: f32,
    pub page_y: f32,
}

/// Which step of gesture handling produced a move report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Continuous pan/pinch update.
    Move,
    /// Final state after release resolution.
    Release,
    /// Double-tap recentering.
    CenterOn,
}

/// Transform snapshot reported on every move and on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEvent {
    pub kind: MoveKind,
    pub position_x: f32,
    pub position_y: f32,
    pub scale: f32,
    /// Last sampled pinch distance, `-1.0` when no pinch has been sampled.
    pub zoom_current_distance: f32,
}

/// Host callbacks. Construct with `ViewerCallbacks::default()` and fill the
/// slots you care about.
#[derive(Default)]
pub struct ViewerCallbacks {
    pub on_tap: Option<Rc<dyn Fn(TapEvent)>>,
    pub on_double_tap: Option<Rc<dyn Fn()>>,
    pub on_long_press: Option<Rc<dyn Fn()>>,
    pub on_move: Option<Rc<dyn Fn(MoveEvent)>>,
    /// Fired once per completed drag/pinch release with the horizontal
    /// release velocity and the current scale.
    pub responder_release: Option<Rc<dyn Fn(f32, f32)>>,
    /// Fired synchronously when `open()` is accepted, before animating.
    pub on_open: Option<Rc<dyn Fn()>>,
    /// Fired when the opening transition completes.
    pub did_open: Option<Rc<dyn Fn()>>,
    /// Fired when closing starts, before anything animates away.
    pub will_close: Option<Rc<dyn Fn()>>,
    /// Fired when the closing transition completes.
    pub on_close: Option<Rc<dyn Fn()>>,
}

impl ViewerCallbacks {
    pub fn with_on_tap(mut self, handler: impl Fn(TapEvent) + 'static) -> Self {
        self.on_tap = Some(Rc::new(handler));
        self
    }

    pub fn with_on_double_tap(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_double_tap = Some(Rc::new(handler));
        self
    }

    pub fn with_on_long_press(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_long_press = Some(Rc::new(handler));
        self
    }

    pub fn with_on_move(mut self, handler: impl Fn(MoveEvent) + 'static) -> Self {
        self.on_move = Some(Rc::new(handler));
        self
    }

    pub fn with_responder_release(mut self, handler: impl Fn(f32, f32) + 'static) -> Self {
        self.responder_release = Some(Rc::new(handler));
        self
    }

    pub fn with_on_open(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_open = Some(Rc::new(handler));
        self
    }

    pub fn with_did_open(mut self, handler: impl Fn() + 'static) -> Self {
        self.did_open = Some(Rc::new(handler));
        self
    }

    pub fn with_will_close(mut self, handler: impl Fn() + 'static) -> Self {
        self.will_close = Some(Rc::new(handler));
        self
    }

    pub fn with_on_close(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub(crate) fn fire_on_tap(&self, event: TapEvent) {
        if let Some(handler) = &self.on_tap {
            handler(event);
        }
    }

    pub(crate) fn fire_on_double_tap(&self) {
        if let Some(handler) = &self.on_double_tap {
            handler();
        }
    }

    pub(crate) fn fire_on_long_press(&self) {
        if let Some(handler) = &self.on_long_press {
            handler();
        }
    }

    pub(crate) fn fire_on_move(&self, event: MoveEvent) {
        if let Some(handler) = &self.on_move {
            handler(event);
        }
    }

    pub(crate) fn fire_responder_release(&self, vx: f32, scale: f32) {
        if let Some(handler) = &self.responder_release {
            handler(vx, scale);
        }
    }

    pub(crate) fn fire_on_open(&self) {
        if let Some(handler) = &self.on_open {
            handler();
        }
    }

    pub(crate) fn fire_did_open(&self) {
        if let Some(handler) = &self.did_open {
            handler();
        }
    }

    pub(crate) fn fire_will_close(&self) {
        if let Some(handler) = &self.will_close {
            handler();
        }
    }

    pub(crate) fn fire_on_close(&self) {
        if let Some(handler) = &self.on_close {
            handler();
        }
    }
}
