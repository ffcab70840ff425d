//! Shared harness for viewer integration tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lightbox_graphics::{Rect, Size};
use lightbox_viewer::{
    AnimationState, ImageViewer, MoveEvent, TapEvent, ViewerCallbacks, ViewerConfig,
};

pub const VIEWPORT: Size = Size::new(375.0, 812.0);
pub const ORIGIN: Rect = Rect::new(50.0, 100.0, 40.0, 40.0);

/// Records every outbound callback for assertions.
#[derive(Clone, Default)]
pub struct Recorder {
    pub taps: Rc<RefCell<Vec<TapEvent>>>,
    pub double_taps: Rc<Cell<u32>>,
    pub long_presses: Rc<Cell<u32>>,
    pub moves: Rc<RefCell<Vec<MoveEvent>>>,
    pub releases: Rc<RefCell<Vec<(f32, f32)>>>,
    pub opens: Rc<Cell<u32>>,
    pub did_opens: Rc<Cell<u32>>,
    pub will_closes: Rc<Cell<u32>>,
    pub closes: Rc<Cell<u32>>,
}

impl Recorder {
    pub fn callbacks(&self) -> ViewerCallbacks {
        let taps = Rc::clone(&self.taps);
        let double_taps = Rc::clone(&self.double_taps);
        let long_presses = Rc::clone(&self.long_presses);
        let moves = Rc::clone(&self.moves);
        let releases = Rc::clone(&self.releases);
        let opens = Rc::clone(&self.opens);
        let did_opens = Rc::clone(&self.did_opens);
        let will_closes = Rc::clone(&self.will_closes);
        let closes = Rc::clone(&self.closes);

        ViewerCallbacks::default()
            .with_on_tap(move |event| taps.borrow_mut().push(event))
            .with_on_double_tap(move || double_taps.set(double_taps.get() + 1))
            .with_on_long_press(move || long_presses.set(long_presses.get() + 1))
            .with_on_move(move |event| moves.borrow_mut().push(event))
            .with_responder_release(move |vx, scale| releases.borrow_mut().push((vx, scale)))
            .with_on_open(move || opens.set(opens.get() + 1))
            .with_did_open(move || did_opens.set(did_opens.get() + 1))
            .with_will_close(move || will_closes.set(will_closes.get() + 1))
            .with_on_close(move || closes.set(closes.get() + 1))
    }
}

/// Pump the frame loop from `from` to `to` inclusive in `step` increments.
pub fn pump(viewer: &mut ImageViewer, from: u64, to: u64, step: u64) {
    let mut now = from;
    while now <= to {
        viewer.on_frame(now);
        now += step;
    }
}

/// Viewer opened from [`ORIGIN`] at t=0 and pumped until the opening
/// transition has completed.
pub fn opened_viewer(config: ViewerConfig) -> (ImageViewer, Recorder) {
    let recorder = Recorder::default();
    let mut viewer = ImageViewer::new(VIEWPORT, config, recorder.callbacks());
    viewer.open(ORIGIN);
    pump(&mut viewer, 0, 500, 16);
    assert_eq!(viewer.state(), AnimationState::Open);
    (viewer, recorder)
}
