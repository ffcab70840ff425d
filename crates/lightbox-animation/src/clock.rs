//! Frame clock with one-shot callback registrations.
//!
//! Animations register a callback for the next frame and re-register while
//! they still have work to do. The host pumps the clock from its render loop
//! (or a test pumps it with synthetic timestamps), so playback is fully
//! deterministic.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct FrameCallback {
    id: u64,
    run: Box<dyn FnOnce(u64)>,
}

#[derive(Default)]
struct ClockInner {
    next_id: u64,
    callbacks: Vec<FrameCallback>,
}

/// Shared handle to a frame clock. Clones observe the same callback queue.
#[derive(Clone, Default)]
pub struct FrameClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for the next tick. The callback receives the
    /// tick's timestamp in milliseconds and runs at most once.
    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.callbacks.push(FrameCallback {
            id,
            run: Box::new(callback),
        });
        FrameCallbackRegistration {
            id,
            clock: Rc::downgrade(&self.inner),
        }
    }

    /// Run every registered callback once with `now_millis`.
    ///
    /// Callbacks may register new callbacks while running; those land in the
    /// next tick, never the current one.
    pub fn tick(&self, now_millis: u64) {
        let callbacks = std::mem::take(&mut self.inner.borrow_mut().callbacks);
        for callback in callbacks {
            (callback.run)(now_millis);
        }
    }

    /// True while at least one callback is waiting for the next tick.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }
}

/// Handle to a pending frame callback.
///
/// Cancelling after the callback has fired (or after the clock is gone) is a
/// no-op.
pub struct FrameCallbackRegistration {
    id: u64,
    clock: Weak<RefCell<ClockInner>>,
}

impl FrameCallbackRegistration {
    pub fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock
                .borrow_mut()
                .callbacks
                .retain(|callback| callback.id != self.id);
        }
    }
}
