//! Deferred, cancellable callbacks.
//!
//! Long-press detection and single-tap debouncing both need "run this later
//! unless something supersedes it". Timers are scheduled against the host's
//! millisecond timebase and fired from the frame pump; cancellation is
//! explicitly idempotent (cancelling an already-fired or already-cancelled
//! timer is a no-op).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct ScheduledTimer {
    id: u64,
    deadline: u64,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct QueueInner {
    next_id: u64,
    timers: Vec<ScheduledTimer>,
}

/// Shared handle to a timer queue. Clones observe the same pending timers.
#[derive(Clone, Default)]
pub struct TimerQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to run once `delay_millis` after `now_millis`.
    pub fn schedule(
        &self,
        now_millis: u64,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.timers.push(ScheduledTimer {
            id,
            deadline: now_millis + delay_millis,
            run: Box::new(callback),
        });
        TimerHandle {
            id,
            queue: Rc::downgrade(&self.inner),
        }
    }

    /// Run every timer whose deadline has passed.
    ///
    /// Callbacks run after the queue borrow is released, so a firing timer
    /// may schedule or cancel other timers.
    pub fn fire_due(&self, now_millis: u64) {
        let due: Vec<ScheduledTimer> = {
            let mut inner = self.inner.borrow_mut();
            let mut due = Vec::new();
            let mut index = 0;
            while index < inner.timers.len() {
                if inner.timers[index].deadline <= now_millis {
                    due.push(inner.timers.swap_remove(index));
                } else {
                    index += 1;
                }
            }
            due.sort_by_key(|timer| timer.deadline);
            due
        };
        for timer in due {
            (timer.run)();
        }
    }

    /// True while at least one timer is pending.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().timers.is_empty()
    }
}

/// Handle to one scheduled timer.
#[derive(Clone)]
pub struct TimerHandle {
    id: u64,
    queue: Weak<RefCell<QueueInner>>,
}

impl TimerHandle {
    /// Remove the timer from the queue if it has not fired yet. Idempotent.
    pub fn cancel(&self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().timers.retain(|timer| timer.id != self.id);
        }
    }
}
