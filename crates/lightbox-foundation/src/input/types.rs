//! Raw touch input model.
//!
//! The platform delivers an ordered start/move*/end stream per touch
//! sequence. Every event carries the concurrently changed touches plus the
//! cumulative gesture displacement since the sequence started (the platform
//! reports cumulative dx/dy, not per-frame deltas).

use lightbox_graphics::Point;
use smallvec::SmallVec;

/// A single touch sample. `page_*` are window coordinates, `location_*` are
/// relative to the touched surface. Read-only to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TouchPoint {
    pub page_x: f32,
    pub page_y: f32,
    pub location_x: f32,
    pub location_y: f32,
}

impl TouchPoint {
    pub const fn new(page_x: f32, page_y: f32, location_x: f32, location_y: f32) -> Self {
        Self {
            page_x,
            page_y,
            location_x,
            location_y,
        }
    }

    /// Touch at window coordinates with the surface origin at the window
    /// origin (location equals page).
    pub const fn at(page_x: f32, page_y: f32) -> Self {
        Self::new(page_x, page_y, page_x, page_y)
    }

    pub fn page(&self) -> Point {
        Point::new(self.page_x, self.page_y)
    }
}

/// Phase of a touch event within one sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// Touches changed by one event. Two slots inline; pinch never needs more.
pub type TouchList = SmallVec<[TouchPoint; 2]>;

/// One event of the touch stream.
#[derive(Clone, Debug)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: TouchList,
    /// Cumulative gesture displacement since touch-start, logical px.
    pub dx: f32,
    pub dy: f32,
    /// Horizontal velocity at release, logical px per ms.
    pub vx: f32,
    /// Event timestamp in milliseconds, same timebase as the frame pump.
    pub timestamp: u64,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: TouchList, timestamp: u64) -> Self {
        Self {
            phase,
            touches,
            dx: 0.0,
            dy: 0.0,
            vx: 0.0,
            timestamp,
        }
    }

    /// Single-touch event builder.
    pub fn single(phase: TouchPhase, touch: TouchPoint, timestamp: u64) -> Self {
        let mut touches = TouchList::new();
        touches.push(touch);
        Self::new(phase, touches, timestamp)
    }

    /// Two-touch event builder.
    pub fn pair(phase: TouchPhase, first: TouchPoint, second: TouchPoint, timestamp: u64) -> Self {
        let mut touches = TouchList::new();
        touches.push(first);
        touches.push(second);
        Self::new(phase, touches, timestamp)
    }

    /// Attach the cumulative gesture displacement.
    pub fn with_displacement(mut self, dx: f32, dy: f32) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Attach the horizontal release velocity.
    pub fn with_velocity(mut self, vx: f32) -> Self {
        self.vx = vx;
        self
    }

    /// Cumulative displacement as a point.
    pub fn displacement(&self) -> Point {
        Point::new(self.dx, self.dy)
    }
}
