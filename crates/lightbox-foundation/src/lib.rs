//! Foundation elements for the Lightbox viewer
//!
//! Raw touch input types, shared gesture constants, cancellable deferred
//! timers, and the pure viewport math that turns touch deltas into scale and
//! translation values.

pub mod gesture_constants;
pub mod input;
pub mod timer;
pub mod transform_math;

pub use input::{TouchEvent, TouchList, TouchPhase, TouchPoint};
pub use timer::{TimerHandle, TimerQueue};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::{TouchEvent, TouchList, TouchPhase, TouchPoint};
    pub use crate::timer::{TimerHandle, TimerQueue};
}
