//! Animation system for Lightbox
//!
//! Time-based tween animations with easing curves, driven by an explicit
//! frame clock that the host ticks with millisecond timestamps. Nothing in
//! this crate reads wall time on its own; `WallClock` is an optional helper
//! for hosts that want monotonic millis.

mod animation;
mod clock;
mod wall_clock;

pub use animation::*;
pub use clock::*;
pub use wall_clock::WallClock;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationSpec, Easing, Lerp};
    pub use crate::clock::{FrameCallbackRegistration, FrameClock};
}
