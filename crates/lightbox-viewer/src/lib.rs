//! Lightbox viewer engine
//!
//! Gesture-driven viewport transform engine for a full-screen image viewer
//! overlay: pinch-zoom, pan, double-tap zoom, long-press, swipe-to-dismiss,
//! and an animated open/close morph between the thumbnail rect and the full
//! viewport.
//!
//! The engine is event-driven and single-threaded. Hosts feed it the raw
//! touch stream plus monotonic millisecond timestamps and read back a
//! [`ViewerFrame`] every frame; the visual tree, thumbnail measurement, and
//! platform chrome stay outside.

mod callbacks;
mod config;
mod driver;
mod session;
mod transition;
mod viewer;

pub use callbacks::{MoveEvent, MoveKind, TapEvent, ViewerCallbacks};
pub use config::ViewerConfig;
pub use driver::{ReleaseOutcome, Transform, TransformDriver};
pub use session::GestureSession;
pub use transition::{AnimationState, TransitionController};
pub use viewer::{ImageViewer, ViewerFrame, ViewerHandle};

pub mod prelude {
    pub use crate::callbacks::{MoveEvent, MoveKind, TapEvent, ViewerCallbacks};
    pub use crate::config::ViewerConfig;
    pub use crate::transition::AnimationState;
    pub use crate::viewer::{ImageViewer, ViewerFrame, ViewerHandle};
    pub use lightbox_foundation::prelude::*;
    pub use lightbox_graphics::prelude::*;
}
