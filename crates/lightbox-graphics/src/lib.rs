//! Pure geometry for Lightbox
//!
//! This crate contains the point, size, and rect primitives shared by the
//! viewer engine and its hosts. No state, no dependencies.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
