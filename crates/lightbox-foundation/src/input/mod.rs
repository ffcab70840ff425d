pub mod types;

pub use types::{TouchEvent, TouchList, TouchPhase, TouchPoint};
