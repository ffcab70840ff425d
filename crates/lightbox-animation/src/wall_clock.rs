//! Monotonic millisecond source for hosts.

use web_time::Instant;

/// Maps a monotonic instant to the millisecond timestamps the engine
/// consumes. Hosts that already have frame timestamps do not need this.
pub struct WallClock {
    epoch: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Milliseconds elapsed since this clock was created.
    pub fn now_millis(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}
