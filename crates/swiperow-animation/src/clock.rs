//! Frame clocks feeding timestamps into animations.

use std::cell::Cell;
use std::time::Duration;

use web_time::Instant;

/// Source of frame timestamps, in nanoseconds since an arbitrary origin.
pub trait FrameClock {
    fn frame_time_nanos(&self) -> u64;
}

/// Wall-clock frame times, usable on desktop and on the web.
#[derive(Debug, Clone, Copy)]
pub struct SystemFrameClock {
    origin: Instant,
}

impl SystemFrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemFrameClock {
    fn frame_time_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Clock advanced explicitly, for tests and headless runs.
#[derive(Debug, Default)]
pub struct ManualFrameClock {
    now_nanos: Cell<u64>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) -> u64 {
        let step = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let now = self.now_nanos.get().saturating_add(step);
        self.now_nanos.set(now);
        now
    }
}

impl FrameClock for ManualFrameClock {
    fn frame_time_nanos(&self) -> u64 {
        self.now_nanos.get()
    }
}
