use std::time::Duration;

use web_time::Instant;

/// Monotonic time source, as an offset from a fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `web_time::Instant`, usable in the browser and natively.
#[derive(Debug, Clone, Copy)]
pub struct WebClock {
    origin: Instant,
}

impl WebClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WebClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WebClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;
