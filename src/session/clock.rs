//! Session time sources

use std::time::Instant;

/// Monotonic time in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time since the clock was created
///
/// Drives a live `LandmarkSource` session; the replay command also uses it
/// to time how long a replay took.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
