//! Millisecond time source.
//!
//! Engines never read the clock themselves; the polling loop samples a
//! [`Clock`] and hands `now_ms` to `init`/`run`. That keeps every engine
//! deterministic under test.

use std::time::Instant;

/// Monotonic millisecond counter.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// [`Clock`] backed by `std::time::Instant`, counting from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
