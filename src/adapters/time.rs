//! Cycle pacing adapters.
//!
//! - [`ThreadPacer`] blocks the calling thread with `std::thread::sleep`;
//!   the production loop uses it.
//! - [`NoPacer`] returns immediately and records the requested waits;
//!   tests and fast batch runs use it.

use core::time::Duration;

use crate::app::ports::Pacer;

/// Sleeps the current thread between cycles.
pub struct ThreadPacer {
    start: std::time::Instant,
}

impl Default for ThreadPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadPacer {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    /// Seconds since the pacer was created (monotonic).
    pub fn uptime_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }
}

impl Pacer for ThreadPacer {
    fn wait(&mut self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// Never blocks.  Accumulates the time that would have been slept.
#[derive(Debug, Default)]
pub struct NoPacer {
    waits: u32,
    skipped: Duration,
}

impl NoPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> u32 {
        self.waits
    }

    pub fn skipped(&self) -> Duration {
        self.skipped
    }
}

impl Pacer for NoPacer {
    fn wait(&mut self, period: Duration) {
        self.waits += 1;
        self.skipped += period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pacer_accumulates() {
        let mut p = NoPacer::new();
        p.wait(Duration::from_millis(200));
        p.wait(Duration::from_millis(300));
        assert_eq!(p.waits(), 2);
        assert_eq!(p.skipped(), Duration::from_millis(500));
    }

    #[test]
    fn thread_pacer_sleeps_at_least_period() {
        let mut p = ThreadPacer::new();
        let before = std::time::Instant::now();
        p.wait(Duration::from_millis(5));
        assert!(before.elapsed() >= Duration::from_millis(5));
    }
}
