//! Time source for frame pacing.

use std::time::{Duration, Instant};

use super::CancelToken;

/// Monotonic clock with a cancellable sleep.
///
/// The scheduler only reads time through this trait, so tests can drive
/// pacing with a fake clock.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    /// Sleep for `duration`, waking early if `cancel` fires.
    ///
    /// # Returns
    /// `true` if the sleep ended because of cancellation.
    fn sleep(&self, duration: Duration, cancel: &CancelToken) -> bool;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration, cancel: &CancelToken) -> bool {
        cancel.wait_timeout(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_system_clock_sleep_advances_time() {
        let clock = SystemClock::new();
        let before = clock.now();
        assert!(!clock.sleep(Duration::from_millis(5), &CancelToken::new()));
        assert!(clock.now() - before >= Duration::from_millis(5));
    }
}
