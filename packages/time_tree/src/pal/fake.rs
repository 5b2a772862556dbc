//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the clock reading instead of
/// relying on the real monotonic clock. Multiple clones of the same
/// `FakePlatform` share the same underlying time state, allowing tests to
/// modify the time after platform creation to simulate time progression.
#[derive(Clone, Debug)]
#[cfg(test)]
pub(crate) struct FakePlatform {
    monotonic_time: Arc<Mutex<Duration>>,
}

#[cfg(test)]
impl FakePlatform {
    /// Creates a new fake platform with the clock at zero.
    pub(crate) fn new() -> Self {
        Self {
            monotonic_time: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Sets the monotonic clock reading.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression during measurement.
    pub(crate) fn set_monotonic_time(&self, time: Duration) {
        *self
            .monotonic_time
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = time;
    }
}

#[cfg(test)]
impl Platform for FakePlatform {
    fn monotonic_time(&self) -> Duration {
        *self
            .monotonic_time
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.monotonic_time(), Duration::ZERO);
    }

    #[test]
    fn sets_monotonic_time() {
        let platform = FakePlatform::new();
        platform.set_monotonic_time(Duration::from_millis(150));

        assert_eq!(platform.monotonic_time(), Duration::from_millis(150));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Setting time on one clone affects the other
        platform1.set_monotonic_time(Duration::from_millis(100));
        assert_eq!(platform2.monotonic_time(), Duration::from_millis(100));
    }
}
