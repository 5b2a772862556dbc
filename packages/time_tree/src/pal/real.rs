//! Real platform implementation using the operating system monotonic clock.

use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Real implementation of the platform abstraction using [`std::time::Instant`].
///
/// All clones share the same origin instant, so readings taken through
/// different clones are mutually comparable.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RealPlatform {
    origin: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn monotonic_time(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
    fn readings_are_monotonic() {
        let platform = RealPlatform::new();

        let first = platform.monotonic_time();
        let second = platform.monotonic_time();

        assert!(second >= first);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
    fn clones_share_origin() {
        let platform = RealPlatform::new();
        let clone = platform;

        let first = platform.monotonic_time();
        let second = clone.monotonic_time();

        assert!(second >= first);
    }
}
