//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides monotonic clock readings.
///
/// This trait abstracts the underlying clock, allowing for both a real
/// implementation (reading the operating system monotonic clock) and a fake
/// implementation (for testing).
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current reading of the monotonic clock.
    ///
    /// The reading is expressed as the time elapsed since an arbitrary fixed
    /// origin. Only differences between two readings are meaningful.
    fn monotonic_time(&self) -> Duration;
}
