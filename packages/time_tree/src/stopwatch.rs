use std::time::Duration;

/// Elapsed time state machine for a single scope.
///
/// The stopwatch does not read any clock itself - callers sample the platform
/// clock and pass the reading in. This keeps the state transitions trivially
/// testable with plain durations.
///
/// Misuse is defined as degenerate-but-safe behavior rather than an error:
/// starting twice is ignored, stopping before starting is ignored and stopping
/// twice keeps the elapsed value from the first stop.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) enum Stopwatch {
    /// No measurement has begun; elapsed time reads as zero.
    #[default]
    NotStarted,

    /// Measurement is in progress; elapsed time reads as time since `started_at`.
    Running {
        /// Clock reading at the moment the stopwatch was started.
        started_at: Duration,
    },

    /// Measurement has finished; elapsed time is frozen.
    Stopped {
        /// Final elapsed time, fixed at the moment the stopwatch was stopped.
        elapsed: Duration,
    },
}

impl Stopwatch {
    /// Begins measuring from the given clock reading.
    ///
    /// Ignored unless the stopwatch is in its initial state: a running
    /// stopwatch keeps its original start reading and a stopped stopwatch
    /// keeps its frozen elapsed time.
    pub(crate) fn start(&mut self, now: Duration) {
        if matches!(self, Self::NotStarted) {
            *self = Self::Running { started_at: now };
        }
    }

    /// Freezes the elapsed time at the given clock reading.
    ///
    /// Idempotent: stopping an already-stopped stopwatch has no further
    /// effect, and stopping one that was never started leaves it unstarted.
    pub(crate) fn stop(&mut self, now: Duration) {
        if let Self::Running { started_at } = *self {
            *self = Self::Stopped {
                elapsed: now.saturating_sub(started_at),
            };
        }
    }

    /// The elapsed time as of the given clock reading.
    ///
    /// A running stopwatch reports elapsed-so-far; a stopped one reports its
    /// frozen value regardless of `now`.
    pub(crate) fn elapsed(&self, now: Duration) -> Duration {
        match *self {
            Self::NotStarted => Duration::ZERO,
            Self::Running { started_at } => now.saturating_sub(started_at),
            Self::Stopped { elapsed } => elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_10: Duration = Duration::from_millis(10);
    const MS_40: Duration = Duration::from_millis(40);
    const MS_50: Duration = Duration::from_millis(50);
    const MS_90: Duration = Duration::from_millis(90);

    #[test]
    fn not_started_reports_zero() {
        let stopwatch = Stopwatch::default();
        assert_eq!(stopwatch.elapsed(MS_50), Duration::ZERO);
    }

    #[test]
    fn running_reports_elapsed_so_far() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.start(MS_10);

        assert_eq!(stopwatch.elapsed(MS_50), MS_40);
        assert_eq!(stopwatch.elapsed(MS_90), Duration::from_millis(80));
    }

    #[test]
    fn stop_freezes_elapsed() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.start(MS_10);
        stopwatch.stop(MS_50);

        assert_eq!(stopwatch.elapsed(MS_90), MS_40);
    }

    #[test]
    fn double_stop_keeps_first_elapsed() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.start(MS_10);
        stopwatch.stop(MS_50);
        stopwatch.stop(MS_90);

        assert_eq!(stopwatch.elapsed(MS_90), MS_40);
    }

    #[test]
    fn stop_before_start_is_ignored() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.stop(MS_50);

        assert!(matches!(stopwatch, Stopwatch::NotStarted));
        assert_eq!(stopwatch.elapsed(MS_90), Duration::ZERO);
    }

    #[test]
    fn double_start_keeps_first_reading() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.start(MS_10);
        stopwatch.start(MS_50);

        assert_eq!(stopwatch.elapsed(MS_90), Duration::from_millis(80));
    }

    #[test]
    fn restart_after_stop_is_ignored() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.start(MS_10);
        stopwatch.stop(MS_50);
        stopwatch.start(MS_90);

        assert_eq!(stopwatch.elapsed(Duration::from_millis(200)), MS_40);
    }

    #[test]
    fn backwards_clock_saturates_to_zero() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.start(MS_50);
        stopwatch.stop(MS_10);

        assert_eq!(stopwatch.elapsed(MS_90), Duration::ZERO);
    }
}
