//! Millisecond time source for the consumer side.
//!
//! The monitor schedules its display holds and blink patterns against
//! deadlines instead of spinning in delay loops. `TimeSource` is the only
//! clock it sees, so host tests can drive it with [`MockTime`].

use core::cell::Cell;

/// Monotonic millisecond clock.
///
/// # Example
///
/// ```
/// use quad_capture_core::traits::{MockTime, TimeSource};
///
/// fn due<T: TimeSource>(time: &T, deadline_ms: u64) -> bool {
///     time.now_ms() >= deadline_ms
/// }
///
/// let time = MockTime::new();
/// assert!(!due(&time, 25));
/// time.advance(25);
/// assert!(due(&time, 25));
/// ```
pub trait TimeSource {
    /// Milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Milliseconds elapsed since `reference_ms`, saturating at zero.
    fn elapsed_since(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Hand-driven clock for tests.
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    now_ms: Cell<u64>,
}

impl MockTime {
    /// Clock starting at 0 ms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at `ms`.
    pub fn with_initial(ms: u64) -> Self {
        Self {
            now_ms: Cell::new(ms),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, ms: u64) {
        self.now_ms.set(ms);
    }

    /// Move forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_starts_at_zero() {
        assert_eq!(MockTime::new().now_ms(), 0);
        assert_eq!(MockTime::with_initial(1_500).now_ms(), 1_500);
    }

    #[test]
    fn mock_time_set_and_advance() {
        let time = MockTime::new();
        time.set(100);
        time.advance(250);
        assert_eq!(time.now_ms(), 350);
    }

    #[test]
    fn elapsed_since_saturates() {
        let time = MockTime::with_initial(1_000);
        assert_eq!(time.elapsed_since(400), 600);
        assert_eq!(time.elapsed_since(5_000), 0);
    }

    #[test]
    fn reference_forwards() {
        let time = MockTime::with_initial(42);
        let by_ref: &MockTime = &time;
        assert_eq!(TimeSource::now_ms(&by_ref), 42);
    }
}
