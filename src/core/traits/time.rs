//! Time source implementations.

pub use quad_capture_core::traits::time::{MockTime, TimeSource};

/// Embassy-based time source using the Embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

#[cfg(feature = "embassy")]
impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}
