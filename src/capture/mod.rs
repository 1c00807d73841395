//! Global capture engine and timer interrupt entry point
//!
//! The engine is lock-free, so the interrupt handler and the main loop share
//! one `static` directly.
//!
//! ```ignore
//! #[interrupt]
//! fn TIM2() {
//!     let mut timer = board::capture_timer();
//!     quad_capture::capture::capture_interrupt(&mut timer);
//! }
//! ```

pub use quad_capture_core::capture::{CaptureEngine, CaptureError, Channel, Phase, ReadyMask};

use crate::core::traits::CaptureTimer;

/// Engine fed by the capture timer interrupt
pub static CAPTURE_ENGINE: CaptureEngine = CaptureEngine::new();

/// Timer interrupt entry point: ingest all pending captures
///
/// Returns the number of edges ingested.
pub fn capture_interrupt<T: CaptureTimer + ?Sized>(timer: &mut T) -> usize {
    service(&CAPTURE_ENGINE, timer)
}

pub(crate) fn service<T: CaptureTimer + ?Sized>(engine: &CaptureEngine, timer: &mut T) -> usize {
    let serviced = engine.service_interrupt(timer);
    if serviced == 0 {
        crate::log_trace!("capture irq: no pending channel (status {})", timer.status());
    }
    serviced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockCaptureTimer;

    #[test]
    fn test_service_local_engine() {
        let engine = CaptureEngine::new();
        let mut timer = MockCaptureTimer::new();

        timer.latch(Channel::Ch1, 0);
        timer.latch(Channel::Ch3, 65000);
        assert_eq!(service(&engine, &mut timer), 2);

        timer.latch(Channel::Ch1, 50);
        timer.latch(Channel::Ch3, 100);
        assert_eq!(service(&engine, &mut timer), 2);

        assert_eq!(engine.pulse_width(Channel::Ch1), 49);
        assert_eq!(engine.pulse_width(Channel::Ch3), 634);
        assert_eq!(engine.ready_mask(), ReadyMask::CH1 | ReadyMask::CH3);
    }

    #[test]
    fn test_update_flag_only_is_ignored() {
        let engine = CaptureEngine::new();
        let mut timer = MockCaptureTimer::new();
        timer.raise(0x01);
        assert_eq!(service(&engine, &mut timer), 0);
        assert_eq!(timer.status(), 0x01);
        assert_eq!(timer.acknowledged(), 0);
    }

    // Only test touching the global engine.
    #[test]
    fn test_capture_interrupt_feeds_global_engine() {
        let mut timer = MockCaptureTimer::new();
        for (channel, [rising, falling]) in Channel::ALL
            .into_iter()
            .zip([[100, 250], [0, 50], [10, 10010], [65000, 100]])
        {
            timer.latch(channel, rising);
            capture_interrupt(&mut timer);
            timer.latch(channel, falling);
            capture_interrupt(&mut timer);
        }
        assert!(CAPTURE_ENGINE.all_ready());
        assert_eq!(CAPTURE_ENGINE.take_widest(), Some(Channel::Ch2));
    }
}
