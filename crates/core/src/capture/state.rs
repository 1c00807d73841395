//! Per-channel edge state machine
//!
//! Edges arrive untyped: polarity is inferred purely by alternation. The
//! first timestamp after construction is taken as a rising edge, the next as
//! falling, and so on. A single missed edge swaps the inference for every
//! later pulse on that channel; nothing here detects or resynchronizes it.
//!
//! ## Concurrency
//!
//! Every field is an individual atomic. Only the interrupt context writes
//! `phase` and the timestamps, so plain load/store is enough there. The
//! width is published with `Release`; the engine sets the ready bit after it.

use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

/// Largest value of the free-running counter before it wraps to zero
pub const COUNTER_MAX: u16 = 0xFFFF;

/// Edge the channel expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Next timestamp starts a pulse
    AwaitingRising,
    /// Next timestamp ends a pulse
    AwaitingFalling,
}

/// Edge capture state for one channel
#[derive(Debug)]
pub struct CaptureChannelState {
    awaiting_falling: AtomicBool,
    rising: AtomicU16,
    falling: AtomicU16,
    pulse_width: AtomicU32,
}

impl Default for CaptureChannelState {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureChannelState {
    /// Create a channel awaiting its first rising edge
    pub const fn new() -> Self {
        Self {
            awaiting_falling: AtomicBool::new(false),
            rising: AtomicU16::new(0),
            falling: AtomicU16::new(0),
            pulse_width: AtomicU32::new(0),
        }
    }

    /// Feed one captured counter value
    ///
    /// Returns the completed pulse width on a falling edge, `None` on a
    /// rising edge. Never blocks and never allocates; safe to call from an
    /// interrupt handler as long as only one context calls it.
    pub fn ingest(&self, timestamp: u16) -> Option<u32> {
        if !self.awaiting_falling.load(Ordering::Relaxed) {
            self.rising.store(timestamp, Ordering::Relaxed);
            self.awaiting_falling.store(true, Ordering::Relaxed);
            return None;
        }

        self.falling.store(timestamp, Ordering::Relaxed);
        self.awaiting_falling.store(false, Ordering::Relaxed);

        let width = pulse_width_ticks(self.rising.load(Ordering::Relaxed), timestamp);
        self.pulse_width.store(width, Ordering::Release);
        Some(width)
    }

    /// Edge expected next
    pub fn phase(&self) -> Phase {
        if self.awaiting_falling.load(Ordering::Relaxed) {
            Phase::AwaitingFalling
        } else {
            Phase::AwaitingRising
        }
    }

    /// Counter value of the last rising edge
    pub fn rising_timestamp(&self) -> u16 {
        self.rising.load(Ordering::Relaxed)
    }

    /// Counter value of the last falling edge
    pub fn falling_timestamp(&self) -> u16 {
        self.falling.load(Ordering::Relaxed)
    }

    /// Last completed pulse width in counter ticks (0 before the first pulse)
    pub fn pulse_width(&self) -> u32 {
        self.pulse_width.load(Ordering::Acquire)
    }
}

/// Width in ticks between a rising and a falling counter sample
///
/// - `falling > rising`: `falling - rising - 1`
/// - otherwise the counter wrapped: `(COUNTER_MAX - rising) + falling - 1`
///
/// The wrapped branch subtracts one with wrapping arithmetic, so
/// `rising = 0xFFFF, falling = 0` yields `u32::MAX`. No plausibility limits
/// are applied.
pub const fn pulse_width_ticks(rising: u16, falling: u16) -> u32 {
    let rising = rising as u32;
    let falling = falling as u32;
    if falling > rising {
        falling - rising - 1
    } else {
        (COUNTER_MAX as u32 - rising + falling).wrapping_sub(1)
    }
}
