//! Capture timer abstraction (the edge event source).
//!
//! A general-purpose timer in input-capture mode latches its free-running
//! counter into a per-channel capture register on each transition and raises
//! the channel's flag in the status register (CC1IF..CC4IF, bits 1..4).
//! Polarity is not reported: the timer captures on both edges.

use crate::capture::Channel;

/// Hardware timer running four input-capture channels.
pub trait CaptureTimer {
    /// Raw status register interrupt flags.
    fn status(&self) -> u16;

    /// Counter value latched by the last transition on `channel`.
    fn capture(&self, channel: Channel) -> u16;

    /// Acknowledge the capture interrupt of `channel`.
    fn clear_pending(&mut self, channel: Channel);

    /// Whether `channel` has a latched, unacknowledged capture.
    fn is_pending(&self, channel: Channel) -> bool {
        self.status() & channel.interrupt_flag() != 0
    }
}

/// Scriptable capture timer for host tests.
#[derive(Debug, Clone, Default)]
pub struct MockCaptureTimer {
    status: u16,
    captures: [u16; Channel::COUNT],
    acknowledged: u32,
}

impl MockCaptureTimer {
    /// Timer with nothing latched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a transition on `channel` at counter value `counter`.
    ///
    /// A second latch before acknowledgement overwrites the register, as the
    /// hardware does (overcapture).
    pub fn latch(&mut self, channel: Channel, counter: u16) {
        self.captures[channel.index()] = counter;
        self.status |= channel.interrupt_flag();
    }

    /// Set raw status bits, including ones that are not capture flags.
    pub fn raise(&mut self, flags: u16) {
        self.status |= flags;
    }

    /// Number of flags acknowledged so far.
    pub fn acknowledged(&self) -> u32 {
        self.acknowledged
    }
}

impl CaptureTimer for MockCaptureTimer {
    fn status(&self) -> u16 {
        self.status
    }

    fn capture(&self, channel: Channel) -> u16 {
        self.captures[channel.index()]
    }

    fn clear_pending(&mut self, channel: Channel) {
        self.status &= !channel.interrupt_flag();
        self.acknowledged += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_sets_flag_and_register() {
        let mut timer = MockCaptureTimer::new();
        timer.latch(Channel::Ch1, 1234);
        assert!(timer.is_pending(Channel::Ch1));
        assert!(!timer.is_pending(Channel::Ch0));
        assert_eq!(timer.capture(Channel::Ch1), 1234);
        assert_eq!(timer.status(), 0x04);
    }

    #[test]
    fn clear_pending_only_clears_one_flag() {
        let mut timer = MockCaptureTimer::new();
        timer.latch(Channel::Ch0, 1);
        timer.latch(Channel::Ch3, 2);
        timer.raise(0x01);
        timer.clear_pending(Channel::Ch0);
        assert_eq!(timer.status(), 0x11);
        assert_eq!(timer.acknowledged(), 1);
    }
}
