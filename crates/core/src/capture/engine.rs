//! Four-channel capture engine
//!
//! Aggregates the per-channel state machines behind two narrow entry points:
//!
//! - Interrupt context: [`CaptureEngine::on_edge`] and
//!   [`CaptureEngine::service_interrupt`]
//! - Main loop: [`CaptureEngine::all_ready`],
//!   [`CaptureEngine::widest_ready_channel`], [`CaptureEngine::clear_ready`]
//!
//! ## Readiness handoff
//!
//! A channel's width is stored (`Release`) before its ready bit is set with
//! `fetch_or` (`Release`). Readers load the mask with `Acquire`, so a set bit
//! guarantees the matching width is visible.
//!
//! `clear_ready` is a single store of zero. A cycle that completes after the
//! consumer checked readiness but before it cleared loses its ready bit; its
//! width is still stored and will be reported by the next full round.
//! Readiness is therefore at-least-once per round, never once per pulse.

use core::sync::atomic::{AtomicU8, Ordering};

use bitflags::bitflags;

use super::channel::Channel;
use super::error::CaptureError;
use super::state::{CaptureChannelState, Phase};
use crate::traits::CaptureTimer;

bitflags! {
    /// Set of channels whose width was measured since the last clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReadyMask: u8 {
        const CH0 = 0b0001;
        const CH1 = 0b0010;
        const CH2 = 0b0100;
        const CH3 = 0b1000;
    }
}

impl ReadyMask {
    /// Mask bit for a single channel
    pub const fn of(channel: Channel) -> Self {
        Self::from_bits_truncate(1 << (channel as u8))
    }

    /// Whether `channel` is in the set
    pub fn has(self, channel: Channel) -> bool {
        self.contains(Self::of(channel))
    }
}

/// Pulse-width capture engine for four channels sharing one counter
#[derive(Debug)]
pub struct CaptureEngine {
    channels: [CaptureChannelState; Channel::COUNT],
    ready: AtomicU8,
}

impl Default for CaptureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureEngine {
    /// Create an engine with every channel awaiting a rising edge
    ///
    /// `const` so the firmware can hold the engine in a `static`.
    pub const fn new() -> Self {
        Self {
            channels: [
                CaptureChannelState::new(),
                CaptureChannelState::new(),
                CaptureChannelState::new(),
                CaptureChannelState::new(),
            ],
            ready: AtomicU8::new(0),
        }
    }

    /// Ingest one edge timestamp for `channel` (interrupt context)
    ///
    /// Marks the channel ready when the edge completes a pulse. Calls for
    /// different channels may run back to back inside one handler; calls
    /// from two cores at once are not supported.
    pub fn on_edge(&self, channel: Channel, timestamp: u16) {
        if self.channels[channel.index()].ingest(timestamp).is_some() {
            self.ready
                .fetch_or(ReadyMask::of(channel).bits(), Ordering::Release);
        }
    }

    /// Drain the pending capture flags of `timer` (interrupt context)
    ///
    /// Channels are visited in ascending order. A channel whose flag is set
    /// has its capture register ingested and its flag cleared; the others
    /// are left untouched. Returns the number of edges ingested.
    pub fn service_interrupt<T: CaptureTimer + ?Sized>(&self, timer: &mut T) -> usize {
        let mut serviced = 0;
        for channel in Channel::ALL {
            if !timer.is_pending(channel) {
                continue;
            }
            self.on_edge(channel, timer.capture(channel));
            timer.clear_pending(channel);
            serviced += 1;
        }
        serviced
    }

    /// Channels measured since the last clear
    pub fn ready_mask(&self) -> ReadyMask {
        ReadyMask::from_bits_truncate(self.ready.load(Ordering::Acquire))
    }

    /// True once all four channels completed a pulse since the last clear
    pub fn all_ready(&self) -> bool {
        self.ready_mask().is_all()
    }

    /// Channel carrying the widest pulse
    ///
    /// Ties go to the lowest-numbered channel.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::NotAllReady`] unless [`all_ready`](Self::all_ready)
    /// holds.
    pub fn widest_ready_channel(&self) -> Result<Channel, CaptureError> {
        let mask = self.ready_mask();
        if !mask.is_all() {
            return Err(CaptureError::NotAllReady { mask });
        }
        Ok(select_widest(&self.snapshot()))
    }

    /// Forget readiness; phases and stored widths are kept
    pub fn clear_ready(&self) {
        self.ready.store(0, Ordering::Release);
    }

    /// Poll-report-clear in one step
    ///
    /// Returns the widest channel and clears the mask when every channel is
    /// ready, otherwise `None` with the mask untouched.
    pub fn take_widest(&self) -> Option<Channel> {
        let widest = self.widest_ready_channel().ok()?;
        self.clear_ready();
        Some(widest)
    }

    /// Last completed width of `channel` in ticks
    pub fn pulse_width(&self, channel: Channel) -> u32 {
        self.channels[channel.index()].pulse_width()
    }

    /// Edge `channel` expects next
    pub fn phase(&self, channel: Channel) -> Phase {
        self.channels[channel.index()].phase()
    }

    /// State machine of a single channel
    pub fn channel(&self, channel: Channel) -> &CaptureChannelState {
        &self.channels[channel.index()]
    }

    /// Last completed widths of all channels, indexed by channel
    pub fn snapshot(&self) -> [u32; Channel::COUNT] {
        Channel::ALL.map(|ch| self.pulse_width(ch))
    }
}

/// Pick the widest of four widths
///
/// Scans ascending against a zero maximum with strict `>`, so the first
/// channel reaching the maximum wins and all-zero widths select channel 0.
pub fn select_widest(widths: &[u32; Channel::COUNT]) -> Channel {
    let mut widest = Channel::Ch0;
    let mut max = 0;
    for channel in Channel::ALL {
        let width = widths[channel.index()];
        if width > max {
            max = width;
            widest = channel;
        }
    }
    widest
}
