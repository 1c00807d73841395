//! Capture channel identifiers
//!
//! Four channels share one free-running counter. Each maps to one timer
//! capture/compare line (CC1..CC4) whose interrupt flag sits at bit
//! `index + 1` of the timer status register.

use core::fmt;

use super::error::CaptureError;

/// Capture channel identity (0..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Capture/compare line 1
    Ch0 = 0,
    /// Capture/compare line 2
    Ch1 = 1,
    /// Capture/compare line 3
    Ch2 = 2,
    /// Capture/compare line 4
    Ch3 = 3,
}

/// Interrupt flags of all four capture lines (CC1IF..CC4IF)
pub const ALL_CHANNEL_FLAGS: u16 = 0x1E;

impl Channel {
    /// Number of capture channels
    pub const COUNT: usize = 4;

    /// All channels in ascending order
    pub const ALL: [Channel; Self::COUNT] = [Channel::Ch0, Channel::Ch1, Channel::Ch2, Channel::Ch3];

    /// Create a channel from its index
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidChannel`] for indices above 3.
    pub const fn new(index: u8) -> Result<Self, CaptureError> {
        match index {
            0 => Ok(Channel::Ch0),
            1 => Ok(Channel::Ch1),
            2 => Ok(Channel::Ch2),
            3 => Ok(Channel::Ch3),
            other => Err(CaptureError::InvalidChannel(other)),
        }
    }

    /// Zero-based index, usable for array access
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Timer status register flag for this channel (CC1IF = 0x02 .. CC4IF = 0x10)
    #[inline]
    pub const fn interrupt_flag(self) -> u16 {
        0x02 << (self as u16)
    }

    /// Map a single timer interrupt flag back to its channel
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidFlag`] carrying `flag` unchanged if it
    /// is not exactly one of the four capture flags.
    pub fn from_interrupt_flag(flag: u16) -> Result<Self, CaptureError> {
        Self::ALL
            .into_iter()
            .find(|ch| ch.interrupt_flag() == flag)
            .ok_or(CaptureError::InvalidFlag(flag))
    }
}

impl TryFrom<u8> for Channel {
    type Error = CaptureError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel as u8
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CH{}", *self as u8)
    }
}
