//! Capture Error Types
//!
//! Ingestion itself never fails: every 16-bit timestamp is accepted. These
//! errors only cover contract violations on the consumer side.

use core::fmt;

use super::engine::ReadyMask;

/// Errors from capture engine queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// `widest_ready_channel` called before every channel completed a cycle
    NotAllReady {
        /// Readiness mask at the time of the call
        mask: ReadyMask,
    },
    /// Channel index above 3
    InvalidChannel(u8),
    /// Status flag is not exactly one capture line flag (raw value kept)
    InvalidFlag(u16),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NotAllReady { mask } => {
                write!(f, "not all channels ready (mask {:#06b})", mask.bits())
            }
            CaptureError::InvalidChannel(index) => write!(f, "invalid capture channel {}", index),
            CaptureError::InvalidFlag(flag) => write!(f, "not a capture interrupt flag {:#06x}", flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    #[test]
    fn test_display() {
        let mut s: String<64> = String::new();
        write!(
            s,
            "{}",
            CaptureError::NotAllReady {
                mask: ReadyMask::CH0 | ReadyMask::CH2
            }
        )
        .unwrap();
        assert_eq!(s.as_str(), "not all channels ready (mask 0b0101)");

        s.clear();
        write!(s, "{}", CaptureError::InvalidChannel(7)).unwrap();
        assert_eq!(s.as_str(), "invalid capture channel 7");

        s.clear();
        write!(s, "{}", CaptureError::InvalidFlag(0x06)).unwrap();
        assert_eq!(s.as_str(), "not a capture interrupt flag 0x0006");
    }
}
