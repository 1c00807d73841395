//! Interrupt-driven pulse-width capture
//!
//! One free-running 16-bit counter is shared by four capture channels.
//! Every input transition latches the counter; the per-channel state machine
//! pairs consecutive samples into rising/falling edges and turns them into a
//! width in raw counter ticks.
//!
//! # Components
//!
//! - [`channel`]: channel identities and timer flag mapping
//! - [`state`]: per-channel edge state machine and wraparound arithmetic
//! - [`engine`]: four-channel aggregate with the readiness mask
//! - [`error`]: consumer-side contract errors
//!
//! # Example
//!
//! ```
//! use quad_capture_core::capture::{CaptureEngine, Channel};
//!
//! let engine = CaptureEngine::new();
//! for (channel, [rising, falling]) in Channel::ALL.into_iter().zip([[100, 250], [0, 50], [10, 10010], [65000, 100]]) {
//!     engine.on_edge(channel, rising);
//!     engine.on_edge(channel, falling);
//! }
//!
//! assert!(engine.all_ready());
//! assert_eq!(engine.take_widest(), Some(Channel::Ch2));
//! assert!(!engine.all_ready());
//! ```

pub mod channel;
pub mod engine;
pub mod error;
pub mod state;

pub use channel::{Channel, ALL_CHANNEL_FLAGS};
pub use engine::{select_widest, CaptureEngine, ReadyMask};
pub use error::CaptureError;
pub use state::{pulse_width_ticks, CaptureChannelState, Phase, COUNTER_MAX};
