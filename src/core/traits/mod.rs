//! Platform trait implementations.
//!
//! Trait definitions and mocks live in `quad_capture_core::traits`; this
//! module adds the hardware-backed clock. `CaptureTimer` is implemented by
//! the board's timer driver and handed to
//! [`capture_interrupt`](crate::capture::capture_interrupt).

pub mod time;

pub use quad_capture_core::traits::{CaptureTimer, MockCaptureTimer};
#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
pub use time::{MockTime, TimeSource};
