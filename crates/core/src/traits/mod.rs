//! Platform seams for the capture engine and its consumer.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Hardware implementations (timer peripheral, monotonic clock) live in
//!   the firmware crate

pub mod time;
pub mod timer;

pub use time::{MockTime, TimeSource};
pub use timer::{CaptureTimer, MockCaptureTimer};
