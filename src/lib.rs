#![cfg_attr(not(test), no_std)]

//! quad_capture - Four-channel pulse-width capture firmware library
//!
//! Wires the pure capture logic from `quad_capture_core` to the firmware:
//! the global engine fed by the timer interrupt, the mode selector fed by
//! the button interrupt, and the main-loop monitor that reports the widest
//! pulse on the LED ring.
//!
//! # Main loop
//!
//! ```ignore
//! use quad_capture::capture::CAPTURE_ENGINE;
//! use quad_capture::core::mode::{apply_params, current_mode};
//! use quad_capture::subsystems::Monitor;
//!
//! let params = MonitorParams::from_store(&store);
//! apply_params(&params);
//! let mut monitor = Monitor::new(EmbassyTime, leds, params);
//! loop {
//!     monitor.poll(&CAPTURE_ENGINE, current_mode());
//! }
//! ```

// Firmware infrastructure: logging, mode state, platform traits
pub mod core;

// Global capture engine and timer interrupt entry
pub mod capture;

// Main-loop consumer
pub mod subsystems;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
