//! Main-loop subsystems
//!
//! - [`monitor`]: polls the capture engine and drives the LED ring

pub mod monitor;

pub use monitor::Monitor;
