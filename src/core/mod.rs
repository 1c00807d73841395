//! Firmware infrastructure
//!
//! Logging, mode selection state shared with the button interrupt, and
//! platform trait implementations.

pub mod logging;
pub mod mode;
pub mod traits;
