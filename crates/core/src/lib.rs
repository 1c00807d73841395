//! quad_capture_core - Pure no_std logic for four-channel pulse-width capture
//!
//! This crate contains the platform-agnostic capture engine and the
//! consumer-side logic around it. It is tested on host without any feature
//! flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies, no allocation
//! - **Trait abstractions**: Timer peripheral and clock injected via traits
//!
//! # Modules
//!
//! - [`capture`]: Edge state machine, wraparound arithmetic, readiness mask
//! - [`traits`]: Capture timer and time source abstractions with mocks
//! - [`indicator`]: LED ring mapping and display patterns
//! - [`mode`]: Display mode cycling and button debouncing
//! - [`parameters`]: Parameter store and monitor parameters

#![no_std]

pub mod capture;
pub mod indicator;
pub mod mode;
pub mod parameters;
pub mod traits;
