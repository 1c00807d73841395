//! Monitor Parameter Definitions
//!
//! # Parameters
//!
//! - `MON_HOLD_MS` - How long the widest-channel indicator is held (ms)
//! - `MON_SPIN_MS` - Step period of the idle spin pattern (ms)
//! - `MON_FLASH_MS` - Half period of the flash pattern (ms)
//! - `BTN_DEBOUNCE_MS` - Button debounce window (ms)
//! - `CAP_CHANNELS` - Number of capture channels (read-only)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::capture::Channel;

/// Default indicator hold after each report
pub const DEFAULT_HOLD_MS: u32 = 250;
/// Default spin step period
pub const DEFAULT_SPIN_MS: u32 = 25;
/// Default flash half period
pub const DEFAULT_FLASH_MS: u32 = 25;
/// Default button debounce window
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Monitor parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorParams {
    /// Indicator hold after each widest-channel report (ms)
    pub hold_ms: u32,
    /// Spin pattern step period (ms)
    pub spin_ms: u32,
    /// Flash pattern half period (ms)
    pub flash_ms: u32,
    /// Button debounce window (ms)
    pub debounce_ms: u32,
}

impl Default for MonitorParams {
    fn default() -> Self {
        Self {
            hold_ms: DEFAULT_HOLD_MS,
            spin_ms: DEFAULT_SPIN_MS,
            flash_ms: DEFAULT_FLASH_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl MonitorParams {
    /// Register monitor parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "MON_HOLD_MS",
            ParamValue::Uint32(DEFAULT_HOLD_MS),
            ParamFlags::empty(),
        )?;
        store.register(
            "MON_SPIN_MS",
            ParamValue::Uint32(DEFAULT_SPIN_MS),
            ParamFlags::empty(),
        )?;
        store.register(
            "MON_FLASH_MS",
            ParamValue::Uint32(DEFAULT_FLASH_MS),
            ParamFlags::empty(),
        )?;
        store.register(
            "BTN_DEBOUNCE_MS",
            ParamValue::Uint32(DEFAULT_DEBOUNCE_MS),
            ParamFlags::empty(),
        )?;
        store.register(
            "CAP_CHANNELS",
            ParamValue::Uint32(Channel::COUNT as u32),
            ParamFlags::READ_ONLY,
        )?;

        Ok(())
    }

    /// Load monitor parameters from parameter store
    ///
    /// Missing or mistyped entries fall back to their defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        let read = |name: &str, default: u32| {
            store
                .get(name)
                .and_then(ParamValue::as_u32)
                .unwrap_or(default)
        };

        Self {
            hold_ms: read("MON_HOLD_MS", DEFAULT_HOLD_MS),
            spin_ms: read("MON_SPIN_MS", DEFAULT_SPIN_MS),
            flash_ms: read("MON_FLASH_MS", DEFAULT_FLASH_MS),
            debounce_ms: read("BTN_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS),
        }
    }

    /// Reject zero periods (a zero debounce window is allowed)
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.hold_ms == 0 || self.spin_ms == 0 || self.flash_ms == 0 {
            return Err(ParameterError::InvalidConfig);
        }
        Ok(())
    }
}
