//! Display mode shared with the button interrupt
//!
//! The button handler and the main loop both touch the selector, so it sits
//! in a `critical_section::Mutex`. Each access is a copy in or out of a
//! `Cell`; no critical section outlives one call.

use core::cell::Cell;

use critical_section::Mutex;
use quad_capture_core::mode::{Mode, ModeSelector};
use quad_capture_core::parameters::monitor::DEFAULT_DEBOUNCE_MS;
use quad_capture_core::parameters::MonitorParams;

static MODE: Mutex<Cell<ModeSelector>> = Mutex::new(Cell::new(ModeSelector::new(DEFAULT_DEBOUNCE_MS)));

/// Button press entry point (interrupt context)
///
/// Returns the new mode when the press survives debouncing.
pub fn button_interrupt(now_ms: u64) -> Option<Mode> {
    let changed = critical_section::with(|cs| {
        let cell = MODE.borrow(cs);
        let mut selector = cell.get();
        let changed = selector.on_press(now_ms);
        cell.set(selector);
        changed
    });

    if let Some(mode) = changed {
        crate::log_debug!("button: mode -> {}", mode.as_str());
    }
    changed
}

/// Mode currently selected
pub fn current_mode() -> Mode {
    critical_section::with(|cs| MODE.borrow(cs).get().mode())
}

/// Apply a new debounce window
pub fn set_debounce_ms(window_ms: u32) {
    critical_section::with(|cs| {
        let cell = MODE.borrow(cs);
        let mut selector = cell.get();
        selector.set_debounce_ms(window_ms);
        cell.set(selector);
    });
}

/// Apply the button-related fields of `params` to the global selector
///
/// Call after loading parameters and again whenever they change.
pub fn apply_params(params: &MonitorParams) {
    set_debounce_ms(params.debounce_ms);
    crate::log_debug!("button: debounce window {} ms", params.debounce_ms);
}
