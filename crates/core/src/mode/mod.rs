//! Operating mode selection
//!
//! A single push button cycles the display through three modes:
//! Spin → Watch → Flash → Spin. Presses arrive from the button interrupt; a
//! time-window debouncer drops contact bounce without blocking the handler.

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Idle chase around the ring
    #[default]
    Spin,
    /// Show the channel with the widest pulse
    Watch,
    /// Blink the whole ring
    Flash,
}

impl Mode {
    /// Mode selected by the next button press
    pub const fn next(self) -> Self {
        match self {
            Mode::Spin => Mode::Watch,
            Mode::Watch => Mode::Flash,
            Mode::Flash => Mode::Spin,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Spin => "spin",
            Mode::Watch => "watch",
            Mode::Flash => "flash",
        }
    }
}

/// Press debouncer
///
/// Accepts a press only if at least `window_ms` passed since the last
/// accepted one. The first press is always accepted.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window_ms: u32,
    last_accepted_ms: Option<u64>,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Register a press at `now_ms`; true if it counts
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < u64::from(self.window_ms) {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    pub const fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Change the window; the last accepted press is kept
    pub fn set_window_ms(&mut self, window_ms: u32) {
        self.window_ms = window_ms;
    }
}

/// Current mode plus press debouncing
#[derive(Debug, Clone, Copy)]
pub struct ModeSelector {
    mode: Mode,
    debouncer: Debouncer,
}

impl ModeSelector {
    /// Selector starting in [`Mode::Spin`]
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            mode: Mode::Spin,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Handle a button press; returns the new mode if the press was accepted
    pub fn on_press(&mut self, now_ms: u64) -> Option<Mode> {
        if !self.debouncer.accept(now_ms) {
            return None;
        }
        self.mode = self.mode.next();
        Some(self.mode)
    }

    pub fn set_debounce_ms(&mut self, window_ms: u32) {
        self.debouncer.set_window_ms(window_ms);
    }

    pub const fn debounce_ms(&self) -> u32 {
        self.debouncer.window_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle() {
        assert_eq!(Mode::default(), Mode::Spin);
        assert_eq!(Mode::Spin.next(), Mode::Watch);
        assert_eq!(Mode::Watch.next(), Mode::Flash);
        assert_eq!(Mode::Flash.next(), Mode::Spin);
    }

    #[test]
    fn test_debouncer_window() {
        let mut debouncer = Debouncer::new(50);
        assert!(debouncer.accept(1_000));
        assert!(!debouncer.accept(1_010));
        assert!(!debouncer.accept(1_049));
        assert!(debouncer.accept(1_050));
        // Rejected presses do not extend the window
        assert!(!debouncer.accept(1_060));
        assert!(debouncer.accept(1_100));
    }

    #[test]
    fn test_debouncer_zero_window_accepts_all() {
        let mut debouncer = Debouncer::new(0);
        assert!(debouncer.accept(5));
        assert!(debouncer.accept(5));
    }

    #[test]
    fn test_selector_press_sequence() {
        let mut selector = ModeSelector::new(50);
        assert_eq!(selector.mode(), Mode::Spin);
        assert_eq!(selector.on_press(0), Some(Mode::Watch));
        // Bounce
        assert_eq!(selector.on_press(5), None);
        assert_eq!(selector.mode(), Mode::Watch);
        assert_eq!(selector.on_press(100), Some(Mode::Flash));
        assert_eq!(selector.on_press(200), Some(Mode::Spin));
    }

    #[test]
    fn test_selector_retune() {
        let mut selector = ModeSelector::new(50);
        selector.set_debounce_ms(200);
        assert_eq!(selector.debounce_ms(), 200);
        selector.on_press(0);
        assert_eq!(selector.on_press(150), None);
    }
}
