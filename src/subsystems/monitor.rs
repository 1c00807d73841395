//! Capture monitor (the main-loop consumer)
//!
//! Polls the capture engine and drives the LED ring according to the
//! selected mode. Every wait is a deadline checked on the next poll, so
//! `poll` never blocks and the main loop stays responsive to mode changes.
//!
//! # Watch mode protocol
//!
//! ```text
//! all_ready? ──no──▶ return
//!     │yes
//!     ▼
//! widest_ready_channel ─▶ show LED ─▶ hold `hold_ms` ─▶ clear_ready
//! ```
//!
//! The mask is cleared when the hold ends, not when the result is read.
//! Pulses that complete during the hold overwrite widths but their ready
//! bits are dropped by the clear, so every report is based on a full round
//! measured after the previous hold.

use quad_capture_core::capture::{CaptureEngine, Channel};
use quad_capture_core::indicator::{FlashPattern, IndicatorOutput, Indicators, SpinPattern};
use quad_capture_core::mode::Mode;
use quad_capture_core::parameters::MonitorParams;
use quad_capture_core::traits::TimeSource;

/// Main-loop consumer of capture results
pub struct Monitor<T: TimeSource, O: IndicatorOutput> {
    time: T,
    output: O,
    params: MonitorParams,
    mode: Option<Mode>,
    next_step_ms: u64,
    hold_until_ms: Option<u64>,
    spin: SpinPattern,
    flash: FlashPattern,
    last_widest: Option<Channel>,
    reports: u32,
}

impl<T: TimeSource, O: IndicatorOutput> Monitor<T, O> {
    pub fn new(time: T, output: O, params: MonitorParams) -> Self {
        Self {
            time,
            output,
            params,
            mode: None,
            next_step_ms: 0,
            hold_until_ms: None,
            spin: SpinPattern::new(),
            flash: FlashPattern::new(),
            last_widest: None,
            reports: 0,
        }
    }

    /// Run one main-loop iteration in `mode`
    pub fn poll(&mut self, engine: &CaptureEngine, mode: Mode) {
        let now = self.time.now_ms();
        if self.mode != Some(mode) {
            self.enter(engine, mode, now);
        }

        match mode {
            Mode::Spin => self.poll_spin(now),
            Mode::Watch => self.poll_watch(engine, now),
            Mode::Flash => self.poll_flash(now),
        }
    }

    fn enter(&mut self, engine: &CaptureEngine, mode: Mode, now: u64) {
        if self.hold_until_ms.take().is_some() {
            // Leaving watch mid-hold still consumes the shown round
            engine.clear_ready();
        }
        crate::log_info!("monitor: entering {} mode", mode.as_str());

        self.mode = Some(mode);
        self.spin = SpinPattern::new();
        self.flash = FlashPattern::new();
        self.next_step_ms = now;
        self.output.show(Indicators::empty());
    }

    fn poll_spin(&mut self, now: u64) {
        if now < self.next_step_ms {
            return;
        }
        self.output.show(self.spin.advance());
        self.next_step_ms = now.saturating_add(u64::from(self.params.spin_ms));
    }

    fn poll_flash(&mut self, now: u64) {
        if now < self.next_step_ms {
            return;
        }
        self.output.show(self.flash.advance());
        self.next_step_ms = now.saturating_add(u64::from(self.params.flash_ms));
    }

    fn poll_watch(&mut self, engine: &CaptureEngine, now: u64) {
        if let Some(until) = self.hold_until_ms {
            if now < until {
                return;
            }
            self.hold_until_ms = None;
            engine.clear_ready();
        }

        let Ok(widest) = engine.widest_ready_channel() else {
            return;
        };

        self.output.show(Indicators::for_channel(widest));
        if self.last_widest != Some(widest) {
            crate::log_info!(
                "monitor: widest channel {} ({} ticks)",
                widest.index() as u8,
                engine.pulse_width(widest)
            );
        }
        self.last_widest = Some(widest);
        self.reports = self.reports.wrapping_add(1);
        self.hold_until_ms = Some(now.saturating_add(u64::from(self.params.hold_ms)));
    }

    /// Channel shown by the most recent report
    pub fn last_widest(&self) -> Option<Channel> {
        self.last_widest
    }

    /// Number of widest-channel reports so far
    pub fn reports(&self) -> u32 {
        self.reports
    }

    /// Whether a report is currently being held on the display
    pub fn is_holding(&self) -> bool {
        self.hold_until_ms.is_some()
    }

    pub fn params(&self) -> &MonitorParams {
        &self.params
    }

    /// Replace the timing parameters; takes effect from the next deadline
    pub fn set_params(&mut self, params: MonitorParams) {
        self.params = params;
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
