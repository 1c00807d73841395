//! Indicator mapping for the eight-LED compass ring
//!
//! Pure mapping from measurement results and display patterns to a set of
//! lit LEDs. Driving the actual pins is left to an [`IndicatorOutput`]
//! implementation in the firmware.
//!
//! Ring order (clockwise): LED3, LED5, LED7, LED9, LED10, LED8, LED6, LED4.

use bitflags::bitflags;
use heapless::Vec;

use crate::capture::Channel;

bitflags! {
    /// Set of lit LEDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Indicators: u8 {
        const LED3 = 1 << 0;
        const LED4 = 1 << 1;
        const LED5 = 1 << 2;
        const LED6 = 1 << 3;
        const LED7 = 1 << 4;
        const LED8 = 1 << 5;
        const LED9 = 1 << 6;
        const LED10 = 1 << 7;
    }
}

/// LEDs in ring order
pub const RING: [Indicators; 8] = [
    Indicators::LED3,
    Indicators::LED5,
    Indicators::LED7,
    Indicators::LED9,
    Indicators::LED10,
    Indicators::LED8,
    Indicators::LED6,
    Indicators::LED4,
];

impl Default for Indicators {
    fn default() -> Self {
        Indicators::empty()
    }
}

impl Indicators {
    /// Single LED pointing at a capture channel
    ///
    /// The four channels sit on the ring's compass points.
    pub const fn for_channel(channel: Channel) -> Self {
        match channel {
            Channel::Ch0 => Indicators::LED3,
            Channel::Ch1 => Indicators::LED7,
            Channel::Ch2 => Indicators::LED10,
            Channel::Ch3 => Indicators::LED6,
        }
    }

    /// Bar graph of `count` LEDs along the ring
    ///
    /// Counts outside 1..=8 light nothing. The monitor does not use this; it
    /// is for board firmware that wants a level display (e.g. ready channels).
    pub fn for_count(count: usize) -> Self {
        if count > RING.len() {
            return Indicators::empty();
        }
        RING[..count]
            .iter()
            .fold(Indicators::empty(), |lit, led| lit | *led)
    }
}

/// Sink for indicator states
pub trait IndicatorOutput {
    /// Replace the lit set with `lit`
    fn show(&mut self, lit: Indicators);
}

/// Step-wise toggle chase around the ring
///
/// Each step toggles the next LED in ring order; after one lap every LED is
/// lit, after two the ring is dark again.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinPattern {
    step: usize,
    lit: Indicators,
}

impl SpinPattern {
    pub const fn new() -> Self {
        Self {
            step: 0,
            lit: Indicators::empty(),
        }
    }

    /// Toggle the next LED and return the new lit set
    pub fn advance(&mut self) -> Indicators {
        self.lit.toggle(RING[self.step]);
        self.step = (self.step + 1) % RING.len();
        self.lit
    }
}

/// All-off / all-on blink
#[derive(Debug, Clone, Copy, Default)]
pub struct FlashPattern {
    on: bool,
}

impl FlashPattern {
    pub const fn new() -> Self {
        Self { on: false }
    }

    /// Next half period, starting dark
    pub fn advance(&mut self) -> Indicators {
        let lit = if self.on {
            Indicators::all()
        } else {
            Indicators::empty()
        };
        self.on = !self.on;
        lit
    }
}

/// Capacity of the [`MockIndicators`] history
pub const MOCK_HISTORY_LEN: usize = 32;

/// Recording output for host tests
///
/// Keeps the first [`MOCK_HISTORY_LEN`] states shown; later ones only
/// update [`current`](Self::current) and the count.
#[derive(Debug, Default)]
pub struct MockIndicators {
    current: Indicators,
    shows: usize,
    history: Vec<Indicators, MOCK_HISTORY_LEN>,
}

impl MockIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently lit set
    pub fn current(&self) -> Indicators {
        self.current
    }

    /// Number of `show` calls
    pub fn shows(&self) -> usize {
        self.shows
    }

    /// Recorded states, oldest first
    pub fn history(&self) -> &[Indicators] {
        &self.history
    }
}

impl IndicatorOutput for MockIndicators {
    fn show(&mut self, lit: Indicators) {
        self.current = lit;
        self.shows += 1;
        let _ = self.history.push(lit);
    }
}

impl<O: IndicatorOutput + ?Sized> IndicatorOutput for &mut O {
    fn show(&mut self, lit: Indicators) {
        (**self).show(lit);
    }
}
