//! Host integration test: timer interrupt → engine → monitor → LED ring

use quad_capture::capture::{capture_interrupt, Channel, CAPTURE_ENGINE};
use quad_capture::core::mode::{button_interrupt, current_mode};
use quad_capture::core::traits::{CaptureTimer, MockCaptureTimer, MockTime};
use quad_capture::subsystems::Monitor;
use quad_capture_core::capture::CaptureEngine;
use quad_capture_core::indicator::{Indicators, MockIndicators};
use quad_capture_core::mode::Mode;
use quad_capture_core::parameters::{MonitorParams, ParamValue, ParameterStore};

/// Latch one edge per listed channel and run the interrupt once
fn edges(timer: &mut MockCaptureTimer, engine: &CaptureEngine, latched: &[(Channel, u16)]) {
    for &(channel, counter) in latched {
        timer.latch(channel, counter);
    }
    engine.service_interrupt(timer);
}

#[test]
fn full_round_through_interrupt_and_monitor() {
    let engine = CaptureEngine::new();
    let mut timer = MockCaptureTimer::new();
    let time = MockTime::new();
    let mut monitor = Monitor::new(&time, MockIndicators::new(), MonitorParams::default());

    // Interleaved edges, several channels pending per interrupt
    edges(&mut timer, &engine, &[(Channel::Ch0, 100), (Channel::Ch1, 0)]);
    edges(&mut timer, &engine, &[(Channel::Ch2, 10), (Channel::Ch1, 50)]);
    edges(&mut timer, &engine, &[(Channel::Ch0, 250), (Channel::Ch3, 65000)]);
    monitor.poll(&engine, Mode::Watch);
    assert_eq!(monitor.reports(), 0);

    edges(&mut timer, &engine, &[(Channel::Ch3, 100)]);
    edges(&mut timer, &engine, &[(Channel::Ch2, 10010)]);
    assert_eq!(engine.snapshot(), [149, 49, 9999, 634]);

    monitor.poll(&engine, Mode::Watch);
    assert_eq!(monitor.last_widest(), Some(Channel::Ch2));
    assert_eq!(monitor.output().current(), Indicators::LED10);
    assert_eq!(timer.status(), 0);
}

#[test]
fn parameters_drive_monitor_timing() {
    let mut store = ParameterStore::new();
    MonitorParams::register_defaults(&mut store).unwrap();
    store.set("MON_HOLD_MS", ParamValue::Uint32(40)).unwrap();
    let params = MonitorParams::from_store(&store);
    params.validate().unwrap();

    let engine = CaptureEngine::new();
    let time = MockTime::new();
    let mut monitor = Monitor::new(&time, MockIndicators::new(), params);

    for channel in Channel::ALL {
        engine.on_edge(channel, 0);
        engine.on_edge(channel, 11);
    }
    monitor.poll(&engine, Mode::Watch);
    assert!(monitor.is_holding());

    time.advance(40);
    monitor.poll(&engine, Mode::Watch);
    assert!(!monitor.is_holding());
    assert!(!engine.all_ready());
}

// Only test in this binary touching the global engine and mode.
#[test]
fn global_entry_points() {
    let mut timer = MockCaptureTimer::new();
    let time = MockTime::new();
    let mut monitor = Monitor::new(&time, MockIndicators::new(), MonitorParams::default());

    assert_eq!(current_mode(), Mode::Spin);
    assert_eq!(button_interrupt(0), Some(Mode::Watch));

    for (channel, rising, falling) in [
        (Channel::Ch0, 10, 20),
        (Channel::Ch1, 10, 30),
        (Channel::Ch2, 10, 30),
        (Channel::Ch3, 10, 15),
    ] {
        timer.latch(channel, rising);
        capture_interrupt(&mut timer);
        timer.latch(channel, falling);
        capture_interrupt(&mut timer);
    }

    monitor.poll(&CAPTURE_ENGINE, current_mode());
    // Tie between CH1 and CH2 goes to the lower channel
    assert_eq!(monitor.last_widest(), Some(Channel::Ch1));
    assert_eq!(monitor.output().current(), Indicators::LED7);
}
