//! Touch pipeline scenarios: calibration → scan ticks → committed edges
//! driving the lamp controller.

use nooklight::config::{Tuning, CALIBRATION_SAMPLES, TOUCH_DEBOUNCE};
use nooklight::controller::LampController;
use nooklight::touch::detector::TouchEdge;
use nooklight::touch::TouchScanner;

use crate::mock_hw::{MockShiftBus, MockTouchPad};

/// Script helper: `CALIBRATION_SAMPLES` readings at `ambient` for the
/// calibration window, then the given scan-phase readings.
fn scripted(ambient: u16, scans: &[u16]) -> TouchScanner<MockTouchPad> {
    let mut script = vec![ambient; CALIBRATION_SAMPLES];
    script.extend_from_slice(scans);
    TouchScanner::new(MockTouchPad::new(script), &Tuning::default())
}

#[test]
fn press_commits_after_debounce_and_lights_everything() {
    let bus = MockShiftBus::new();
    let mut lamp = LampController::new(bus.clone(), &Tuning::default());
    lamp.start();

    let mut scanner = scripted(500, &[560; 8]);
    scanner.calibrate();
    assert_eq!(scanner.baseline(), 500);

    let mut committed = None;
    for tick in 1..=TOUCH_DEBOUNCE {
        committed = scanner.scan_tick();
        if tick < TOUCH_DEBOUNCE {
            assert_eq!(committed, None, "tick {} must still be debouncing", tick);
        }
    }
    assert_eq!(committed, Some(TouchEdge::Pressed));

    lamp.on_touch_edge(TouchEdge::Pressed);
    assert_eq!(lamp.led_state(), 0xFF);
    assert_eq!(bus.transfers(), vec![0x00, 0xFF]);
}

#[test]
fn release_commits_symmetrically_and_darkens_everything() {
    let bus = MockShiftBus::new();
    let mut lamp = LampController::new(bus.clone(), &Tuning::default());
    lamp.start();

    // Press for one debounce run, then drop back to ambient.
    let mut scans = vec![560u16; TOUCH_DEBOUNCE as usize];
    scans.extend(vec![500u16; TOUCH_DEBOUNCE as usize]);
    let mut scanner = scripted(500, &scans);
    scanner.calibrate();

    for _ in 0..TOUCH_DEBOUNCE - 1 {
        assert_eq!(scanner.scan_tick(), None);
    }
    assert_eq!(scanner.scan_tick(), Some(TouchEdge::Pressed));
    lamp.on_touch_edge(TouchEdge::Pressed);

    for _ in 0..TOUCH_DEBOUNCE - 1 {
        assert_eq!(scanner.scan_tick(), None);
        assert!(scanner.is_touched(), "state holds until the release commits");
    }
    assert_eq!(scanner.scan_tick(), Some(TouchEdge::Released));
    lamp.on_touch_edge(TouchEdge::Released);

    assert_eq!(lamp.led_state(), 0x00);
    assert_eq!(bus.transfers(), vec![0x00, 0xFF, 0x00]);
}

#[test]
fn baseline_is_frozen_while_touched() {
    let mut scanner = scripted(500, &[560; 40]);
    scanner.calibrate();

    for _ in 0..TOUCH_DEBOUNCE {
        let _ = scanner.scan_tick();
    }
    assert!(scanner.is_touched());

    // A long-held touch must not be absorbed into the baseline.
    for _ in 0..30 {
        let _ = scanner.scan_tick();
    }
    assert_eq!(scanner.baseline(), 500);
    assert!(scanner.is_touched());
}

#[test]
fn brief_blips_never_reach_the_controller() {
    let bus = MockShiftBus::new();
    let mut lamp = LampController::new(bus.clone(), &Tuning::default());
    lamp.start();

    // Blips shorter than the debounce window, separated by ambient ticks.
    let scans = [560, 560, 500, 560, 500, 500, 560, 560, 560, 500];
    let mut scanner = scripted(500, &scans);
    scanner.calibrate();

    for _ in 0..scans.len() {
        if let Some(edge) = scanner.scan_tick() {
            lamp.on_touch_edge(edge);
        }
    }

    assert!(!scanner.is_touched());
    assert_eq!(lamp.led_state(), 0x00);
    assert_eq!(bus.transfers(), vec![0x00]);
}

#[test]
fn touch_overrides_strips_outside_the_motion_mask() {
    let bus = MockShiftBus::new();
    let mut lamp = LampController::new(bus.clone(), &Tuning::default());
    lamp.start();

    lamp.disable_for_motion(0xF0);
    lamp.on_motion_edge();
    assert_eq!(lamp.led_state(), 0x0F);

    lamp.on_touch_edge(TouchEdge::Pressed);
    assert_eq!(lamp.led_state(), 0xFF);

    lamp.on_touch_edge(TouchEdge::Released);
    assert_eq!(lamp.led_state(), 0x00);
}
