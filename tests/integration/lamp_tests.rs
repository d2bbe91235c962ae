//! End-to-end motion/hold scenarios against mock adapters.

use nooklight::config::{Tuning, TIMEOUT_SEC};
use nooklight::controller::LampController;
use nooklight::presence::HoldState;

use crate::mock_hw::{MockPresence, MockShiftBus};

fn lamp() -> (LampController<MockShiftBus>, MockShiftBus) {
    let bus = MockShiftBus::new();
    let mut lamp = LampController::new(bus.clone(), &Tuning::default());
    lamp.start();
    (lamp, bus)
}

#[test]
fn full_motion_cycle_transfers_exactly_three_bytes() {
    let (mut lamp, bus) = lamp();
    let sensor = MockPresence::new(false);

    lamp.on_motion_edge();
    for _ in 0..TIMEOUT_SEC {
        lamp.on_hold_tick(&sensor);
    }

    // start + motion-on + expiry-off; the intermediate hold ticks must
    // not touch the bus.
    assert_eq!(bus.transfers(), vec![0x00, 0xFF, 0x00]);
    assert_eq!(lamp.hold_state(), HoldState::Idle);
}

#[test]
fn strips_stay_lit_until_the_final_hold_tick() {
    let (mut lamp, _) = lamp();
    let sensor = MockPresence::new(false);

    lamp.on_motion_edge();
    let mut observed = Vec::new();
    for _ in 0..TIMEOUT_SEC {
        lamp.on_hold_tick(&sensor);
        observed.push(lamp.led_state());
    }

    let mut expected = vec![0xFF; TIMEOUT_SEC as usize - 1];
    expected.push(0x00);
    assert_eq!(observed, expected);
}

#[test]
fn continuous_presence_pins_the_countdown() {
    let (mut lamp, _) = lamp();
    let sensor = MockPresence::new(true);

    lamp.on_motion_edge();
    for _ in 0..20 {
        lamp.on_hold_tick(&sensor);
        assert_eq!(lamp.hold_state(), HoldState::Held);
        assert_eq!(lamp.hold_countdown(), TIMEOUT_SEC);
    }
    assert_eq!(lamp.led_state(), 0xFF);
}

#[test]
fn presence_ending_midway_starts_a_full_window() {
    let (mut lamp, _) = lamp();
    let sensor = MockPresence::new(true);

    lamp.on_motion_edge();
    for _ in 0..3 {
        lamp.on_hold_tick(&sensor);
    }

    // Sensor drops: the full timeout still applies from this point.
    sensor.set_active(false);
    for _ in 0..TIMEOUT_SEC - 1 {
        lamp.on_hold_tick(&sensor);
        assert_eq!(lamp.led_state(), 0xFF);
    }
    lamp.on_hold_tick(&sensor);
    assert_eq!(lamp.led_state(), 0x00);
}

#[test]
fn reentry_during_countdown_relights_and_rearms() {
    let (mut lamp, _) = lamp();
    let sensor = MockPresence::new(false);

    lamp.on_motion_edge();
    for _ in 0..TIMEOUT_SEC - 1 {
        lamp.on_hold_tick(&sensor);
    }
    assert_eq!(lamp.hold_countdown(), 1);

    // A new edge one tick before expiry restores the full window.
    lamp.on_motion_edge();
    assert_eq!(lamp.hold_countdown(), TIMEOUT_SEC);
    for _ in 0..TIMEOUT_SEC - 1 {
        lamp.on_hold_tick(&sensor);
        assert_eq!(lamp.led_state(), 0xFF);
    }
}

#[test]
fn expiry_leaves_manual_strips_lit() {
    let (mut lamp, bus) = lamp();
    let sensor = MockPresence::new(false);

    // Strip 7 is manual-only and lit by hand.
    lamp.disable_for_motion(0x80);
    lamp.set_strips(0x80);

    lamp.on_motion_edge();
    assert_eq!(lamp.led_state(), 0xFF);

    for _ in 0..TIMEOUT_SEC {
        lamp.on_hold_tick(&sensor);
    }
    assert_eq!(lamp.led_state(), 0x80);
    assert_eq!(bus.last_transfer(), Some(0x80));
}
