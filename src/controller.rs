//! Lamp controller — the hexagonal core.
//!
//! [`LampController`] owns the shift-register driver, the strip motion
//! mask, and the illumination-hold timer.  All I/O flows through port
//! traits injected at call sites, making the whole controller testable
//! with mock adapters.
//!
//! ```text
//!  PresenceSensor ──▶ ┌──────────────────────────┐
//!  TouchEdge      ──▶ │      LampController       │ ──▶ ShiftBus
//!  MotionEdge     ──▶ │  mask · hold · LED state  │
//!                     └──────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::Tuning;
use crate::drivers::shift_register::ShiftRegisterDriver;
use crate::events::{self, Event};
use crate::ports::{PresenceSensor, ShiftBus, TouchPad};
use crate::presence::{HoldEvent, HoldState, PresenceHold};
use crate::touch::detector::TouchEdge;
use crate::touch::TouchScanner;

pub struct LampController<B: ShiftBus> {
    leds: ShiftRegisterDriver<B>,
    /// Bit *i* set = strip *i* participates in motion-driven on/off.
    motion_mask: u8,
    hold: PresenceHold,
}

impl<B: ShiftBus> LampController<B> {
    pub fn new(bus: B, tuning: &Tuning) -> Self {
        Self {
            leds: ShiftRegisterDriver::new(bus),
            motion_mask: crate::config::MOTION_STRIPS_DEFAULT,
            hold: PresenceHold::new(tuning.timeout_sec),
        }
    }

    /// Force the outputs into the known all-off state.  Call once at
    /// startup, before any interrupt source is enabled.
    pub fn start(&mut self) {
        self.leds.assign(0);
        info!("lamp: started, all strips off (motion mask=0b{:08b})", self.motion_mask);
    }

    // ── Interrupt-source entry points ─────────────────────────

    /// Falling edge on the motion input.  Asserts the motion-enabled
    /// strips immediately and re-arms the hold countdown.  Repeated edges
    /// produce redundant transfers on purpose — skipping the latch pulse
    /// for an unchanged byte has not been proven safe.
    pub fn on_motion_edge(&mut self) {
        self.leds.set_bits(self.motion_mask);
        self.hold.arm();
        debug!("lamp: motion edge, hold re-armed");
    }

    /// 1 Hz hold tick.  Re-reads the sensor level so presence keeps the
    /// countdown pinned; on expiry only the motion-governed strips go
    /// dark — manually-controlled strips stay as they are.
    pub fn on_hold_tick(&mut self, sensor: &impl PresenceSensor) {
        if let Some(HoldEvent::Expired) = self.hold.tick(sensor.is_active()) {
            self.leds.clear_bits(self.motion_mask);
            info!("lamp: hold expired, motion strips off");
        }
    }

    /// Committed touch state change: all strips on when touched, all off
    /// when released — independent of the motion mask.
    pub fn on_touch_edge(&mut self, edge: TouchEdge) {
        match edge {
            TouchEdge::Pressed => self.leds.assign(0xFF),
            TouchEdge::Released => self.leds.assign(0x00),
        }
        info!("lamp: touch {:?}, strips=0b{:08b}", edge, self.leds.state());
    }

    // ── Strip policy ──────────────────────────────────────────

    /// Add strips to motion-driven control.  Never transfers.
    pub fn enable_for_motion(&mut self, mask: u8) {
        self.motion_mask |= mask;
    }

    /// Remove strips from motion-driven control.  Their current
    /// illumination is untouched; only future eligibility changes.
    pub fn disable_for_motion(&mut self, mask: u8) {
        self.motion_mask &= !mask;
    }

    pub fn motion_mask(&self) -> u8 {
        self.motion_mask
    }

    // ── Manual strip control ──────────────────────────────────

    pub fn set_strips(&mut self, mask: u8) {
        self.leds.set_bits(mask);
    }

    pub fn clear_strips(&mut self, mask: u8) {
        self.leds.clear_bits(mask);
    }

    pub fn toggle_strips(&mut self, mask: u8) {
        self.leds.toggle_bits(mask);
    }

    pub fn assign_strips(&mut self, mask: u8) {
        self.leds.assign(mask);
    }

    // ── Queries ───────────────────────────────────────────────

    /// The byte currently latched on the strip outputs.
    pub fn led_state(&self) -> u8 {
        self.leds.state()
    }

    pub fn hold_state(&self) -> HoldState {
        self.hold.state()
    }

    pub fn hold_countdown(&self) -> u8 {
        self.hold.countdown()
    }
}

/// Thin dispatcher between the ISR event queue and the domain logic.
/// The idle loop calls this after every wake.
pub fn dispatch_pending<B, P, S>(
    lamp: &mut LampController<B>,
    scanner: &mut TouchScanner<P>,
    sensor: &S,
) where
    B: ShiftBus,
    P: TouchPad,
    S: PresenceSensor,
{
    events::drain_events(|event| match event {
        Event::MotionEdge => lamp.on_motion_edge(),
        Event::HoldTick => lamp.on_hold_tick(sensor),
        Event::ScanTick => {
            if let Some(edge) = scanner.scan_tick() {
                lamp.on_touch_edge(edge);
            }
        }
    });
}
