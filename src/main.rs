//! NookLight Firmware — Main Entry Point
//!
//! Hexagonal architecture with interrupt-driven execution and an idle
//! main loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  BitBangShiftBus    OnboardTouchPad    MotionInput       │
//! │  (ShiftBus)         (TouchPad)         (PresenceSensor)  │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          LampController (pure logic)           │      │
//! │  │  motion mask · presence hold · touch scanner   │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  esp_timer ticks + GPIO ISR → SPSC queue → dispatcher    │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod controller;
mod critical;
mod events;
mod pins;
mod ports;
mod power;
mod presence;
mod touch;

mod adapters;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::peripherals::Peripherals;

use adapters::hardware::{MotionInput, OnboardTouchPad};
use controller::{dispatch_pending, LampController};
use drivers::bitbang::BitBangShiftBus;
use touch::TouchScanner;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  NookLight v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Shift-register link + lamp controller ──────────────
    // Typed pins must match the schematic assignment in `pins`:
    // GPIO4=SER, GPIO5=SRCLK, GPIO6=RCLK.
    let peripherals = Peripherals::take()?;
    let data = PinDriver::output(peripherals.pins.gpio4)?;
    let clock = PinDriver::output(peripherals.pins.gpio5)?;
    let latch = PinDriver::output(peripherals.pins.gpio6)?;
    let bus = BitBangShiftBus::new(data, clock, latch, Ets);

    let tuning = config::Tuning::default();
    let mut lamp = LampController::new(bus, &tuning);
    lamp.start();

    // ── 4. Touch calibration ──────────────────────────────────
    // Seed the baseline before the scan timer exists — the pad must be
    // untouched and no tick may race the unseeded detector.
    let pad = OnboardTouchPad::new(pins::TOUCH_PAD_GPIO, pins::TOUCH_ADC_CHANNEL);
    let mut scanner = TouchScanner::new(pad, &tuning);
    scanner.calibrate();

    let motion = MotionInput::new(pins::MOTION_GPIO);

    // ── 5. Interrupt sources ──────────────────────────────────
    if let Err(e) = drivers::hw_init::init_isr_service() {
        log::error!("ISR service init failed: {} — continuing without motion", e);
    }
    drivers::hw_timer::start_timers();

    info!("System ready. Entering idle loop.");

    // ── 6. Idle loop ──────────────────────────────────────────
    // All work happens in ISR / timer context via the event queue; the
    // main task sleeps between wakes and only dispatches.
    loop {
        power::idle_wait();
        dispatch_pending(&mut lamp, &mut scanner, &motion);
    }
}
