//! ESP-IDF adapters for the sense-pad and motion-input ports.
//!
//! The shift-register bus needs no adapter of its own — `main()` wires
//! typed `PinDriver` outputs straight into
//! [`BitBangShiftBus`](crate::drivers::bitbang::BitBangShiftBus).

#[cfg(target_os = "espidf")]
use crate::config;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::ports::{PresenceSensor, TouchPad};

/// Charge/float/measure cycle over a bare copper pad wired to an ADC1
/// channel.
///
/// The S3's ADC front-end is muxed onto the channel per conversion, so
/// "disconnect the front-end" is implicit: between conversions the pad
/// sees only the GPIO driver.  The blocking wait for the conversion
/// result lives inside the IDF one-shot read.
#[cfg(target_os = "espidf")]
pub struct OnboardTouchPad {
    gpio: i32,
    channel: u32,
}

#[cfg(target_os = "espidf")]
impl OnboardTouchPad {
    pub fn new(gpio: i32, channel: u32) -> Self {
        Self { gpio, channel }
    }
}

#[cfg(target_os = "espidf")]
impl TouchPad for OnboardTouchPad {
    fn charge(&mut self) {
        hw_init::pad_drive_high(self.gpio);
        // SAFETY: ets_delay_us is a busy-wait on the cycle counter; safe
        // from any context.
        unsafe {
            esp_idf_svc::sys::ets_delay_us(config::CHARGE_DWELL_US);
        }
    }

    fn float(&mut self) {
        hw_init::pad_float(self.gpio);
    }

    fn convert(&mut self) -> u16 {
        hw_init::adc1_read(self.channel)
    }
}

/// Level reads of the motion input (active-low with pull-up).
#[cfg(target_os = "espidf")]
pub struct MotionInput {
    gpio: i32,
}

#[cfg(target_os = "espidf")]
impl MotionInput {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }
}

#[cfg(target_os = "espidf")]
impl PresenceSensor for MotionInput {
    fn is_active(&self) -> bool {
        // LOW = presence detected.
        !hw_init::gpio_read(self.gpio)
    }
}
