//! Bit-banged 3-wire shift-register bus.
//!
//! Implements [`ShiftBus`] over any `embedded-hal` output pins: `PinDriver`
//! GPIOs on the ESP32-S3, mock pins in host tests.  The 74HC595 samples
//! data on the rising clock edge and moves the shifted byte to its parallel
//! outputs on the rising latch edge.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::ports::ShiftBus;

/// Settle time between pin edges.  The '595 is good for tens of MHz; one
/// microsecond keeps the waveform clean through the ribbon cable.
const SETTLE_US: u32 = 1;

pub struct BitBangShiftBus<D, C, L, T> {
    data: D,
    clock: C,
    latch: L,
    delay: T,
}

impl<D, C, L, T> BitBangShiftBus<D, C, L, T>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    T: DelayNs,
{
    /// Pins are expected to be configured as outputs, idle low.
    pub fn new(data: D, clock: C, latch: L, delay: T) -> Self {
        Self {
            data,
            clock,
            latch,
            delay,
        }
    }
}

impl<D, C, L, T> ShiftBus for BitBangShiftBus<D, C, L, T>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    T: DelayNs,
{
    fn write(&mut self, byte: u8) {
        // GPIO writes on already-configured output pins cannot fail on the
        // supported targets; results are ignored as in `gpio_write()`.
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                let _ = self.data.set_high();
            } else {
                let _ = self.data.set_low();
            }
            self.delay.delay_us(SETTLE_US);
            let _ = self.clock.set_high();
            self.delay.delay_us(SETTLE_US);
            let _ = self.clock.set_low();
        }

        // Rising latch edge exposes the byte on the parallel outputs.
        let _ = self.latch.set_high();
        self.delay.delay_us(SETTLE_US);
        let _ = self.latch.set_low();

        // Park the link low to minimise idle draw.
        let _ = self.data.set_low();
    }
}
