//! Shift-register LED driver.
//!
//! Owns the 8-bit LED output byte (bit *i* = strip *i* illuminated) and is
//! the only code allowed to mutate it.  Every derived operation computes the
//! new byte and pushes it through the [`ShiftBus`] in one go, so the outputs
//! never show a partially updated value — the whole byte changes together at
//! the latch pulse.
//!
//! Each read-modify-write runs inside a [`critical`](crate::critical)
//! section: the motion edge, hold tick, and scan tick handlers all reach
//! this driver, and the section keeps the cached byte and the latched
//! outputs consistent if one handler preempts another.

use crate::critical;
use crate::ports::ShiftBus;

pub struct ShiftRegisterDriver<B: ShiftBus> {
    bus: B,
    state: u8,
}

impl<B: ShiftBus> ShiftRegisterDriver<B> {
    /// All strips off.  Does not touch the hardware until the first
    /// transfer — call [`assign`](Self::assign)`(0)` at startup to force
    /// the outputs into a known state.
    pub fn new(bus: B) -> Self {
        Self { bus, state: 0 }
    }

    /// Replace the whole output byte and latch it.
    pub fn transfer(&mut self, byte: u8) {
        critical::with(|| {
            self.state = byte;
            self.bus.write(self.state);
        });
    }

    /// Illuminate the strips in `mask`, leaving the rest unchanged.
    pub fn set_bits(&mut self, mask: u8) {
        critical::with(|| {
            self.state |= mask;
            self.bus.write(self.state);
        });
    }

    /// Extinguish the strips in `mask`, leaving the rest unchanged.
    pub fn clear_bits(&mut self, mask: u8) {
        critical::with(|| {
            self.state &= !mask;
            self.bus.write(self.state);
        });
    }

    /// Invert the strips in `mask`.
    pub fn toggle_bits(&mut self, mask: u8) {
        critical::with(|| {
            self.state ^= mask;
            self.bus.write(self.state);
        });
    }

    /// Replace the whole output byte (alias of [`transfer`](Self::transfer)
    /// kept for call-site readability).
    pub fn assign(&mut self, mask: u8) {
        self.transfer(mask);
    }

    /// The byte currently latched on the outputs.
    pub fn state(&self) -> u8 {
        self.state
    }
}
