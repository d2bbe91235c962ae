//! Port traits — the hexagonal boundary between lamp logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LampController / TouchScanner (domain)
//! ```
//!
//! Production adapters talk to real peripherals and busy-wait on hardware
//! ready flags; test adapters return programmed values immediately.  That
//! keeps the known hang risk (a peripheral that never signals ready) at the
//! adapter boundary instead of buried in the domain logic.

// ───────────────────────────────────────────────────────────────
// Shift-output bus (domain → LED strips)
// ───────────────────────────────────────────────────────────────

/// 3-wire serial link to the serial-to-parallel shift register.
pub trait ShiftBus {
    /// Push `byte` MSB-first, pulse the storage latch so all eight outputs
    /// change together, then power the link down until the next write.
    ///
    /// Blocking: hardware-backed implementations busy-wait on the
    /// transfer-complete flag with no timeout.  A peripheral that never
    /// asserts ready hangs the caller — documented limitation, not handled.
    fn write(&mut self, byte: u8);
}

// ───────────────────────────────────────────────────────────────
// Capacitive sense pad (domain → analog front-end)
// ───────────────────────────────────────────────────────────────

/// One charge/float/measure cycle of the sense pad.
///
/// A touching finger raises pad capacitance, so more residual charge
/// survives the float interval and the conversion reads *above* baseline.
pub trait TouchPad {
    /// Disconnect the analog front-end and drive the pad high for the
    /// charge dwell.
    fn charge(&mut self);

    /// Switch the pad to a floating input and reconnect the front-end.
    fn float(&mut self);

    /// Start a conversion, busy-wait for completion, and return the result.
    /// Reading clears the ready flag as a side effect.
    fn convert(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Presence sensor level (domain ← motion input)
// ───────────────────────────────────────────────────────────────

/// Level read of the motion input, used by the 1 Hz hold tick to keep
/// re-arming the countdown while presence persists.  Edge detection is
/// separate — the motion ISR pushes [`Event::MotionEdge`](crate::events::Event).
pub trait PresenceSensor {
    /// `true` while the sensor currently reports presence.
    fn is_active(&self) -> bool;
}
