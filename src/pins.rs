//! GPIO / peripheral pin assignments for the NookLight main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Shift register (74HC595, 3-wire serial link)
// ---------------------------------------------------------------------------
//
// The three pins below are taken as typed `PinDriver` outputs in `main()`;
// the constants document the schematic assignment.

/// Serial data into the shift register (SER).
pub const SHIFT_DATA_GPIO: i32 = 4;
/// Shift clock (SRCLK) — data sampled on the rising edge.
pub const SHIFT_CLOCK_GPIO: i32 = 5;
/// Storage latch (RCLK) — rising edge moves the shifted byte to the outputs.
pub const SHIFT_LATCH_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Motion sensor (PIR, open-drain output)
// ---------------------------------------------------------------------------

/// Digital input: LOW = presence detected (active-low with pull-up).
/// Edge-debounced by the sensor module itself, not in software.
pub const MOTION_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Capacitive touch pad (bare copper pad on the shelf front)
// ---------------------------------------------------------------------------

/// Sense pad — driven high to charge, floated to measure.
/// ADC1 channel 7 (GPIO 8 on ESP32-S3).
pub const TOUCH_PAD_GPIO: i32 = 8;
/// ADC1 channel for the sense pad.
pub const TOUCH_ADC_CHANNEL: u32 = 7;
