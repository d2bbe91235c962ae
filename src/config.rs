//! Compile-time tuning parameters.
//!
//! The lamp has no persistence and no runtime reconfiguration surface, so
//! every knob is a constant here.  The [`Tuning`] struct bundles the subset
//! the detection logic consumes, which keeps tests free to explore other
//! operating points without touching the constants.

// ---------------------------------------------------------------------------
// Illumination timeout
// ---------------------------------------------------------------------------

/// Seconds the motion-enabled strips stay lit after presence ends.
pub const TIMEOUT_SEC: u8 = 5;

/// Hold-tick cadence in milliseconds (1 Hz countdown).
pub const HOLD_PERIOD_MS: u32 = 1000;

// ---------------------------------------------------------------------------
// Strip policy
// ---------------------------------------------------------------------------

/// Strips governed by motion at power-up. All eight by default; the window
/// strips can be moved to manual-only via `disable_for_motion`.
pub const MOTION_STRIPS_DEFAULT: u8 = 0xFF;

// ---------------------------------------------------------------------------
// Capacitive touch scanning
// ---------------------------------------------------------------------------

/// Scan-tick cadence in milliseconds (~40 Hz).
pub const SCAN_PERIOD_MS: u32 = 25;

/// Single-shot measurements averaged into one filtered sample.
pub const TOUCH_SAMPLES: u16 = 64;

/// log2 of [`TOUCH_SAMPLES`] — the averaging right-shift.
pub const TOUCH_SAMPLE_SHIFT: u8 = 6;

/// Microseconds the pad is driven high before it is floated for measurement.
pub const CHARGE_DWELL_US: u32 = 50;

/// Counts above baseline that classify a filtered sample as a touch.
pub const TOUCH_THRESHOLD: u16 = 20;

/// Consecutive disagreeing scan ticks required to commit a touch/release.
pub const TOUCH_DEBOUNCE: u8 = 5;

/// Baseline EWMA decay: the sample/baseline difference is right-shifted by
/// this amount before being applied. Larger = slower ambient tracking.
pub const BASELINE_SHIFT: u8 = 7;

/// Filtered samples averaged to seed the baseline at power-up, with the pad
/// guaranteed untouched.
pub const CALIBRATION_SAMPLES: usize = 16;

// ---------------------------------------------------------------------------
// Tuning bundle
// ---------------------------------------------------------------------------

/// Detection parameters consumed by the presence hold and touch pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Seconds of sensor inactivity before motion strips extinguish.
    pub timeout_sec: u8,
    /// Touch classification threshold (counts above baseline).
    pub touch_threshold: u16,
    /// Debounce depth in scan ticks.
    pub touch_debounce: u8,
    /// Baseline EWMA right-shift.
    pub baseline_shift: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            timeout_sec: TIMEOUT_SEC,
            touch_threshold: TOUCH_THRESHOLD,
            touch_debounce: TOUCH_DEBOUNCE,
            baseline_shift: BASELINE_SHIFT,
        }
    }
}
