//! Touch classification, debouncing, and adaptive baseline tracking.
//!
//! Pure logic over filtered samples — no hardware access, fully exercised
//! on the host.  One [`update`](TouchDetector::update) call per scan tick:
//!
//! 1. **Classify**: tentative touch when the sample sits at least
//!    `touch_threshold` counts above the baseline.
//! 2. **Debounce**: the committed state flips only after `touch_debounce`
//!    consecutive disagreeing ticks; any agreeing tick resets the counter,
//!    so no partial credit accumulates across alternating ticks.
//! 3. **Adapt**: while the committed state is untouched, the baseline is
//!    nudged toward the sample by `diff >> baseline_shift` — a slow
//!    first-order IIR that tracks ambient drift (temperature, humidity)
//!    without being dragged upward by a touch in progress.

use crate::config::Tuning;

/// A committed change of the touch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEdge {
    Pressed,
    Released,
}

pub struct TouchDetector {
    baseline: u16,
    touched: bool,
    disagree: u8,
    threshold: u16,
    debounce: u8,
    baseline_shift: u8,
}

impl TouchDetector {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            baseline: 0,
            touched: false,
            disagree: 0,
            threshold: tuning.touch_threshold,
            debounce: tuning.touch_debounce,
            baseline_shift: tuning.baseline_shift,
        }
    }

    /// Seed the baseline from startup calibration (pad untouched).
    pub fn seed_baseline(&mut self, baseline: u16) {
        self.baseline = baseline;
    }

    pub fn baseline(&self) -> u16 {
        self.baseline
    }

    /// The committed (debounced) touch state.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Feed one filtered sample; returns a committed edge, if any.
    pub fn update(&mut self, sample: u16) -> Option<TouchEdge> {
        let tentative =
            sample > self.baseline && sample - self.baseline >= self.threshold;

        let mut edge = None;
        if tentative != self.touched {
            self.disagree += 1;
            if self.disagree >= self.debounce {
                self.touched = tentative;
                self.disagree = 0;
                edge = Some(if tentative {
                    TouchEdge::Pressed
                } else {
                    TouchEdge::Released
                });
            }
        } else {
            self.disagree = 0;
        }

        // Baseline adapts only against the committed state: frozen for the
        // whole confirmed touch, live again the tick a release commits.
        if !self.touched {
            if sample > self.baseline {
                self.baseline += (sample - self.baseline) >> self.baseline_shift;
            } else {
                self.baseline -= (self.baseline - sample) >> self.baseline_shift;
            }
        }

        edge
    }
}
