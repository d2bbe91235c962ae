//! Capacitive touch scanning pipeline.
//!
//! [`TouchScanner`] runs once per ~40 Hz scan tick: it takes 64 single-shot
//! charge/float/measure cycles through the [`TouchPad`] port, averages them
//! into one filtered sample, and feeds the sample to the
//! [`TouchDetector`](detector::TouchDetector) for classification,
//! debouncing, and baseline adaptation.
//!
//! The 64-shot average plus each shot's charge dwell is blocking work
//! inside the scan handler; `config::tests::scan_tick_work_fits_in_scan_period`
//! pins the budget.

pub mod detector;

use heapless::HistoryBuffer;
use log::info;

use crate::config::{self, Tuning};
use crate::ports::TouchPad;
use detector::{TouchDetector, TouchEdge};

pub struct TouchScanner<P: TouchPad> {
    pad: P,
    detector: TouchDetector,
    last_sample: u16,
}

impl<P: TouchPad> TouchScanner<P> {
    /// The baseline starts unseeded — run [`calibrate`](Self::calibrate)
    /// with the pad untouched before enabling periodic scanning.
    pub fn new(pad: P, tuning: &Tuning) -> Self {
        Self {
            pad,
            detector: TouchDetector::new(tuning),
            last_sample: 0,
        }
    }

    /// One filtered sample: 64 single-shot measurements, averaged by
    /// right-shift.
    fn sample(&mut self) -> u16 {
        let mut acc: u32 = 0;
        for _ in 0..config::TOUCH_SAMPLES {
            self.pad.charge();
            self.pad.float();
            acc += u32::from(self.pad.convert());
        }
        (acc >> config::TOUCH_SAMPLE_SHIFT) as u16
    }

    /// Seed the baseline from a window of filtered samples taken with the
    /// pad guaranteed untouched.  Call once at startup, before the scan
    /// timer starts.
    pub fn calibrate(&mut self) {
        let mut window: HistoryBuffer<u16, { config::CALIBRATION_SAMPLES }> =
            HistoryBuffer::new();
        for _ in 0..config::CALIBRATION_SAMPLES {
            window.write(self.sample());
        }

        let sum: u32 = window.oldest_ordered().map(|&s| u32::from(s)).sum();
        let baseline = (sum / window.len() as u32) as u16;
        self.detector.seed_baseline(baseline);
        info!("touch: calibrated, baseline={}", baseline);
    }

    /// Run one scan tick; returns a committed touch edge, if any.
    pub fn scan_tick(&mut self) -> Option<TouchEdge> {
        let sample = self.sample();
        self.last_sample = sample;
        self.detector.update(sample)
    }

    /// Latest filtered sample (diagnostics).
    pub fn last_sample(&self) -> u16 {
        self.last_sample
    }

    pub fn baseline(&self) -> u16 {
        self.detector.baseline()
    }

    /// The committed (debounced) touch state.
    pub fn is_touched(&self) -> bool {
        self.detector.touched()
    }
}
