//! Illumination-hold countdown for the motion sensor.
//!
//! The motion input is edge-triggered: repeated triggers while the line is
//! held low do not re-fire until it has been observed high again.  The 1 Hz
//! hold tick compensates by re-reading the sensor level and pinning the
//! countdown at max while presence persists.
//!
//! ```text
//!          arm() / sensor active
//!   IDLE ────────────────────────▶ HELD
//!                                   │ sensor deasserts
//!                                   ▼
//!                                COUNTING ──▶ countdown hits 0 ──▶ IDLE
//!                                   │ sensor reasserts
//!                                   └────────▶ HELD
//! ```

/// Logical state of the hold timer, derived from the countdown and the
/// last observed sensor level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    /// Sensor active — countdown pinned at max.
    Held,
    /// Sensor inactive, countdown running.
    Counting,
    /// Countdown expired — motion-enabled strips are dark.
    Idle,
}

/// Emitted by [`PresenceHold::tick`] when the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldEvent {
    /// The sensor has read inactive for the full timeout — extinguish the
    /// motion-enabled strips now.
    Expired,
}

pub struct PresenceHold {
    timeout_sec: u8,
    countdown: u8,
    sensor_active: bool,
}

impl PresenceHold {
    pub fn new(timeout_sec: u8) -> Self {
        Self {
            timeout_sec,
            countdown: 0,
            sensor_active: false,
        }
    }

    /// Motion edge observed — re-arm the countdown to the full timeout.
    pub fn arm(&mut self) {
        self.countdown = self.timeout_sec;
    }

    /// Advance by one second.  `sensor_active` is the current level of the
    /// presence input, re-read on every tick.
    pub fn tick(&mut self, sensor_active: bool) -> Option<HoldEvent> {
        self.sensor_active = sensor_active;

        if sensor_active {
            // Continuous re-arm while presence persists.
            self.countdown = self.timeout_sec;
            return None;
        }

        if self.countdown > 0 {
            self.countdown -= 1;
            if self.countdown == 0 {
                return Some(HoldEvent::Expired);
            }
        }

        None
    }

    pub fn state(&self) -> HoldState {
        if self.sensor_active {
            HoldState::Held
        } else if self.countdown > 0 {
            HoldState::Counting
        } else {
            HoldState::Idle
        }
    }

    /// Seconds remaining before the motion strips extinguish.
    pub fn countdown(&self) -> u8 {
        self.countdown
    }
}
