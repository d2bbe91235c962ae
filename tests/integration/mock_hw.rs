//! Mock hardware adapters for integration tests.
//!
//! Records every shift-register transfer and scripts the sense-pad
//! readings so tests can assert on the full output history without
//! touching real GPIO/ADC registers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nooklight::config::TOUCH_SAMPLES;
use nooklight::ports::{PresenceSensor, ShiftBus, TouchPad};

// ── Shift-register bus ────────────────────────────────────────

/// Records every byte latched onto the strips.  Clone the bus before
/// handing it to the controller — the clone shares the transfer log.
#[derive(Clone, Default)]
pub struct MockShiftBus {
    transfers: Rc<RefCell<Vec<u8>>>,
}

#[allow(dead_code)]
impl MockShiftBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every byte transferred so far, oldest first.
    pub fn transfers(&self) -> Vec<u8> {
        self.transfers.borrow().clone()
    }

    pub fn last_transfer(&self) -> Option<u8> {
        self.transfers.borrow().last().copied()
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.borrow().len()
    }
}

impl ShiftBus for MockShiftBus {
    fn write(&mut self, byte: u8) {
        self.transfers.borrow_mut().push(byte);
    }
}

// ── Sense pad ─────────────────────────────────────────────────

/// Scripted sense pad.  Each script entry is one *filtered* sample: the
/// pad returns it for 64 consecutive conversions, then advances.  The
/// last entry repeats once the script is exhausted.
pub struct MockTouchPad {
    script: Vec<u16>,
    shot: usize,
}

#[allow(dead_code)]
impl MockTouchPad {
    pub fn new(script: Vec<u16>) -> Self {
        Self { script, shot: 0 }
    }

    /// Constant reading forever.
    pub fn level(value: u16) -> Self {
        Self::new(vec![value])
    }
}

impl TouchPad for MockTouchPad {
    fn charge(&mut self) {}

    fn float(&mut self) {}

    fn convert(&mut self) -> u16 {
        let idx = self.shot / TOUCH_SAMPLES as usize;
        self.shot += 1;
        *self
            .script
            .get(idx)
            .or_else(|| self.script.last())
            .expect("script must not be empty")
    }
}

// ── Motion sensor ─────────────────────────────────────────────

/// Settable presence level; `is_active` reads through a `Cell` so tests
/// can flip the level while the controller holds a shared reference.
#[derive(Default)]
pub struct MockPresence {
    active: Cell<bool>,
}

#[allow(dead_code)]
impl MockPresence {
    pub fn new(active: bool) -> Self {
        Self {
            active: Cell::new(active),
        }
    }

    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

impl PresenceSensor for MockPresence {
    fn is_active(&self) -> bool {
        self.active.get()
    }
}
