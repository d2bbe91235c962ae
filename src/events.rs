//! Interrupt-driven event system.
//!
//! Events are produced by:
//! - The motion GPIO ISR (falling edge on the presence input)
//! - Timer callbacks (1 Hz hold tick, ~40 Hz touch scan tick)
//!
//! Events are consumed by the idle loop, which drains them in FIFO order
//! and dispatches to the lamp controller.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Motion ISR  │────▶│              │     │              │
//! │ Hold timer  │────▶│  Event Queue │────▶│  Idle Loop   │
//! │ Scan timer  │────▶│  (lock-free) │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

/// Maximum number of pending events.
/// Power of 2 for efficient ring buffer modulo.
const EVENT_QUEUE_CAP: usize = 16;

/// System event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    /// Falling edge on the motion input — presence just detected.
    MotionEdge = 0,
    /// 1 Hz illumination-countdown tick.
    HoldTick = 10,
    /// ~40 Hz capacitive touch scan tick.
    ScanTick = 20,
}

// ── Lock-free SPSC ring buffer ────────────────────────────────
//
// ISRs and timer callbacks write (produce), the idle loop reads
// (consume).  Uses atomic head/tail indices; the buffer lives in a
// static so ISR callbacks can reach it.

static EVENT_HEAD: AtomicU8 = AtomicU8::new(0);
static EVENT_TAIL: AtomicU8 = AtomicU8::new(0);
// SAFETY: EVENT_BUFFER slots are written only by push_event (producer
// side) and read only by pop_event (consumer side); the Acquire/Release
// pairs on EVENT_HEAD/EVENT_TAIL order the slot accesses between them.
static mut EVENT_BUFFER: [u8; EVENT_QUEUE_CAP] = [0; EVENT_QUEUE_CAP];

/// Push an event into the queue.
/// Safe to call from ISR context (lock-free).
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: Event) -> bool {
    let head = EVENT_HEAD.load(Ordering::Relaxed);
    let tail = EVENT_TAIL.load(Ordering::Acquire);
    let next_head = (head + 1) % EVENT_QUEUE_CAP as u8;

    if next_head == tail {
        return false; // Queue full — drop event.
    }

    // SAFETY: slot `head` is owned by the producer until EVENT_HEAD is
    // advanced below.
    unsafe {
        EVENT_BUFFER[head as usize] = event as u8;
    }

    EVENT_HEAD.store(next_head, Ordering::Release);
    true
}

/// Pop the next event from the queue.
/// Called from the idle loop (single consumer).
/// Returns `None` if the queue is empty.
pub fn pop_event() -> Option<Event> {
    let tail = EVENT_TAIL.load(Ordering::Relaxed);
    let head = EVENT_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    // SAFETY: slot `tail` was published by the matching Release store in
    // push_event.
    let raw = unsafe { EVENT_BUFFER[tail as usize] };
    EVENT_TAIL.store((tail + 1) % EVENT_QUEUE_CAP as u8, Ordering::Release);

    event_from_u8(raw)
}

/// Drain all pending events into a callback, FIFO order.
pub fn drain_events(mut handler: impl FnMut(Event)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

/// Check if the event queue is empty.
pub fn queue_is_empty() -> bool {
    let tail = EVENT_TAIL.load(Ordering::Relaxed);
    let head = EVENT_HEAD.load(Ordering::Acquire);
    tail == head
}

/// Number of pending events.
pub fn queue_len() -> usize {
    let head = EVENT_HEAD.load(Ordering::Relaxed) as usize;
    let tail = EVENT_TAIL.load(Ordering::Relaxed) as usize;
    (head + EVENT_QUEUE_CAP - tail) % EVENT_QUEUE_CAP
}

// ── Internal ──────────────────────────────────────────────────

fn event_from_u8(raw: u8) -> Option<Event> {
    match raw {
        0 => Some(Event::MotionEdge),
        10 => Some(Event::HoldTick),
        20 => Some(Event::ScanTick),
        _ => None,
    }
}

/// Serialises tests that touch the process-wide queue (cargo's test
/// harness runs them on multiple threads).
#[cfg(test)]
pub(crate) fn test_queue_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
