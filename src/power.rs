//! Idle-loop power scheduling.
//!
//! All real work runs in interrupt handlers; the main loop only drains the
//! event queue and goes back to sleep.  On the ESP32-S3 the FreeRTOS idle
//! task executes WFI (and tickless idle when enabled), so yielding the main
//! task for one tick halts the core until the next interrupt while leaving
//! every interrupt source and peripheral live.

/// Block until the next event is plausible, with the core halted.
#[cfg(target_os = "espidf")]
pub fn idle_wait() {
    // SAFETY: vTaskDelay is the canonical FreeRTOS blocking yield; safe to
    // call from the main task at any time.
    unsafe {
        esp_idf_svc::sys::vTaskDelay(1);
    }
}

/// Host-target stand-in: yields the thread so test drivers that pump the
/// event queue from another thread make progress.
#[cfg(not(target_os = "espidf"))]
pub fn idle_wait() {
    std::thread::yield_now();
}
