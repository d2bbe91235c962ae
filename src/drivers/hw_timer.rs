//! Hardware timer module using ESP-IDF's esp_timer API.
//!
//! Creates the two periodic tick sources and pushes their events into the
//! lock-free SPSC queue:
//!
//! - ~40 Hz scan timer → [`Event::ScanTick`]
//! - 1 Hz hold timer → [`Event::HoldTick`]
//!
//! Timer callbacks execute in the ESP timer task context (not ISR), so
//! they can safely call push_event().

#[cfg(target_os = "espidf")]
use crate::events::{push_event, Event};

#[cfg(target_os = "espidf")]
use crate::config;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
static mut SCAN_TIMER: esp_timer_handle_t = core::ptr::null_mut();
#[cfg(target_os = "espidf")]
static mut HOLD_TIMER: esp_timer_handle_t = core::ptr::null_mut();

/// SAFETY: SCAN_TIMER is written once in `start_timers()` before any timer
/// callbacks fire.  Only called from the single main task.
#[cfg(target_os = "espidf")]
unsafe fn scan_timer() -> esp_timer_handle_t {
    unsafe { SCAN_TIMER }
}

/// SAFETY: Same invariants as `scan_timer()`.
#[cfg(target_os = "espidf")]
unsafe fn hold_timer() -> esp_timer_handle_t {
    unsafe { HOLD_TIMER }
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn scan_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::ScanTick);
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn hold_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::HoldTick);
}

/// Start the periodic tick timers.  Call after touch calibration — the
/// scan pipeline must not run against an unseeded baseline.
#[cfg(target_os = "espidf")]
pub fn start_timers() {
    // SAFETY: SCAN_TIMER and HOLD_TIMER are written here once at boot from
    // the single main-task context before any timer callbacks fire.  The
    // callbacks themselves only call push_event(), which is ISR-safe.
    unsafe {
        let scan_args = esp_timer_create_args_t {
            callback: Some(scan_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"scan\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&scan_args, &raw mut SCAN_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: scan timer create failed (rc={}) — continuing without touch", ret);
            return;
        }
        let ret = esp_timer_start_periodic(SCAN_TIMER, u64::from(config::SCAN_PERIOD_MS) * 1000);
        if ret != ESP_OK {
            log::error!("hw_timer: scan timer start failed (rc={})", ret);
            return;
        }

        let hold_args = esp_timer_create_args_t {
            callback: Some(hold_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"hold\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&hold_args, &raw mut HOLD_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: hold timer create failed (rc={}) — continuing without timeout", ret);
            return;
        }
        let ret = esp_timer_start_periodic(HOLD_TIMER, u64::from(config::HOLD_PERIOD_MS) * 1000);
        if ret != ESP_OK {
            log::error!("hw_timer: hold timer start failed (rc={})", ret);
            return;
        }

        info!("hw_timer: scan@40Hz + hold@1Hz started");
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn start_timers() {
    log::info!("hw_timer(sim): timers not started (ticks driven by the test harness)");
}

/// Stop both tick timers.
#[cfg(target_os = "espidf")]
pub fn stop_timers() {
    // SAFETY: handles are valid if start_timers() succeeded; null-check
    // prevents stopping a timer that was never created.
    unsafe {
        let st = scan_timer();
        if !st.is_null() {
            esp_timer_stop(st);
        }
        let ht = hold_timer();
        if !ht.is_null() {
            esp_timer_stop(ht);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn stop_timers() {}
