//! Scoped critical sections for shared LED state.
//!
//! The LED output byte is reached from three handler contexts (motion edge,
//! hold tick, scan tick).  On a single core they cannot run simultaneously,
//! but priority configuration can in principle let one preempt another, so
//! every read-modify-write of the byte runs inside a scoped
//! interrupt-disable section rather than relying on single-instruction
//! atomicity.

/// Run `f` with interrupts masked.
#[cfg(target_os = "espidf")]
pub fn with<R>(f: impl FnOnce() -> R) -> R {
    esp_idf_hal::interrupt::free(f)
}

/// Host-target implementation backed by the `critical-section` crate's
/// std mutex (provided by the dev-dependency feature in test builds).
#[cfg(not(target_os = "espidf"))]
pub fn with<R>(f: impl FnOnce() -> R) -> R {
    critical_section::with(|_| f())
}
