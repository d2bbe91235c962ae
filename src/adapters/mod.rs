//! Hardware adapters implementing the port traits.
//!
//! ESP-IDF-specific implementations are guarded by cfg attributes inside.

pub mod hardware;
