//! LED drivers, hardware initialisation, and peripheral helpers.

pub mod bitbang;
pub mod hw_init;
pub mod hw_timer;
pub mod shift_register;
