//! Shelf CLI library
//!
//! Command implementations live here so integration tests can drive them
//! without spawning the binary.

pub mod commands;
pub mod logging;
pub mod server;
pub mod table;

#[cfg(feature = "tui")]
pub mod tui;
