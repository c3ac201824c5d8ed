//! Board-agnostic console logic for the Raven LCD MCU
//!
//! This crate contains all console behavior that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (LCD, keypad, serial link, power, sensor)
//! - Ping liveness session
//! - Temperature display/report session
//! - JTAG debug mode control with EEPROM persistence
//! - Menu controller dispatching commands, ticks and incoming frames
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This must go first so the macros are visible to the other modules
mod fmt;

pub mod config;
pub mod debug_mode;
pub mod menu;
pub mod session;
pub mod traits;

pub use config::{ConfigError, ConsoleConfig};
pub use debug_mode::DebugModeController;
pub use menu::{Action, CommandTable, DisplayText, Event, MenuController};
pub use session::{PingSession, TemperatureSession};
