//! Raven Hardware Abstraction Layer
//!
//! This crate defines the chip-level traits the console logic needs from
//! the LCD microcontroller. A board crate implements them on top of the
//! real registers; host tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  raven-core (sessions, menu controller) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  raven-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          board / register implementation
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (activity LED)
//! - [`eeprom::ByteStore`] - Byte-addressed non-volatile storage
//! - [`irq::CriticalSection`] - Scoped interrupt masking over `critical-section`
//! - [`mcu::ControlRegister`] - MCU control register holding the JTD bit

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod gpio;
pub mod irq;
pub mod mcu;

// Re-export key traits at crate root for convenience
pub use eeprom::{ByteStore, ERASED_BYTE};
pub use gpio::OutputPin;
pub use irq::CriticalSection;
pub use mcu::{ControlRegister, JTD_BIT};
