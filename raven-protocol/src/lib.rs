//! Raven LCD Link Protocol
//!
//! This crate defines the messages exchanged between the LCD MCU (console)
//! and the radio/application MCU over the serial link, plus the ASCII
//! encodings used both on the LCD and on the wire.
//!
//! # Protocol Overview
//!
//! Each message is a frame made of a command id and a short payload:
//! ```text
//! ┌─────────┬────────┬─────────────┐
//! │ COMMAND │ LENGTH │ PAYLOAD     │
//! │ 1B      │ 1B     │ 0–32B       │
//! └─────────┴────────┴─────────────┘
//! ```
//!
//! Byte-level framing (sync, escaping, checksum) belongs to the serial
//! transport. This crate only deals with command ids and payload contents.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ascii;
pub mod frame;
pub mod messages;
pub mod units;

pub use ascii::{format_signed_with_unit, format_unsigned, parse_signed_with_unit, SignedText};
pub use frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
pub use messages::{ConsoleMessage, ControllerReport, TEXT_WIDTH};
pub use units::TemperatureUnit;
