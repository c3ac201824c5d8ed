//! Collaborator traits
//!
//! These traits define the interface between the console logic and the
//! drivers that own the LCD, keypad, serial link, power sequencing and
//! temperature sensor. All calls are fire-and-forget: the drivers are
//! assumed correct and never report failure to the console.

pub mod board;
pub mod keypad;
pub mod lcd;
pub mod link;
pub mod power;
pub mod sensor;

pub use board::{Board, Peripherals};
pub use keypad::{Key, Keypad};
pub use lcd::{Glyph, LcdDriver, LcdExt, NumberPadding, Symbol, NUMBER_DIGITS};
pub use link::FrameSink;
pub use power::PowerSequencer;
pub use sensor::TemperatureSensor;
