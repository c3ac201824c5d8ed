//! Board bundle
//!
//! Groups every collaborator type so the menu controller takes a single
//! type parameter.

use raven_hal::{ByteStore, ControlRegister, OutputPin};

use super::{FrameSink, Keypad, LcdDriver, PowerSequencer, TemperatureSensor};

/// Collaborator types of a concrete board
pub trait Board {
    type Lcd: LcdDriver;
    type Keypad: Keypad;
    type Link: FrameSink;
    type Power: PowerSequencer;
    type Sensor: TemperatureSensor;
    type Store: ByteStore;
    type Mcu: ControlRegister;
    type Led: OutputPin;
}

/// Owned collaborator instances of a board
pub struct Peripherals<B: Board> {
    pub lcd: B::Lcd,
    pub keypad: B::Keypad,
    pub link: B::Link,
    pub power: B::Power,
    pub sensor: B::Sensor,
    pub store: B::Store,
    pub mcu: B::Mcu,
    /// Activity LED
    pub led: B::Led,
}
