//! JTAG debug mode control
//!
//! The temperature sensor shares its pins with the JTAG interface, so
//! normal operation requires JTAG to be disabled. The choice survives
//! power cycles in one EEPROM cell with an inverted encoding: an erased
//! cell (`0xFF`) means JTAG disabled, [`JTAG_ENABLED_MARK`] means enabled.
//! A fresh device therefore boots with the sensor usable.

use raven_hal::{ByteStore, ControlRegister, CriticalSection, ERASED_BYTE, JTD_BIT};

use crate::traits::TemperatureSensor;

/// EEPROM value recording that the JTAG interface is enabled
pub const JTAG_ENABLED_MARK: u8 = 0x01;

/// Decode the persisted byte into "JTAG enabled"
pub const fn decode(stored: u8) -> bool {
    stored != ERASED_BYTE
}

/// Encode "JTAG enabled" into the persisted byte
pub const fn encode(enabled: bool) -> u8 {
    if enabled {
        JTAG_ENABLED_MARK
    } else {
        ERASED_BYTE
    }
}

/// Applies and persists the JTAG debug interface setting
#[derive(Debug, Clone)]
pub struct DebugModeController {
    enabled: bool,
    address: u16,
}

impl DebugModeController {
    /// Create a controller persisting to `address`
    pub fn new(address: u16) -> Self {
        Self {
            enabled: false,
            address,
        }
    }

    /// Enable or disable the JTAG interface
    ///
    /// Runs with interrupts masked so no handler sees the register or the
    /// sensor half-configured. JTD is written twice: the hardware only
    /// takes the change when two identical writes land within four cycles.
    pub fn set<M, S, E>(&mut self, enabled: bool, mcu: &mut M, sensor: &mut S, store: &mut E)
    where
        M: ControlRegister,
        S: TemperatureSensor,
        E: ByteStore,
    {
        let _cs = CriticalSection::enter();

        let value = if enabled {
            mcu.read() & !JTD_BIT
        } else {
            mcu.read() | JTD_BIT
        };
        mcu.write(value);
        mcu.write(value);

        if !enabled {
            // JTD redefines the pins the sensor needs
            sensor.init();
        }

        store.write_byte(self.address, encode(enabled));
        self.enabled = enabled;

        info!("debug: jtag {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Re-apply the persisted setting; called once at startup
    pub fn restore_from_storage<M, S, E>(&mut self, mcu: &mut M, sensor: &mut S, store: &mut E)
    where
        M: ControlRegister,
        S: TemperatureSensor,
        E: ByteStore,
    {
        let enabled = decode(store.read_byte(self.address));
        self.set(enabled, mcu, sensor, store);
    }

    /// Whether the JTAG interface was last set enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// EEPROM address of the persisted setting
    pub fn address(&self) -> u16 {
        self.address
    }
}
