//! MCU control register
//!
//! The control register carries the JTAG-disable (JTD) bit. Setting it
//! hands the JTAG pins back to the port, which the temperature sensor
//! uses. The hardware only accepts a change of JTD when the same value is
//! written twice within four clock cycles.

/// JTAG interface disable bit in the MCU control register
pub const JTD_BIT: u8 = 1 << 7;

/// Access to the MCU control register
pub trait ControlRegister {
    /// Read the current register value
    fn read(&self) -> u8;

    /// Write a new register value
    fn write(&mut self, value: u8);

    /// Check whether the JTAG interface is currently disabled
    fn jtag_disabled(&self) -> bool {
        self.read() & JTD_BIT != 0
    }
}
