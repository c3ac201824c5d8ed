//! EEPROM storage abstractions
//!
//! The LCD MCU keeps a handful of settings in its internal EEPROM. Cells
//! are addressed individually and read back as `0xFF` when erased.

/// Value of an erased (never written) EEPROM cell
pub const ERASED_BYTE: u8 = 0xFF;

/// Byte-addressed non-volatile storage
///
/// Reads and writes are assumed to always succeed on this class of
/// device. Implementations are responsible for waiting out any pending
/// write cycle before starting a new access.
pub trait ByteStore {
    /// Read the byte stored at `address`
    fn read_byte(&mut self, address: u16) -> u8;

    /// Write `value` to `address`
    fn write_byte(&mut self, address: u16, value: u8);

    /// Check whether the cell at `address` is still erased
    fn is_erased(&mut self, address: u16) -> bool {
        self.read_byte(address) == ERASED_BYTE
    }
}
