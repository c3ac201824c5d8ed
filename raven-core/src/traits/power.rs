//! Sleep/wake sequencing

/// Low-power sequencer of the LCD MCU
pub trait PowerSequencer {
    /// Gate the clocks of the periodic timer and SPI
    fn suspend_peripherals(&mut self);

    /// Ungate the periodic timer and SPI clocks
    fn resume_peripherals(&mut self);

    /// Halt the processor until an external wake stimulus
    ///
    /// Blocks; returns once the MCU is running again.
    fn enter_low_power(&mut self);

    /// Tell the radio MCU the console is awake again
    fn resume_radio(&mut self);
}
