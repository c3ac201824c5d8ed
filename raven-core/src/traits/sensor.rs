//! Temperature sensor trait

use raven_protocol::TemperatureUnit;

/// Trait for the on-board temperature sensor
pub trait TemperatureSensor {
    /// (Re)configure the sensor pins and ADC channel
    ///
    /// Must be called again whenever the JTAG interface is disabled, since
    /// that hands the shared pins back to the port.
    fn init(&mut self);

    /// Read the current temperature, already scaled to `unit`
    fn read(&mut self, unit: TemperatureUnit) -> i16;
}
