//! Temperature units

/// Unit a temperature is read, shown and reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// ASCII letter used after the value on the wire
    pub const fn letter(self) -> u8 {
        match self {
            TemperatureUnit::Celsius => b'C',
            TemperatureUnit::Fahrenheit => b'F',
        }
    }

    /// Parse a unit from its ASCII letter
    pub fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'C' => Some(TemperatureUnit::Celsius),
            b'F' => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }

    /// The other unit
    pub const fn other(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}
