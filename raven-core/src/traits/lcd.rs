//! Segmented LCD driver trait

use raven_protocol::TemperatureUnit;

/// Digits in the numeric area of the LCD
pub const NUMBER_DIGITS: u8 = 4;

/// Individually addressable LCD symbols used by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Caution triangle (sensor readings may be off)
    Caution,
    /// Raven logo, the status glyph shown after wake
    Raven,
}

impl Symbol {
    /// Unit symbol for a temperature unit
    pub const fn for_unit(unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Celsius => Symbol::Celsius,
            TemperatureUnit::Fahrenheit => Symbol::Fahrenheit,
        }
    }
}

/// How unused leading digits of the numeric area are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NumberPadding {
    Space,
    Zero,
}

/// Single seven-segment digit contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    Digit(u8),
    Minus,
    Blank,
}

/// Trait for the LCD segment driver
///
/// The LCD has a 7-character alphanumeric text area, a 4-digit numeric
/// area and a set of fixed symbols.
pub trait LcdDriver {
    /// Clear the whole display
    fn clear(&mut self);

    /// Show ASCII text in the text area
    fn write_text(&mut self, text: &[u8]);

    /// Turn a symbol on
    fn set_symbol(&mut self, symbol: Symbol);

    /// Turn a symbol off
    fn clear_symbol(&mut self, symbol: Symbol);

    /// Show a signed value in the numeric area
    fn write_number(&mut self, value: i16, padding: NumberPadding);

    /// Show a single glyph at `position` (0 = rightmost digit)
    fn write_digit(&mut self, position: u8, glyph: Glyph);

    /// Blank the numeric area
    fn clear_number(&mut self);

    /// Power the LCD controller down
    fn shutdown(&mut self);

    /// Power the LCD controller back up
    fn reinit(&mut self);
}

/// Helper trait for common console renderings
pub trait LcdExt: LcdDriver {
    /// Fill the numeric area with dashes
    fn show_pending(&mut self) {
        for position in 0..NUMBER_DIGITS {
            self.write_digit(position, Glyph::Minus);
        }
    }

    /// Light exactly the symbol for `unit`
    fn show_unit(&mut self, unit: TemperatureUnit) {
        self.clear_symbol(Symbol::for_unit(unit.other()));
        self.set_symbol(Symbol::for_unit(unit));
    }

    /// Turn a symbol on or off
    fn set_symbol_state(&mut self, symbol: Symbol, on: bool) {
        if on {
            self.set_symbol(symbol);
        } else {
            self.clear_symbol(symbol);
        }
    }
}

// Blanket implementation for all LcdDriver types
impl<T: LcdDriver> LcdExt for T {}
