//! Console configuration
//!
//! Periods are counted in base timer ticks. On the Raven the base tick is
//! the one second Timer1 compare interrupt.

use heapless::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// EEPROM cell holding the JTAG debug mode setting
pub const EEPROM_DEBUG_ADDR: u16 = 0x00;

/// Text shown in the LCD text area right after waking from sleep
pub const DEFAULT_WAKE_BANNER: &str = "WAKE---";

/// Maximum wake banner length (the LCD text area width)
pub const MAX_BANNER_LEN: usize = 7;

/// Largest encoded [`ConsoleConfig`]
pub const MAX_CONFIG_SIZE: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Encoding failed (buffer too small)
    Serialize,
    /// Decoding failed
    Deserialize,
    /// A value is out of range
    Invalid,
}

/// Console timing and persistence settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsoleConfig {
    /// Base ticks between ping requests
    pub ping_interval_ticks: u16,
    /// Base ticks between temperature auto-reports
    pub report_interval_ticks: u16,
    /// Base ticks between refreshes of a displayed temperature
    pub display_refresh_ticks: u16,
    /// EEPROM address of the debug mode cell
    pub debug_eeprom_addr: u16,
    /// Text shown on wake before the previous text is restored
    pub wake_banner: String<MAX_BANNER_LEN>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let mut wake_banner = String::new();
        // Fits: the default banner is exactly MAX_BANNER_LEN long
        let _ = wake_banner.push_str(DEFAULT_WAKE_BANNER);

        Self {
            ping_interval_ticks: 1,
            report_interval_ticks: 1,
            display_refresh_ticks: 1,
            debug_eeprom_addr: EEPROM_DEBUG_ADDR,
            wake_banner,
        }
    }
}

impl ConsoleConfig {
    /// Check that every period is nonzero and the banner is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ping_interval_ticks == 0
            || self.report_interval_ticks == 0
            || self.display_refresh_ticks == 0
        {
            return Err(ConfigError::Invalid);
        }
        if self.wake_banner.is_empty() {
            return Err(ConfigError::Invalid);
        }
        Ok(())
    }

    /// Encode into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: ConsoleConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}
