//! Events delivered to the menu controller

use raven_protocol::Frame;

/// Inputs driving the console
///
/// Every event carries the time it was taken, from the same clock as the
/// base tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // User input
    /// A menu selection, resolved through the command table
    Command { code: u8, arg: u8, now_ms: u32 },

    // Timer
    /// Base timer tick
    Tick { now_ms: u32 },

    // Serial link
    /// Frame received from the radio MCU
    Frame { frame: Frame, now_ms: u32 },
}
