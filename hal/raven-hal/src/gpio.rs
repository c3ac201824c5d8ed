//! GPIO pin abstractions
//!
//! Only outputs are needed by the console: the activity LED on the
//! board's "nose" is lit while a report is being transmitted.

/// Digital output pin
///
/// Implementations should handle the actual port register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}
