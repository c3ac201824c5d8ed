//! Keypad driver trait
//!
//! The joystick is sampled by the ADC; scanning and debouncing happen in
//! the driver. The console only needs to know whether a key is held and
//! whether a debounced press is latched.

/// Joystick directions and the center press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

/// Trait for the keypad driver
pub trait Keypad {
    /// Stop ADC sampling of the keypad
    fn shutdown(&mut self);

    /// Restart ADC sampling of the keypad
    fn reinit(&mut self);

    /// Key currently held down, if any
    fn current_state(&mut self) -> Option<Key>;

    /// Whether a debounced press is latched
    fn pending_event(&self) -> bool;

    /// Take the latched press
    fn take_event(&mut self) -> Option<Key>;
}
