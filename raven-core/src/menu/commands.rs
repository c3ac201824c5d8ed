//! Command table
//!
//! Menu entries identify their action with a one-byte command code and an
//! optional one-byte argument. Which code maps to which action is data,
//! so boards with a different menu layout only swap the table.

use raven_protocol::TemperatureUnit;

// ============================================================================
// Command codes
// ============================================================================

pub const CMD_START_PING: u8 = 0x01;
pub const CMD_STOP_PING: u8 = 0x02;
pub const CMD_READ_TEMPERATURE: u8 = 0x03;
pub const CMD_CLEAR_TEMPERATURE: u8 = 0x04;
pub const CMD_PREPARE_TEMPERATURE: u8 = 0x05;
pub const CMD_STOP_TEMPERATURE: u8 = 0x06;
pub const CMD_SET_DEBUG_MODE: u8 = 0x07;
pub const CMD_SLEEP: u8 = 0x08;

/// Action without its argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionKind {
    StartPing,
    StopPing,
    ReadTemperature,
    ClearTemperature,
    PrepareTemperature,
    StopTemperature,
    SetDebugMode,
    Sleep,
}

/// Fully resolved action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Start a ping session
    StartPing,
    /// Stop the ping session
    StopPing,
    /// Show the temperature once in the given unit
    ReadTemperature(TemperatureUnit),
    /// Remove the temperature from the display
    ClearTemperature,
    /// Report the temperature once, or on every report interval
    PrepareTemperature { send_once: bool },
    /// Stop temperature auto-reporting
    StopTemperature,
    /// Enable or disable the JTAG debug interface
    SetDebugMode { jtag_enabled: bool },
    /// Sleep, then restore the current text on wake
    Sleep,
}

impl ActionKind {
    /// Combine with the command argument
    pub const fn with_arg(self, arg: u8) -> Action {
        match self {
            ActionKind::StartPing => Action::StartPing,
            ActionKind::StopPing => Action::StopPing,
            ActionKind::ReadTemperature => Action::ReadTemperature(if arg != 0 {
                TemperatureUnit::Celsius
            } else {
                TemperatureUnit::Fahrenheit
            }),
            ActionKind::ClearTemperature => Action::ClearTemperature,
            ActionKind::PrepareTemperature => Action::PrepareTemperature {
                send_once: arg != 0,
            },
            ActionKind::StopTemperature => Action::StopTemperature,
            // Nonzero selects normal operation, i.e. JTAG off
            ActionKind::SetDebugMode => Action::SetDebugMode {
                jtag_enabled: arg == 0,
            },
            ActionKind::Sleep => Action::Sleep,
        }
    }
}

impl Action {
    /// Argument-free kind of this action
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::StartPing => ActionKind::StartPing,
            Action::StopPing => ActionKind::StopPing,
            Action::ReadTemperature(_) => ActionKind::ReadTemperature,
            Action::ClearTemperature => ActionKind::ClearTemperature,
            Action::PrepareTemperature { .. } => ActionKind::PrepareTemperature,
            Action::StopTemperature => ActionKind::StopTemperature,
            Action::SetDebugMode { .. } => ActionKind::SetDebugMode,
            Action::Sleep => ActionKind::Sleep,
        }
    }
}

/// One command code to action binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandBinding {
    pub code: u8,
    pub kind: ActionKind,
}

impl CommandBinding {
    /// Create a new binding
    pub const fn new(code: u8, kind: ActionKind) -> Self {
        Self { code, kind }
    }
}

/// Bindings of the stock Raven menu
pub const DEFAULT_BINDINGS: [CommandBinding; 8] = [
    CommandBinding::new(CMD_START_PING, ActionKind::StartPing),
    CommandBinding::new(CMD_STOP_PING, ActionKind::StopPing),
    CommandBinding::new(CMD_READ_TEMPERATURE, ActionKind::ReadTemperature),
    CommandBinding::new(CMD_CLEAR_TEMPERATURE, ActionKind::ClearTemperature),
    CommandBinding::new(CMD_PREPARE_TEMPERATURE, ActionKind::PrepareTemperature),
    CommandBinding::new(CMD_STOP_TEMPERATURE, ActionKind::StopTemperature),
    CommandBinding::new(CMD_SET_DEBUG_MODE, ActionKind::SetDebugMode),
    CommandBinding::new(CMD_SLEEP, ActionKind::Sleep),
];

/// Lookup table from command code to action
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    bindings: &'static [CommandBinding],
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new(&DEFAULT_BINDINGS)
    }
}

impl CommandTable {
    /// Create a table over `bindings`; the first match for a code wins
    pub const fn new(bindings: &'static [CommandBinding]) -> Self {
        Self { bindings }
    }

    /// Resolve a command code and argument into an action
    pub fn resolve(&self, code: u8, arg: u8) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| binding.code == code)
            .map(|binding| binding.kind.with_arg(arg))
    }

    /// All bindings
    pub fn bindings(&self) -> &'static [CommandBinding] {
        self.bindings
    }
}
