//! Menu dispatch
//!
//! Resolves user commands, timer ticks and incoming frames into calls on
//! the sessions and the debug mode controller.

pub mod commands;
pub mod controller;
pub mod display_text;
pub mod events;

pub use commands::{Action, ActionKind, CommandBinding, CommandTable, DEFAULT_BINDINGS};
pub use controller::MenuController;
pub use display_text::DisplayText;
pub use events::Event;
