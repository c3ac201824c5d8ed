//! Protocol sessions
//!
//! Each session owns its own protocol state and its own [`Interval`], so
//! the ping and temperature sessions can run off the one hardware timer
//! without either assuming it owns it.

pub mod interval;
pub mod ping;
pub mod temperature;

pub use interval::Interval;
pub use ping::{PingReply, PingSent, PingSession, PingState};
pub use temperature::{TemperatureDue, TemperatureSession};
