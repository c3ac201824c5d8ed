//! Frame container for the serial link.
//!
//! A frame is a command identifier plus up to [`MAX_PAYLOAD_SIZE`] payload
//! bytes. The transport adds and strips the byte-level framing.

use heapless::Vec;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// Errors that can occur while building or interpreting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Payload does not match what the command requires
    InvalidFrame,
    /// Command id is not one this side understands
    UnknownCommand,
}

/// A received or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Command identifier
    pub command: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given command and payload
    pub fn new(command: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { command, payload })
    }

    /// Create a frame with no payload
    pub fn empty(command: u8) -> Self {
        Self {
            command,
            payload: Vec::new(),
        }
    }

    /// Payload length as carried in the LENGTH field
    pub fn payload_len(&self) -> u8 {
        // Bounded by MAX_PAYLOAD_SIZE
        self.payload.len() as u8
    }
}
