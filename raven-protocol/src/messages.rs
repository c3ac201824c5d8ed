//! Message types for the Raven LCD link
//!
//! Message types are divided into two categories:
//! - LCD → radio MCU: ping requests, temperature reports
//! - radio MCU → LCD: ping replies, text messages, wake notifications

use crate::frame::{Frame, FrameError};
use heapless::Vec;

// Command IDs: LCD → radio MCU
pub const SEND_TEMP: u8 = 0x80;
pub const SEND_PING: u8 = 0x81;

// Command IDs: radio MCU → LCD
pub const REPORT_PING: u8 = 0xC0;
pub const REPORT_PING_BEEP: u8 = 0xC1;
pub const REPORT_TEXT_MSG: u8 = 0xC2;
pub const REPORT_WAKE: u8 = 0xC3;

/// Characters in the LCD alphanumeric text area
pub const TEXT_WIDTH: usize = 7;

/// Messages sent by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleMessage<'a> {
    /// Liveness request carrying the sequence number
    Ping { sequence: u8 },
    /// Temperature report as formatted ASCII, no terminator
    Temperature { text: &'a [u8] },
}

impl<'a> ConsoleMessage<'a> {
    /// Command id of this message
    pub fn command(&self) -> u8 {
        match self {
            ConsoleMessage::Ping { .. } => SEND_PING,
            ConsoleMessage::Temperature { .. } => SEND_TEMP,
        }
    }

    /// Payload bytes of this message
    pub fn payload(&self) -> &[u8] {
        match self {
            ConsoleMessage::Ping { sequence } => core::slice::from_ref(sequence),
            ConsoleMessage::Temperature { text } => *text,
        }
    }

    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        Frame::new(self.command(), self.payload())
    }
}

/// Reports parsed from radio-MCU-originated frames
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerReport {
    /// Answer to a ping, echoing its sequence number
    PingReply { sequence: u8, beep: bool },
    /// Text to put in the LCD text area
    Text(Vec<u8, TEXT_WIDTH>),
    /// The radio MCU asks the console to wake its display
    Wake,
}

impl ControllerReport {
    /// Parse a report from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.command {
            REPORT_PING | REPORT_PING_BEEP => {
                let sequence = *frame.payload.first().ok_or(FrameError::InvalidFrame)?;
                Ok(ControllerReport::PingReply {
                    sequence,
                    beep: frame.command == REPORT_PING_BEEP,
                })
            }
            REPORT_TEXT_MSG => {
                let len = frame.payload.len().min(TEXT_WIDTH);
                let mut text = Vec::new();
                // Cannot fail, len is clamped to capacity
                let _ = text.extend_from_slice(&frame.payload[..len]);
                Ok(ControllerReport::Text(text))
            }
            REPORT_WAKE => Ok(ControllerReport::Wake),
            _ => Err(FrameError::UnknownCommand),
        }
    }

    /// Encode this report into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            ControllerReport::PingReply { sequence, beep } => {
                let command = if *beep { REPORT_PING_BEEP } else { REPORT_PING };
                Frame::new(command, &[*sequence])
            }
            ControllerReport::Text(text) => Frame::new(REPORT_TEXT_MSG, text),
            ControllerReport::Wake => Ok(Frame::empty(REPORT_WAKE)),
        }
    }
}
