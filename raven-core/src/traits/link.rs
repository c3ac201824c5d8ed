//! Serial link to the radio MCU

use raven_protocol::{ConsoleMessage, Frame};

/// Outgoing side of the framed serial transport
///
/// Sending is fire-and-forget; framing and checksumming are the
/// transport's responsibility.
pub trait FrameSink {
    /// Send one frame made of `command` and `payload`
    fn send_frame(&mut self, command: u8, payload: &[u8]);

    /// Send a typed console message
    fn send_message(&mut self, message: &ConsoleMessage<'_>) {
        self.send_frame(message.command(), message.payload());
    }

    /// Send an already built frame
    fn send(&mut self, frame: &Frame) {
        self.send_frame(frame.command, &frame.payload);
    }
}
