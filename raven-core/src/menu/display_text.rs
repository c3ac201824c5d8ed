//! Remembered LCD text

use heapless::Vec;
use raven_protocol::TEXT_WIDTH;

/// Contents of the LCD text area, kept so it can be redrawn after sleep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayText(Vec<u8, TEXT_WIDTH>);

impl DisplayText {
    /// Create empty text
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Create from bytes, keeping at most [`TEXT_WIDTH`] of them
    pub fn from_bytes(text: &[u8]) -> Self {
        let mut this = Self::new();
        this.set(text);
        this
    }

    /// Replace the contents, truncating to [`TEXT_WIDTH`]
    pub fn set(&mut self, text: &[u8]) {
        let len = text.len().min(TEXT_WIDTH);
        self.0.clear();
        // Cannot fail, len is clamped to capacity
        let _ = self.0.extend_from_slice(&text[..len]);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
