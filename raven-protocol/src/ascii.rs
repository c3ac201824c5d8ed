//! Decimal to ASCII conversion for the LCD and the link.
//!
//! Signed values are written backward into a fixed buffer, starting with
//! the unit letter and ending with the sign, and the text is addressed by
//! the offset of its first character. The result is exactly what goes on
//! the wire: `[-]digits ' ' unit`, with no terminator.

use crate::units::TemperatureUnit;

/// Longest signed text: `"-32768 C"`
pub const SIGNED_TEXT_CAPACITY: usize = 8;

/// Convert `value` to two zero-padded decimal digits
///
/// # Panics
/// If `value > 99`. Callers must keep the value in range.
pub fn format_unsigned(value: u8) -> [u8; 2] {
    assert!(value <= 99, "format_unsigned: value out of range");
    [b'0' + value / 10, b'0' + value % 10]
}

/// Signed value rendered as text, held in a fixed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedText {
    buf: [u8; SIGNED_TEXT_CAPACITY],
    start: usize,
}

impl SignedText {
    /// Offset of the first character within the buffer
    pub fn start(&self) -> usize {
        self.start
    }

    /// The encoded characters, most significant first
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// Number of encoded characters
    pub fn len(&self) -> usize {
        SIGNED_TEXT_CAPACITY - self.start
    }

    /// Never true: the unit letter is always present
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SignedText {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[u8]:a}", self.as_bytes())
    }
}

/// Convert a signed value to `[-]digits ' ' unit`
///
/// Zero is written as a single `'0'`. `i16::MIN` is handled without
/// overflowing on negation.
pub fn format_signed_with_unit(value: i16, unit: TemperatureUnit) -> SignedText {
    let mut buf = [0u8; SIGNED_TEXT_CAPACITY];
    let mut p = SIGNED_TEXT_CAPACITY;

    p -= 1;
    buf[p] = unit.letter();
    p -= 1;
    buf[p] = b' ';

    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        p -= 1;
        buf[p] = b'0';
    }
    while magnitude != 0 {
        p -= 1;
        buf[p] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
    }

    if value < 0 {
        p -= 1;
        buf[p] = b'-';
    }

    SignedText { buf, start: p }
}

/// Parse text produced by [`format_signed_with_unit`]
///
/// Returns `None` for anything that is not `[-]digits ' ' unit`.
pub fn parse_signed_with_unit(text: &[u8]) -> Option<(i16, TemperatureUnit)> {
    let (&letter, rest) = text.split_last()?;
    let unit = TemperatureUnit::from_letter(letter)?;
    let (&space, number) = rest.split_last()?;
    if space != b' ' {
        return None;
    }

    let (negative, digits) = match number.split_first() {
        Some((b'-', digits)) => (true, digits),
        _ => (false, number),
    };
    if digits.is_empty() || digits.len() > 5 {
        return None;
    }

    let mut magnitude: i32 = 0;
    for &d in digits {
        if !d.is_ascii_digit() {
            return None;
        }
        magnitude = magnitude * 10 + i32::from(d - b'0');
    }

    let value = if negative { -magnitude } else { magnitude };
    i16::try_from(value).ok().map(|v| (v, unit))
}
