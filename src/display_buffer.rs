//! Segment state for a 4-digit 7-segment display, and the text encoder that fills it.

use core::ops::{BitOrAssign, Index};

use crate::glyph::Leds;
use crate::{Error, Result};

/// The number of cells (digits) in the display.
pub const CELL_COUNT: usize = 4;

/// Shortest text accepted by [`DisplayBuffer::encode`].
pub const MIN_TEXT_LEN: usize = 4;

/// Longest text accepted by [`DisplayBuffer::encode`]: four digits, each with a decimal point.
pub const MAX_TEXT_LEN: usize = 2 * CELL_COUNT;

// ============================================================================
// DisplayBuffer
// ============================================================================

/// LED segment state for a 4-digit 7-segment display, one byte per digit, left to right.
///
/// See [`Leds`] for the bit layout.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayBuffer([u8; CELL_COUNT]);

impl DisplayBuffer {
    /// All digits dark.
    pub const BLANK: Self = Self([Leds::BLANK; CELL_COUNT]);

    /// The pattern shown when text cannot be encoded.
    pub const ERROR: Self = Self([Leds::ERROR; CELL_COUNT]);

    /// Creates a buffer with the same bits in every position.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self([bits; CELL_COUNT])
    }

    /// Encodes `text` into segment patterns.
    ///
    /// A `.` is not a digit of its own; it lights the decimal point of the digit before it.
    /// Text with fewer than four digits is padded with blanks on the right.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not 4 to 8 characters long, starts with `.`, has two
    /// `.` in a row, contains a character with no segment pattern, or has more than four
    /// digits.
    pub fn encode(text: &str) -> Result<Self> {
        let len = text.len();
        if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
            return Err(Error::TextLength { len });
        }

        let mut bits = [Leds::BLANK; CELL_COUNT];
        let mut filled = 0usize;
        let mut after_decimal_point = false;
        for (index, glyph) in text.chars().enumerate() {
            if glyph == Leds::DECIMAL_POINT {
                if after_decimal_point {
                    return Err(Error::AdjacentDecimalPoints { index });
                }
                let previous = filled
                    .checked_sub(1)
                    .and_then(|previous| bits.get_mut(previous))
                    .ok_or(Error::LeadingDecimalPoint)?;
                *previous |= Leds::DECIMAL;
                after_decimal_point = true;
            } else {
                let glyph_bits = Leds::bits(glyph).ok_or(Error::UnsupportedGlyph { glyph })?;
                *bits.get_mut(filled).ok_or(Error::TooManyDigits)? = glyph_bits;
                filled = filled.saturating_add(1);
                after_decimal_point = false;
            }
        }
        Ok(Self(bits))
    }

    /// Encodes `text`, showing [`DisplayBuffer::ERROR`] if it cannot be encoded.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match Self::encode(text) {
            Ok(buffer) => buffer,
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("cannot display text: {}", defmt::Display2Format(&_err));
                Self::ERROR
            }
        }
    }

    /// Returns the raw bits, left to right.
    #[must_use]
    pub const fn bits(&self) -> [u8; CELL_COUNT] {
        self.0
    }

    /// Returns the bits for one position, or `None` if `index` is past the last digit.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.0.iter()
    }

    /// Decodes each position back to its character, `None` where no glyph matches.
    #[must_use]
    pub fn glyphs(&self) -> [Option<char>; CELL_COUNT] {
        self.0.map(Leds::glyph)
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::BLANK
    }
}

impl BitOrAssign<u8> for DisplayBuffer {
    fn bitor_assign(&mut self, rhs: u8) {
        self.0.iter_mut().for_each(|bits| *bits |= rhs);
    }
}

impl Index<usize> for DisplayBuffer {
    type Output = u8;

    #[expect(clippy::indexing_slicing, reason = "Caller's responsibility")]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for DisplayBuffer {
    type Item = u8;
    type IntoIter = core::array::IntoIter<u8, CELL_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DisplayBuffer {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
