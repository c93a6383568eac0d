//! Temperature readouts for the 4-digit display.

use core::fmt::Write;

use heapless::String;

use crate::display_buffer::MAX_TEXT_LEN;
use crate::glyph::Leds;
use crate::{DisplayBuffer, Result};

/// A temperature in tenths of a degree Celsius.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Celsius(i16);

impl Celsius {
    #[must_use]
    pub const fn from_tenths(tenths: i16) -> Self {
        Self(tenths)
    }

    /// Converts a 12-bit reading of the RP2040's on-chip temperature sensor.
    ///
    /// The sensor reads 0.706 V at 27 degrees and drops 1.721 mV per degree, against a 3.3 V
    /// reference.
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "A 16-bit reading scaled to microvolts fits in i64"
    )]
    pub fn from_sensor_reading(raw: u16) -> Self {
        const REFERENCE_MICROVOLTS: i64 = 3_300_000;
        const FULL_SCALE: i64 = 4_096;
        const MICROVOLTS_AT_27: i64 = 706_000;
        const MICROVOLTS_PER_DEGREE: i64 = 1_721;

        let microvolts = i64::from(raw) * REFERENCE_MICROVOLTS / FULL_SCALE;
        let tenths = 270 - (microvolts - MICROVOLTS_AT_27) * 10 / MICROVOLTS_PER_DEGREE;
        // Only readings far past the 12-bit range fall below i16.
        Self(i16::try_from(tenths).unwrap_or(i16::MIN))
    }

    #[must_use]
    pub const fn tenths(self) -> i16 {
        self.0
    }

    /// Right-aligned text with one decimal and the degree marker: `"23.5*"`, `"-5.2*"`,
    /// `" 7.0*"`.
    ///
    /// Temperatures of 100 degrees and up, or -10 and below, need five digit positions. Their
    /// text is still returned, and [`DisplayBuffer::from_text`] turns it into the error pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not fit its buffer.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Splitting tenths into whole degrees and a decimal digit"
    )]
    pub fn text(self) -> Result<String<MAX_TEXT_LEN>> {
        let magnitude = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };

        let mut whole: String<MAX_TEXT_LEN> = String::new();
        write!(whole, "{sign}{}", magnitude / 10)?;

        let mut text = String::new();
        write!(
            text,
            "{:>2}{}{}{}",
            whole.as_str(),
            Leds::DECIMAL_POINT,
            magnitude % 10,
            Leds::DEGREE
        )?;
        Ok(text)
    }

    /// Segment patterns for [`text`](Self::text).
    #[must_use]
    pub fn render(self) -> DisplayBuffer {
        self.text()
            .map_or(DisplayBuffer::ERROR, |text| DisplayBuffer::from_text(&text))
    }
}
