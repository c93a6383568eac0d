//! Wall-clock time kept as BCD-like digits, the way the display shows it.

use crate::{Error, Result};

/// An editable digit of a [`ClockTime`], in display order.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockField {
    HoursTens,
    HoursUnits,
    MinutesTens,
    MinutesUnits,
}

impl ClockField {
    pub const FIRST: Self = Self::HoursTens;

    /// The field edited after this one, or `None` after the last.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::HoursTens => Some(Self::HoursUnits),
            Self::HoursUnits => Some(Self::MinutesTens),
            Self::MinutesTens => Some(Self::MinutesUnits),
            Self::MinutesUnits => None,
        }
    }

    /// The display position (0 = leftmost) that shows this field.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::HoursTens => 0,
            Self::HoursUnits => 1,
            Self::MinutesTens => 2,
            Self::MinutesUnits => 3,
        }
    }
}

/// Time of day on a 24-hour clock, one field per display digit plus seconds.
///
/// Always holds a valid time: hours 0 to 23, minutes and seconds 0 to 59.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    hours_tens: u8,
    hours_units: u8,
    minutes_tens: u8,
    minutes_units: u8,
    seconds: u8,
}

#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    reason = "Every field is a single decimal digit or a value below 60"
)]
impl ClockTime {
    pub const MIDNIGHT: Self = Self {
        hours_tens: 0,
        hours_units: 0,
        minutes_tens: 0,
        minutes_units: 0,
        seconds: 0,
    };

    /// # Errors
    ///
    /// Returns [`Error::InvalidClockTime`] unless `hours < 24`, `minutes < 60` and
    /// `seconds < 60`.
    pub const fn from_hms(hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return Err(Error::InvalidClockTime);
        }
        Ok(Self {
            hours_tens: hours / 10,
            hours_units: hours % 10,
            minutes_tens: minutes / 10,
            minutes_units: minutes % 10,
            seconds,
        })
    }

    /// Parses `HHMM`, for example `"0930"`. Seconds start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidClockTime`] if `text` is not four digits forming a valid time.
    pub fn parse_hhmm(text: &str) -> Result<Self> {
        let [h1, h0, m1, m0] = <[u8; 4]>::try_from(text.as_bytes())
            .map_err(|_| Error::InvalidClockTime)?
            .map(|byte| byte.wrapping_sub(b'0'));
        if [h1, h0, m1, m0].iter().any(|&digit| digit > 9) {
            return Err(Error::InvalidClockTime);
        }
        Self::from_hms(h1 * 10 + h0, m1 * 10 + m0, 0)
    }

    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours_tens * 10 + self.hours_units
    }

    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes_tens * 10 + self.minutes_units
    }

    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The value of one digit field.
    #[must_use]
    pub const fn field(&self, field: ClockField) -> u8 {
        match field {
            ClockField::HoursTens => self.hours_tens,
            ClockField::HoursUnits => self.hours_units,
            ClockField::MinutesTens => self.minutes_tens,
            ClockField::MinutesUnits => self.minutes_units,
        }
    }

    /// Advances one second, carrying into minutes and hours and wrapping at midnight.
    pub const fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds < 60 {
            return;
        }
        self.seconds = 0;
        self.minutes_units += 1;
        if self.minutes_units < 10 {
            return;
        }
        self.minutes_units = 0;
        self.minutes_tens += 1;
        if self.minutes_tens < 6 {
            return;
        }
        self.minutes_tens = 0;
        self.hours_units += 1;
        if self.hours_tens == 2 && self.hours_units == 4 {
            self.hours_tens = 0;
            self.hours_units = 0;
        } else if self.hours_units == 10 {
            self.hours_units = 0;
            self.hours_tens += 1;
        }
    }

    /// Adds one to a single digit, wrapping within that digit's range. Other digits are not
    /// carried into.
    ///
    /// The two hour digits together never exceed 23: the tens digit skips from 1 straight to
    /// 0 when the units digit is above 3, and the units digit wraps after 3 when the tens digit
    /// is 2.
    pub const fn increment(&mut self, field: ClockField) {
        match field {
            ClockField::HoursTens => {
                let next = self.hours_tens + 1;
                self.hours_tens = if next > 2 || (next == 2 && self.hours_units > 3) {
                    0
                } else {
                    next
                };
            }
            ClockField::HoursUnits => {
                let limit = if self.hours_tens == 2 { 4 } else { 10 };
                self.hours_units = (self.hours_units + 1) % limit;
            }
            ClockField::MinutesTens => self.minutes_tens = (self.minutes_tens + 1) % 6,
            ClockField::MinutesUnits => self.minutes_units = (self.minutes_units + 1) % 10,
        }
    }

    pub const fn reset_seconds(&mut self) {
        self.seconds = 0;
    }

    /// The four display digits, `HHMM`.
    #[must_use]
    pub const fn digits(&self) -> [char; 4] {
        [
            digit_char(self.hours_tens),
            digit_char(self.hours_units),
            digit_char(self.minutes_tens),
            digit_char(self.minutes_units),
        ]
    }
}

#[inline]
#[expect(clippy::arithmetic_side_effects, reason = "Value < 10")]
const fn digit_char(value: u8) -> char {
    (value + b'0') as char
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    fn time(hours: u8, minutes: u8, seconds: u8) -> ClockTime {
        ClockTime::from_hms(hours, minutes, seconds).expect("valid time")
    }

    #[test]
    fn test_from_hms_rejects_out_of_range() {
        assert!(ClockTime::from_hms(24, 0, 0).is_err());
        assert!(ClockTime::from_hms(0, 60, 0).is_err());
        assert!(ClockTime::from_hms(0, 0, 60).is_err());
        assert_eq!(time(23, 59, 59).digits(), ['2', '3', '5', '9']);
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(ClockTime::parse_hhmm("0930").expect("valid"), time(9, 30, 0));
        assert!(ClockTime::parse_hhmm("2400").is_err());
        assert!(ClockTime::parse_hhmm("930").is_err());
        assert!(ClockTime::parse_hhmm("09:30").is_err());
        assert!(ClockTime::parse_hhmm("0a30").is_err());
    }

    #[test]
    fn test_tick_carries() {
        let mut clock_time = time(9, 59, 59);
        clock_time.tick();
        assert_eq!(clock_time, time(10, 0, 0));

        let mut clock_time = time(19, 59, 59);
        clock_time.tick();
        assert_eq!(clock_time, time(20, 0, 0));
    }

    #[test]
    fn test_tick_wraps_at_midnight() {
        let mut clock_time = time(23, 59, 59);
        clock_time.tick();
        assert_eq!(clock_time, ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_a_day_of_ticks_returns_to_start() {
        let start = time(13, 37, 42);
        let mut clock_time = start;
        for _ in 0..24 * 60 * 60 {
            clock_time.tick();
            assert!(clock_time.hours() < 24);
            assert!(clock_time.minutes() < 60);
        }
        assert_eq!(clock_time, start);
    }

    #[test]
    fn test_hours_tens_wraps_from_two() {
        let mut clock_time = time(21, 0, 0);
        clock_time.increment(ClockField::HoursTens);
        assert_eq!(clock_time.hours(), 1);
    }

    #[test]
    fn test_hours_tens_skips_two_when_units_too_big() {
        let mut clock_time = time(15, 0, 0);
        clock_time.increment(ClockField::HoursTens);
        assert_eq!(clock_time.hours(), 5);
    }

    #[test]
    fn test_hours_units_limited_after_twenty() {
        let mut clock_time = time(23, 0, 0);
        clock_time.increment(ClockField::HoursUnits);
        assert_eq!(clock_time.hours(), 20);
    }

    #[test]
    fn test_hours_never_exceed_23() {
        for hours in 0..24 {
            for field in [ClockField::HoursTens, ClockField::HoursUnits] {
                let mut clock_time = time(hours, 0, 0);
                for _ in 0..30 {
                    clock_time.increment(field);
                    assert!(clock_time.hours() <= 23, "{hours} via {field:?}");
                }
            }
        }
    }

    #[test]
    fn test_minutes_wrap_without_carry() {
        let mut clock_time = time(7, 59, 0);
        clock_time.increment(ClockField::MinutesUnits);
        assert_eq!((clock_time.hours(), clock_time.minutes()), (7, 50));
        clock_time.increment(ClockField::MinutesTens);
        assert_eq!(clock_time.minutes(), 0);
    }

    #[test]
    fn test_field_order() {
        let mut field = ClockField::FIRST;
        let mut positions = vec![field.position()];
        while let Some(next) = field.next() {
            positions.push(next.position());
            field = next;
        }
        assert_eq!(positions, [0, 1, 2, 3]);
    }
}
