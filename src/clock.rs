//! A 24-hour clock that ticks once a second and can be set digit by digit.
//!
//! Setting works on a shadow copy. The live time keeps ticking underneath and is replaced only
//! when the last digit is confirmed, with seconds zeroed.

pub mod state;
pub mod time;

use core::fmt::Write;

use heapless::String;

use self::state::AdjustState;
use self::time::ClockTime;
use crate::display_buffer::MAX_TEXT_LEN;
use crate::glyph::Leds;
use crate::{DisplayBuffer, Result};

/// Live time, the shadow being edited, and where editing is up to.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock {
    live: ClockTime,
    shadow: ClockTime,
    state: AdjustState,
}

impl Clock {
    #[must_use]
    pub const fn new(start: ClockTime) -> Self {
        Self {
            live: start,
            shadow: start,
            state: AdjustState::Idle,
        }
    }

    /// The running time.
    #[must_use]
    pub const fn time(&self) -> ClockTime {
        self.live
    }

    /// The time being set. Only meaningful while not idle.
    #[must_use]
    pub const fn shadow(&self) -> ClockTime {
        self.shadow
    }

    #[must_use]
    pub const fn state(&self) -> AdjustState {
        self.state
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Advances the live time one second. Never touches the shadow.
    pub const fn tick(&mut self) {
        self.live.tick();
    }

    /// Moves to the next field. Entering the first field snapshots the live time; leaving the
    /// last commits the shadow and zeroes the seconds.
    pub fn next_field(&mut self) {
        if self.state.is_idle() {
            self.shadow = self.live;
        }
        self.state = self.state.next();
        if self.state.is_idle() {
            self.live = self.shadow;
            self.live.reset_seconds();
            #[cfg(feature = "defmt")]
            defmt::info!("clock set to {}:{}", self.live.hours(), self.live.minutes());
        }
    }

    /// Adds one to the field being set. Does nothing while idle.
    pub fn increment_field(&mut self) {
        if let Some(field) = self.state.field() {
            self.shadow.increment(field);
        }
    }

    /// Replaces the live time and abandons any edit in progress.
    pub const fn set(&mut self, clock_time: ClockTime) {
        self.live = clock_time;
        self.state = AdjustState::Idle;
    }

    /// Text for the display.
    ///
    /// While idle: `HHMM`, with the decimal point after the hours lit on even seconds. While
    /// setting: the shadow time, with the decimal point lit on the digit being set.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not fit its buffer.
    pub fn text(&self) -> Result<String<MAX_TEXT_LEN>> {
        let (digits, marked) = match self.state {
            AdjustState::Idle => {
                let separator_on = self.live.seconds() % 2 == 0;
                (self.live.digits(), separator_on.then_some(1))
            }
            AdjustState::Editing(field) => (self.shadow.digits(), Some(field.position())),
        };

        let mut text = String::new();
        for (position, digit) in digits.into_iter().enumerate() {
            text.write_char(digit)?;
            if marked == Some(position) {
                text.write_char(Leds::DECIMAL_POINT)?;
            }
        }
        Ok(text)
    }

    /// Segment patterns for [`text`](Self::text).
    #[must_use]
    pub fn render(&self) -> DisplayBuffer {
        self.text()
            .map_or(DisplayBuffer::ERROR, |text| DisplayBuffer::from_text(&text))
    }
}

/// Commands that change a [`Clock`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    Tick,
    NextField,
    IncrementField,
    Set(ClockTime),
}

impl ClockCommand {
    pub fn apply(self, clock: &mut Clock) {
        match self {
            Self::Tick => clock.tick(),
            Self::NextField => clock.next_field(),
            Self::IncrementField => clock.increment_field(),
            Self::Set(clock_time) => clock.set(clock_time),
        }
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::time::ClockField;
    use super::*;

    fn clock(hours: u8, minutes: u8, seconds: u8) -> Clock {
        Clock::new(ClockTime::from_hms(hours, minutes, seconds).expect("valid time"))
    }

    #[test]
    fn test_full_cycle_only_zeroes_seconds() {
        let mut clock = clock(23, 59, 41);
        for _ in 0..4 {
            clock.next_field();
            assert!(!clock.is_idle());
        }
        clock.next_field();
        assert!(clock.is_idle());
        assert_eq!(
            clock.time(),
            ClockTime::from_hms(23, 59, 0).expect("valid time")
        );
    }

    #[test]
    fn test_increment_while_idle_is_ignored() {
        let mut clock = clock(12, 34, 0);
        let before = clock;
        clock.increment_field();
        assert_eq!(clock, before);
    }

    #[test]
    fn test_edits_stay_in_shadow_until_commit() {
        let mut clock = clock(8, 15, 30);
        clock.next_field(); // HoursTens
        clock.increment_field();
        clock.tick();
        assert_eq!(clock.time(), ClockTime::from_hms(8, 15, 31).expect("valid time"));
        assert_eq!(clock.shadow().hours(), 18);

        for _ in 0..4 {
            clock.next_field();
        }
        assert!(clock.is_idle());
        assert_eq!(clock.time(), ClockTime::from_hms(18, 15, 0).expect("valid time"));
    }

    #[test]
    fn test_edit_every_field() {
        let mut clock = clock(0, 0, 0);
        let presses = [2, 3, 5, 9];
        for count in presses {
            clock.next_field();
            for _ in 0..count {
                clock.increment_field();
            }
        }
        clock.next_field();
        assert_eq!(clock.time(), ClockTime::from_hms(23, 59, 0).expect("valid time"));
    }

    #[test]
    fn test_idle_text_blinks_separator() {
        let mut clock = clock(9, 5, 0);
        assert_eq!(clock.text().expect("fits").as_str(), "09.05");
        clock.tick();
        assert_eq!(clock.text().expect("fits").as_str(), "0905");
    }

    #[test]
    fn test_editing_text_marks_field() {
        let mut clock = clock(9, 5, 1);
        clock.next_field();
        clock.next_field();
        clock.next_field();
        assert_eq!(clock.state(), AdjustState::Editing(ClockField::MinutesTens));
        assert_eq!(clock.text().expect("fits").as_str(), "090.5");
    }

    #[test]
    fn test_render_matches_text() {
        let clock = clock(14, 2, 0);
        assert_eq!(clock.render(), DisplayBuffer::from_text("14.02"));
    }

    #[test]
    fn test_commands() {
        let mut clock = clock(10, 0, 0);
        ClockCommand::NextField.apply(&mut clock);
        ClockCommand::IncrementField.apply(&mut clock);
        ClockCommand::Tick.apply(&mut clock);
        assert_eq!(clock.time().seconds(), 1);
        ClockCommand::Set(ClockTime::MIDNIGHT).apply(&mut clock);
        assert!(clock.is_idle());
        assert_eq!(clock.time(), ClockTime::MIDNIGHT);
    }
}
