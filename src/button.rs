//! Debounced buttons.
//!
//! Sometimes the start (and end) of a press can be "noisy" (fluctuations between "pressed" and
//! "unpressed" states on the microsecond time scale as the physical contacts change from "not
//! touching" through "almost touching" to "touching", or vice-versa). A [`Debouncer`] ignores
//! the raw reading until it has held still for [`BUTTON_DEBOUNCE_DELAY`].

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::shared_constants::BUTTON_DEBOUNCE_DELAY;
use crate::{ActiveLevel, Error, Result};

// ============================================================================
// Debouncer
// ============================================================================

/// Turns a stream of raw pin readings into one event per physical press.
///
/// A press shorter than the debounce delay may be missed; a bounce is never reported as a
/// second press.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    active_level: ActiveLevel,
    debounce: Duration,
    last_reading: bool,
    stable_reading: bool,
    last_change: Instant,
}

impl Debouncer {
    /// Creates a debouncer that starts out released.
    #[must_use]
    pub const fn new(active_level: ActiveLevel, debounce: Duration) -> Self {
        // Released reads high when the button pulls the line low, and low otherwise.
        let released = matches!(active_level, ActiveLevel::Low);
        Self {
            active_level,
            debounce,
            last_reading: released,
            stable_reading: released,
            last_change: Instant::MIN,
        }
    }

    /// Feeds one raw reading taken at `now`. Returns `true` exactly once per press, when the
    /// press has held steady for the debounce delay.
    pub fn poll(&mut self, is_high: bool, now: Instant) -> bool {
        if is_high != self.last_reading {
            self.last_reading = is_high;
            self.last_change = now;
        }

        let settled = now
            .checked_duration_since(self.last_change)
            .is_some_and(|held| held >= self.debounce);
        if !settled || is_high == self.stable_reading {
            return false;
        }

        self.stable_reading = is_high;
        self.active_level.is_active(is_high)
    }

    /// Whether the debounced state is "pressed".
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.active_level.is_active(self.stable_reading)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(ActiveLevel::Low, BUTTON_DEBOUNCE_DELAY)
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// A group of debounced buttons polled in priority order (index 0 first).
///
/// Once a button reports a press, the lower-priority buttons are not evaluated in that poll.
#[derive(Debug, Clone, Copy)]
pub struct Buttons<const N: usize>([Debouncer; N]);

impl<const N: usize> Buttons<N> {
    #[must_use]
    pub const fn new(active_level: ActiveLevel) -> Self {
        Self([Debouncer::new(active_level, BUTTON_DEBOUNCE_DELAY); N])
    }

    /// Feeds one reading per button. Returns the index of the button pressed, if any.
    pub fn poll(&mut self, readings: [bool; N], now: Instant) -> Option<usize> {
        self.0
            .iter_mut()
            .zip(readings)
            .position(|(debouncer, is_high)| debouncer.poll(is_high, now))
    }
}

impl<const N: usize> Default for Buttons<N> {
    fn default() -> Self {
        Self::new(ActiveLevel::Low)
    }
}

// ============================================================================
// InputArray
// ============================================================================

/// Array of input pins read together, for feeding [`Buttons`].
pub struct InputArray<P, const N: usize>([P; N]);

impl<P: InputPin, const N: usize> InputArray<P, N> {
    pub const fn new(inputs: [P; N]) -> Self {
        Self(inputs)
    }

    /// Reads every pin, `true` meaning high.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be read.
    pub fn read_levels(&mut self) -> Result<[bool; N]> {
        let mut levels = [false; N];
        for (level, pin) in levels.iter_mut().zip(&mut self.0) {
            *level = pin.is_high().map_err(|_| Error::CannotReadInput)?;
        }
        Ok(levels)
    }
}
