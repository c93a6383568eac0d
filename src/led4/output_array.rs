use embedded_hal::digital::OutputPin;

use crate::{ActiveLevel, Error, Result};

/// Array of output pins that share one [`ActiveLevel`].
///
/// See the [`Led4`](crate::led4::Led4) documentation for usage examples.
pub struct OutputArray<P, const N: usize> {
    pins: [P; N],
    active_level: ActiveLevel,
}

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    pub const fn new(pins: [P; N], active_level: ActiveLevel) -> Self {
        Self { pins, active_level }
    }

    /// Turns the line at `index` on or off.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the pin cannot be set.
    #[inline]
    pub fn set_at_index(&mut self, index: usize, on: bool) -> Result<()> {
        let state = self.active_level.pin_state(on);
        self.pins
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds)?
            .set_state(state)
            .map_err(|_| Error::CannotSetOutputState)
    }

    /// The pins, in line order.
    pub fn iter(&self) -> core::slice::Iter<'_, P> {
        self.pins.iter()
    }
}

impl<P: OutputPin> OutputArray<P, { u8::BITS as usize }> {
    /// Turns on line `i` for each set bit `i` of `bits`, least significant bit first.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set.
    #[inline]
    pub fn set_from_bits(&mut self, mut bits: u8) -> Result<()> {
        for pin in &mut self.pins {
            pin.set_state(self.active_level.pin_state((bits & 1) == 1))
                .map_err(|_| Error::CannotSetOutputState)?;
            bits >>= 1;
        }
        Ok(())
    }
}
