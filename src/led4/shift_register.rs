//! Two daisy-chained 74HC595 shift registers driving a 4-digit display from three pins.
//!
//! Each update shifts 16 bits out MSB first: the segment byte, then the digit-select byte.
//! The segment byte therefore ends up in the second register of the chain. Pulsing the latch
//! copies both registers to their outputs at once.

use embedded_hal::digital::{OutputPin, PinState};

use super::DigitOutput;
use crate::display_buffer::CELL_COUNT;
use crate::{ActiveLevel, Error, Result};

pub struct ShiftRegister595<D, C, L> {
    data_pin: D,
    clock_pin: C,
    latch_pin: L,
    cell_active: ActiveLevel,
    segment_active: ActiveLevel,
}

impl<D: OutputPin, C: OutputPin, L: OutputPin> ShiftRegister595<D, C, L> {
    pub const fn new(
        data_pin: D,
        clock_pin: C,
        latch_pin: L,
        cell_active: ActiveLevel,
        segment_active: ActiveLevel,
    ) -> Self {
        Self {
            data_pin,
            clock_pin,
            latch_pin,
            cell_active,
            segment_active,
        }
    }

    fn write(&mut self, cell_bits: u8, segment_bits: u8) -> Result<()> {
        self.shift_out(apply_level(self.segment_active, segment_bits))?;
        self.shift_out(apply_level(self.cell_active, cell_bits))?;
        pulse(&mut self.latch_pin)
    }

    fn shift_out(&mut self, byte: u8) -> Result<()> {
        for bit in (0..u8::BITS).rev() {
            let state = PinState::from((byte >> bit) & 1 == 1);
            self.data_pin
                .set_state(state)
                .map_err(|_| Error::CannotSetOutputState)?;
            pulse(&mut self.clock_pin)?;
        }
        Ok(())
    }
}

impl<D: OutputPin, C: OutputPin, L: OutputPin> DigitOutput for ShiftRegister595<D, C, L> {
    fn show(&mut self, position: usize, bits: u8) -> Result<()> {
        if position >= CELL_COUNT {
            return Err(Error::IndexOutOfBounds);
        }
        self.write(1 << position, bits)
    }

    fn blank(&mut self, position: usize) -> Result<()> {
        if position >= CELL_COUNT {
            return Err(Error::IndexOutOfBounds);
        }
        self.write(0, 0)
    }
}

const fn apply_level(active_level: ActiveLevel, bits: u8) -> u8 {
    match active_level {
        ActiveLevel::High => bits,
        ActiveLevel::Low => !bits,
    }
}

fn pulse(pin: &mut impl OutputPin) -> Result<()> {
    pin.set_high().map_err(|_| Error::CannotSetOutputState)?;
    pin.set_low().map_err(|_| Error::CannotSetOutputState)
}
