//! A device abstraction for multiplexing a 4-digit, 7-segment LED display.
//!
//! Only one digit is lit at any moment. [`Led4`] walks the digits round-robin, lighting each
//! for [`MULTIPLEX_SLEEP`], fast enough that persistence of vision shows all four at once.
//!
//! How the segment pattern reaches the wires is up to a [`DigitOutput`] binding:
//! [`DirectPins`] drives one GPIO per line, [`ShiftRegister595`] shifts the pattern out
//! through two chained shift registers.

use core::convert::Infallible;

use embassy_time::Timer;
use embedded_hal::digital::OutputPin;

use crate::display_buffer::CELL_COUNT;
use crate::shared_constants::MULTIPLEX_SLEEP;
use crate::{DisplayBuffer, DisplayMemory, Error, Result};

// ============================================================================
// Output Bindings
// ============================================================================

mod output_array;
mod shift_register;
pub use output_array::OutputArray;
pub use shift_register::ShiftRegister595;

/// The number of segments per digit in the display, counting the decimal point.
pub const SEGMENT_COUNT: usize = 8;

/// Puts one digit's segment pattern on the wires.
pub trait DigitOutput {
    /// Presents `bits` on the segment lines and turns on the digit line for `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is out of range or a pin cannot be set.
    fn show(&mut self, position: usize, bits: u8) -> Result<()>;

    /// Turns off the digit line for `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is out of range or a pin cannot be set.
    fn blank(&mut self, position: usize) -> Result<()>;
}

/// One GPIO per digit line and one per segment line.
///
/// # Hardware Requirements
///
/// For a common-cathode display driven straight from the MCU, digit lines are
/// [`ActiveLevel::Low`](crate::ActiveLevel::Low) and segment lines
/// [`ActiveLevel::High`](crate::ActiveLevel::High).
pub struct DirectPins<C, S> {
    cells: OutputArray<C, CELL_COUNT>,
    segments: OutputArray<S, SEGMENT_COUNT>,
}

impl<C: OutputPin, S: OutputPin> DirectPins<C, S> {
    pub const fn new(
        cells: OutputArray<C, CELL_COUNT>,
        segments: OutputArray<S, SEGMENT_COUNT>,
    ) -> Self {
        Self { cells, segments }
    }
}

impl<C: OutputPin, S: OutputPin> DigitOutput for DirectPins<C, S> {
    fn show(&mut self, position: usize, bits: u8) -> Result<()> {
        if position >= CELL_COUNT {
            return Err(Error::IndexOutOfBounds);
        }
        self.segments.set_from_bits(bits)?;
        self.cells.set_at_index(position, true)
    }

    fn blank(&mut self, position: usize) -> Result<()> {
        self.cells.set_at_index(position, false)
    }
}

// ============================================================================
// Led4 Device
// ============================================================================

/// A device abstraction for a multiplexed 4-digit, 7-segment LED display.
///
/// # Example
///
/// ```ignore
/// use embassy_rp::gpio::{Level, Output};
/// use led4_clock::led4::{DirectPins, Led4, OutputArray};
/// use led4_clock::{ActiveLevel, DisplayMemory, Result};
///
/// static DISPLAY_MEMORY: DisplayMemory = DisplayMemory::new();
///
/// async fn example(p: embassy_rp::Peripherals) -> Result<()> {
///     // Cell pins select which digit is active (LOW = on)
///     let cells = OutputArray::new(
///         [
///             Output::new(p.PIN_1, Level::High),
///             Output::new(p.PIN_2, Level::High),
///             Output::new(p.PIN_3, Level::High),
///             Output::new(p.PIN_4, Level::High),
///         ],
///         ActiveLevel::Low,
///     );
///     // Segment pins A to G, then the decimal point (HIGH = on)
///     let segments = OutputArray::new(
///         [
///             Output::new(p.PIN_5, Level::Low),
///             Output::new(p.PIN_6, Level::Low),
///             Output::new(p.PIN_7, Level::Low),
///             Output::new(p.PIN_8, Level::Low),
///             Output::new(p.PIN_9, Level::Low),
///             Output::new(p.PIN_10, Level::Low),
///             Output::new(p.PIN_11, Level::Low),
///             Output::new(p.PIN_12, Level::Low),
///         ],
///         ActiveLevel::High,
///     );
///
///     DISPLAY_MEMORY.write_text("12.34");
///     let Err(err) = Led4::new(DirectPins::new(cells, segments)).run(&DISPLAY_MEMORY).await;
///     Err(err)
/// }
/// ```
pub struct Led4<O> {
    output: O,
    position: usize,
}

impl<O: DigitOutput> Led4<O> {
    /// Creates the display. Nothing is lit until the first [`step`](Self::step).
    pub const fn new(output: O) -> Self {
        Self {
            output,
            position: CELL_COUNT - 1,
        }
    }

    /// Lights `position` with its pattern from `buffer`.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is out of range or a pin cannot be set.
    pub fn refresh(&mut self, buffer: &DisplayBuffer, position: usize) -> Result<()> {
        let bits = buffer.get(position).ok_or(Error::IndexOutOfBounds)?;
        self.output.show(position, bits)
    }

    /// Turns off the lit digit and lights the next one. Returns the position now lit.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Round-robin over the digits"
    )]
    pub fn step(&mut self, buffer: &DisplayBuffer) -> Result<usize> {
        self.output.blank(self.position)?;
        self.position = self.position.saturating_add(1) % CELL_COUNT;
        #[cfg(feature = "display-trace")]
        defmt::trace!("digit {}: {}", self.position, buffer.get(self.position));
        self.refresh(buffer, self.position)?;
        Ok(self.position)
    }

    /// Multiplexes whatever is committed to `memory`, forever.
    ///
    /// A fresh copy of the buffer is loaded before each digit, so a commit shows up within one
    /// [`MULTIPLEX_SLEEP`].
    ///
    /// # Errors
    ///
    /// Returns only if a pin cannot be set.
    pub async fn run(mut self, memory: &DisplayMemory) -> Result<Infallible> {
        loop {
            self.step(&memory.load())?;
            Timer::after(MULTIPLEX_SLEEP).await;
        }
    }

    /// The binding this display drives.
    pub const fn output(&self) -> &O {
        &self.output
    }
}
