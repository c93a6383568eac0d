//! Seven-segment clock and readout core for a 4-digit LED display.
//!
//! Everything but [`Hardware`] runs on the host, so the encoder, multiplexer, debouncer and
//! clock state machine are all tested without a board.
#![cfg_attr(not(test), no_std)]

mod active_level;
pub mod button;
pub mod clock;
mod display_buffer;
mod display_memory;
mod error;
mod glyph;
#[cfg(feature = "pico1")]
mod hardware;
pub mod led4;
mod shared_constants;
pub mod station;
pub mod temperature;

// Re-export commonly used items
pub use active_level::ActiveLevel;
pub use display_buffer::{CELL_COUNT, DisplayBuffer, MAX_TEXT_LEN, MIN_TEXT_LEN};
pub use display_memory::DisplayMemory;
pub use error::{Error, Result};
pub use glyph::Leds;
#[cfg(feature = "pico1")]
pub use hardware::{Hardware, TemperatureSensor};
pub use shared_constants::*;
