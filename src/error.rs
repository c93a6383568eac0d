use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    #[cfg(feature = "pico1")]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[display("Text must be 4 to 8 characters long, not {len}")]
    TextLength { len: usize },

    #[display("Text may not start with a decimal point")]
    LeadingDecimalPoint,

    #[display("Decimal point at index {index} follows another decimal point")]
    AdjacentDecimalPoints { index: usize },

    #[display("No segment pattern for {glyph:?}")]
    UnsupportedGlyph { glyph: char },

    #[display("Text has more than 4 digits")]
    TooManyDigits,

    #[display("Index out of bounds")]
    IndexOutOfBounds,

    #[display("Error setting output state")]
    CannotSetOutputState,

    #[display("Error reading input state")]
    CannotReadInput,

    #[display("Error reading the temperature sensor")]
    CannotReadTemperature,

    #[display("Invalid clock time")]
    InvalidClockTime,

    #[display("Format error")]
    FormatError,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::FormatError
    }
}

#[cfg(feature = "pico1")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
