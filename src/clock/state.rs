//! State machine for setting the clock from two buttons.

use super::time::ClockField;

/// Whether the clock is running normally or a digit is being set.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjustState {
    #[default]
    Idle,
    Editing(ClockField),
}

impl AdjustState {
    /// The state after a "next field" press: Idle, then each field in display order, then Idle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Idle => Self::Editing(ClockField::FIRST),
            Self::Editing(field) => match field.next() {
                Some(next) => Self::Editing(next),
                None => Self::Idle,
            },
        }
    }

    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The field being set, if any.
    #[must_use]
    pub const fn field(self) -> Option<ClockField> {
        match self {
            Self::Idle => None,
            Self::Editing(field) => Some(field),
        }
    }
}
