use embedded_hal::digital::PinState;

/// The electrical level at which a line counts as "on".
///
/// Common-cathode digit lines and buttons with pull-ups are [`ActiveLevel::Low`]; segment lines
/// driven straight from the MCU are usually [`ActiveLevel::High`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveLevel {
    Low,
    #[default]
    High,
}

impl ActiveLevel {
    /// The pin state that makes the line on (`true`) or off (`false`).
    #[must_use]
    pub const fn pin_state(self, on: bool) -> PinState {
        match (self, on) {
            (Self::High, true) | (Self::Low, false) => PinState::High,
            (Self::High, false) | (Self::Low, true) => PinState::Low,
        }
    }

    /// Whether a pin reading `is_high` means the line is on.
    #[must_use]
    pub const fn is_active(self, is_high: bool) -> bool {
        match self {
            Self::High => is_high,
            Self::Low => !is_high,
        }
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_pin_state() {
        assert_eq!(ActiveLevel::High.pin_state(true), PinState::High);
        assert_eq!(ActiveLevel::Low.pin_state(true), PinState::Low);
        assert_eq!(ActiveLevel::Low.pin_state(false), PinState::High);
    }

    #[test]
    fn test_is_active() {
        assert!(ActiveLevel::Low.is_active(false));
        assert!(!ActiveLevel::Low.is_active(true));
        assert!(ActiveLevel::High.is_active(true));
    }
}
