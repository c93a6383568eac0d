//! Pin assignments for a Raspberry Pi Pico (RP2040).

use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{self, Level};

use crate::button::InputArray;
use crate::led4::{DirectPins, OutputArray, SEGMENT_COUNT};
use crate::station::KEY_COUNT;
use crate::temperature::Celsius;
use crate::{ActiveLevel, CELL_COUNT, Error, Result};

pub struct Hardware {
    pub display: DirectPins<gpio::Output<'static>, gpio::Output<'static>>,
    /// Next, increment and mode buttons, each pulling its line to ground when pressed.
    pub buttons: InputArray<gpio::Input<'static>, KEY_COUNT>,
    pub led: gpio::Output<'static>,
    pub temperature_sensor: TemperatureSensor,
}

impl Hardware {
    /// Buttons read low when pressed.
    pub const BUTTON_LEVEL: ActiveLevel = ActiveLevel::Low;
}

/// The RP2040's on-chip temperature sensor, read through the ADC.
pub struct TemperatureSensor {
    adc: Adc<'static, adc::Blocking>,
    channel: adc::Channel<'static>,
}

impl TemperatureSensor {
    /// Samples the sensor.
    ///
    /// # Errors
    ///
    /// Returns an error if the ADC conversion fails.
    pub fn read(&mut self) -> Result<Celsius> {
        let raw = self
            .adc
            .blocking_read(&mut self.channel)
            .map_err(|_| Error::CannotReadTemperature)?;
        Ok(Celsius::from_sensor_reading(raw))
    }
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        // Common cathode: a digit is selected by pulling its line low.
        let cells: OutputArray<_, CELL_COUNT> = OutputArray::new(
            [
                gpio::Output::new(peripherals.PIN_1, Level::High),
                gpio::Output::new(peripherals.PIN_2, Level::High),
                gpio::Output::new(peripherals.PIN_3, Level::High),
                gpio::Output::new(peripherals.PIN_4, Level::High),
            ],
            ActiveLevel::Low,
        );

        let segments: OutputArray<_, SEGMENT_COUNT> = OutputArray::new(
            [
                gpio::Output::new(peripherals.PIN_5, Level::Low),
                gpio::Output::new(peripherals.PIN_6, Level::Low),
                gpio::Output::new(peripherals.PIN_7, Level::Low),
                gpio::Output::new(peripherals.PIN_8, Level::Low),
                gpio::Output::new(peripherals.PIN_9, Level::Low),
                gpio::Output::new(peripherals.PIN_10, Level::Low),
                gpio::Output::new(peripherals.PIN_11, Level::Low),
                gpio::Output::new(peripherals.PIN_12, Level::Low),
            ],
            ActiveLevel::High,
        );

        let buttons = InputArray::new([
            gpio::Input::new(peripherals.PIN_13, gpio::Pull::Up),
            gpio::Input::new(peripherals.PIN_14, gpio::Pull::Up),
            gpio::Input::new(peripherals.PIN_15, gpio::Pull::Up),
        ]);

        let led = gpio::Output::new(peripherals.PIN_25, Level::Low);

        let temperature_sensor = TemperatureSensor {
            adc: Adc::new_blocking(peripherals.ADC, adc::Config::default()),
            channel: adc::Channel::new_temp_sensor(peripherals.ADC_TEMP_SENSOR),
        };

        Self {
            display: DirectPins::new(cells, segments),
            buttons,
            led,
            temperature_sensor,
        }
    }
}
