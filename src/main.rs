//! A 4-digit 7-segment clock with a temperature readout, set with three buttons.
//!
//! Runs on a Raspberry Pi Pico RP2040. The display is multiplexed by its own task; the main
//! task ticks the clock once a second and polls the buttons.
#![no_std]
#![no_main]
#![expect(clippy::future_not_send, reason = "Single-threaded")]

use core::convert::Infallible;

use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::gpio::Output;
use embassy_time::{Instant, Ticker};
use led4_clock::clock::time::ClockTime;
use led4_clock::led4::{DirectPins, Led4};
use led4_clock::station::Station;
use led4_clock::{
    BUTTON_POLL_INTERVAL, CLOCK_START, DisplayMemory, Hardware, ONE_SECOND, Result,
};
use panic_probe as _;

static DISPLAY_MEMORY: DisplayMemory = DisplayMemory::new();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let Err(err) = inner_main(spawner).await;
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let mut hardware = Hardware::default();

    let led4 = Led4::new(hardware.display);
    spawner.spawn(display_task(led4, &DISPLAY_MEMORY))?;

    let start = ClockTime::parse_hhmm(CLOCK_START)?;
    info!("Starting at {}", start);
    let mut station = Station::new(start, Hardware::BUTTON_LEVEL, &DISPLAY_MEMORY);
    station.publish();

    let mut second_ticker = Ticker::every(ONE_SECOND);
    let mut poll_ticker = Ticker::every(BUTTON_POLL_INTERVAL);
    loop {
        match select(second_ticker.next(), poll_ticker.next()).await {
            Either::First(()) => {
                let temperature = hardware.temperature_sensor.read();
                if let Err(err) = &temperature {
                    warn!("{}", defmt::Display2Format(err));
                }
                station.set_temperature(temperature.ok());
                station.on_second();
                hardware.led.toggle();
            }
            Either::Second(()) => {
                let readings = hardware.buttons.read_levels()?;
                if let Some(key) = station.on_poll(readings, Instant::now()) {
                    info!("Pressed {:?}, now {:?}", key, station.clock().state());
                }
            }
        }
    }
}

#[embassy_executor::task]
async fn display_task(
    led4: Led4<DirectPins<Output<'static>, Output<'static>>>,
    memory: &'static DisplayMemory,
) -> ! {
    let Err(err) = led4.run(memory).await;
    panic!("{err}");
}
