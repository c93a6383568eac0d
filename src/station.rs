//! The top-level context tying the clock, buttons, temperature and display together.
//!
//! A [`Station`] is driven by two periodic events: [`on_second`](Station::on_second) once a
//! second and [`on_poll`](Station::on_poll) on every button poll. Whenever what should be shown
//! changes, it commits a whole new buffer to the shared [`DisplayMemory`].

use embassy_time::Instant;

use crate::button::Buttons;
use crate::clock::time::ClockTime;
use crate::clock::{Clock, ClockCommand};
use crate::temperature::Celsius;
use crate::{ActiveLevel, DisplayBuffer, DisplayMemory};

/// The number of buttons on the station.
pub const KEY_COUNT: usize = 3;

/// Shown in temperature mode before the first reading arrives.
const NO_READING: &str = "----";

/// The station's buttons, in priority order.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Starts setting the clock, then moves from digit to digit.
    Next,
    /// Adds one to the digit being set.
    Increment,
    /// Switches between the clock and temperature readouts.
    Mode,
}

impl Key {
    /// All keys, highest priority first. Readings passed to [`Station::on_poll`] use this order.
    pub const ALL: [Self; KEY_COUNT] = [Self::Next, Self::Increment, Self::Mode];
}

/// What the display shows while the clock is not being set.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Clock,
    Temperature,
}

impl DisplayMode {
    const fn toggle(self) -> Self {
        match self {
            Self::Clock => Self::Temperature,
            Self::Temperature => Self::Clock,
        }
    }
}

pub struct Station<'a> {
    clock: Clock,
    buttons: Buttons<KEY_COUNT>,
    mode: DisplayMode,
    temperature: Option<Celsius>,
    memory: &'a DisplayMemory,
}

impl<'a> Station<'a> {
    #[must_use]
    pub const fn new(
        start: ClockTime,
        button_level: ActiveLevel,
        memory: &'a DisplayMemory,
    ) -> Self {
        Self {
            clock: Clock::new(start),
            buttons: Buttons::new(button_level),
            mode: DisplayMode::Clock,
            temperature: None,
            memory,
        }
    }

    /// The once-a-second tick. Publishes only while the clock is not being set, so the digits
    /// under edit are not overwritten.
    pub fn on_second(&mut self) {
        ClockCommand::Tick.apply(&mut self.clock);
        if self.clock.is_idle() {
            self.publish();
        }
    }

    /// Feeds one raw reading per key (in [`Key::ALL`] order) and acts on the press, if any.
    pub fn on_poll(&mut self, readings: [bool; KEY_COUNT], now: Instant) -> Option<Key> {
        let key = self
            .buttons
            .poll(readings, now)
            .and_then(|index| Key::ALL.get(index).copied())?;
        self.on_key(key);
        Some(key)
    }

    /// Acts on a debounced key press and publishes the result.
    pub fn on_key(&mut self, key: Key) {
        #[cfg(feature = "defmt")]
        defmt::info!("key {:?} in {:?}", key, self.clock.state());
        match key {
            Key::Next => ClockCommand::NextField.apply(&mut self.clock),
            Key::Increment => ClockCommand::IncrementField.apply(&mut self.clock),
            Key::Mode if self.clock.is_idle() => self.mode = self.mode.toggle(),
            Key::Mode => {}
        }
        self.publish();
    }

    /// Records the latest temperature reading. Publishes if it is on screen.
    pub fn set_temperature(&mut self, temperature: Option<Celsius>) {
        self.temperature = temperature;
        if self.clock.is_idle() && self.mode == DisplayMode::Temperature {
            self.publish();
        }
    }

    /// What the display should show right now.
    #[must_use]
    pub fn render(&self) -> DisplayBuffer {
        if !self.clock.is_idle() {
            return self.clock.render();
        }
        match (self.mode, self.temperature) {
            (DisplayMode::Clock, _) => self.clock.render(),
            (DisplayMode::Temperature, Some(temperature)) => temperature.render(),
            (DisplayMode::Temperature, None) => DisplayBuffer::from_text(NO_READING),
        }
    }

    /// Commits [`render`](Self::render) to the display memory.
    pub fn publish(&self) {
        self.memory.commit(self.render());
    }

    #[must_use]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;
    use crate::clock::state::AdjustState;
    use crate::clock::time::ClockField;

    const UP: bool = true;
    const DOWN: bool = false;

    fn readings(key: Option<Key>) -> [bool; KEY_COUNT] {
        Key::ALL.map(|candidate| if Some(candidate) == key { DOWN } else { UP })
    }

    /// Presses and releases `key` starting at `*now` ms, polling every 10 ms.
    fn press(station: &mut Station<'_>, key: Key, now: &mut u64) -> Option<Key> {
        let mut seen = None;
        for held in [Some(key), None] {
            for _ in 0..10 {
                seen = seen.or(station.on_poll(readings(held), Instant::from_millis(*now)));
                *now += 10;
            }
        }
        seen
    }

    fn station(memory: &DisplayMemory) -> Station<'_> {
        let start = ClockTime::from_hms(23, 59, 0).expect("valid time");
        Station::new(start, ActiveLevel::Low, memory)
    }

    #[test]
    fn test_second_publishes_clock() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        station.on_second();
        assert_eq!(memory.load(), DisplayBuffer::from_text("2359"));
        station.on_second();
        assert_eq!(memory.load(), DisplayBuffer::from_text("23.59"));
    }

    #[test]
    fn test_press_is_reported_once() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        let mut now = 0;
        assert_eq!(press(&mut station, Key::Next, &mut now), Some(Key::Next));
        assert_eq!(
            station.clock().state(),
            AdjustState::Editing(ClockField::HoursTens)
        );
        assert_eq!(memory.load(), DisplayBuffer::from_text("2.359"));
    }

    #[test]
    fn test_ticks_do_not_overwrite_edit() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        let mut now = 0;
        press(&mut station, Key::Next, &mut now);
        press(&mut station, Key::Increment, &mut now);
        let editing = memory.load();
        assert_eq!(editing, DisplayBuffer::from_text("0.359"));
        station.on_second();
        assert_eq!(memory.load(), editing);
    }

    #[test]
    fn test_full_adjust_cycle_keeps_time() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        let mut now = 0;
        for _ in 0..5 {
            press(&mut station, Key::Next, &mut now);
        }
        assert!(station.clock().is_idle());
        assert_eq!(
            station.clock().time(),
            ClockTime::from_hms(23, 59, 0).expect("valid time")
        );
    }

    #[test]
    fn test_mode_switches_to_temperature() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        let mut now = 0;
        press(&mut station, Key::Mode, &mut now);
        assert_eq!(station.mode(), DisplayMode::Temperature);
        assert_eq!(memory.load(), DisplayBuffer::from_text(NO_READING));

        station.set_temperature(Some(Celsius::from_tenths(-52)));
        assert_eq!(memory.load(), DisplayBuffer::from_text("-5.2*"));

        press(&mut station, Key::Mode, &mut now);
        assert_eq!(station.mode(), DisplayMode::Clock);
    }

    #[test]
    fn test_sensor_sample_each_second() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        station.on_key(Key::Mode);

        let reading = Celsius::from_sensor_reading(876);
        station.set_temperature(Some(reading));
        station.on_second();
        assert_eq!(memory.load(), reading.render());
        assert_ne!(memory.load(), DisplayBuffer::ERROR);

        // A failed sample clears the stale reading.
        station.set_temperature(None);
        station.on_second();
        assert_eq!(memory.load(), DisplayBuffer::from_text(NO_READING));
    }

    #[test]
    fn test_mode_ignored_while_setting() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        station.on_key(Key::Next);
        station.on_key(Key::Mode);
        assert_eq!(station.mode(), DisplayMode::Clock);
    }

    #[test]
    fn test_increment_while_idle_does_nothing() {
        let memory = DisplayMemory::new();
        let mut station = station(&memory);
        station.on_key(Key::Increment);
        assert!(station.clock().is_idle());
        assert_eq!(
            station.clock().time(),
            ClockTime::from_hms(23, 59, 0).expect("valid time")
        );
    }
}
