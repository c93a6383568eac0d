use embassy_time::Duration;

pub const ONE_SECOND: Duration = Duration::from_secs(1);

/// How long each digit stays lit before the multiplexer moves to the next one.
pub const MULTIPLEX_SLEEP: Duration = Duration::from_millis(5);

/// How long a raw button reading must hold before it counts.
pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(50);

/// How often the foreground loop samples the buttons.
pub const BUTTON_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Time shown at power-up, as `HHMM`. Set with the `CLOCK_START` environment variable at build
/// time.
pub const CLOCK_START: &str = env!("CLOCK_START");
