//! The display buffer shared between the code that decides what to show and the
//! multiplexing loop that shows it.

use core::cell::Cell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::DisplayBuffer;

/// Holds the most recently committed [`DisplayBuffer`].
///
/// Writers [`commit`](Self::commit) a whole buffer and the multiplexer [`load`](Self::load)s a
/// whole buffer, each inside a critical section, so the multiplexer never sees a buffer that is
/// half old and half new.
///
/// ```
/// use led4_clock::{DisplayBuffer, DisplayMemory};
///
/// static DISPLAY_MEMORY: DisplayMemory = DisplayMemory::new();
///
/// DISPLAY_MEMORY.write_text("12.34");
/// assert_eq!(DISPLAY_MEMORY.load(), DisplayBuffer::from_text("12.34"));
/// ```
pub struct DisplayMemory(Mutex<CriticalSectionRawMutex, Cell<DisplayBuffer>>);

impl DisplayMemory {
    #[must_use]
    pub const fn new() -> Self {
        Self(Mutex::new(Cell::new(DisplayBuffer::BLANK)))
    }

    /// Publishes `buffer` to the multiplexer.
    pub fn commit(&self, buffer: DisplayBuffer) {
        self.0.lock(|cell| cell.set(buffer));
    }

    /// Encodes `text` (see [`DisplayBuffer::from_text`]) and publishes it.
    pub fn write_text(&self, text: &str) {
        self.commit(DisplayBuffer::from_text(text));
    }

    /// Copies out the most recently committed buffer.
    #[must_use]
    pub fn load(&self) -> DisplayBuffer {
        self.0.lock(Cell::get)
    }
}

impl Default for DisplayMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_starts_blank() {
        assert_eq!(DisplayMemory::new().load(), DisplayBuffer::BLANK);
    }

    #[test]
    fn test_latest_commit_wins() {
        let memory = DisplayMemory::new();
        memory.write_text("1111");
        memory.write_text("2222");
        assert_eq!(memory.load(), DisplayBuffer::from_text("2222"));
    }

    #[test]
    fn test_bad_text_commits_error_pattern() {
        let memory = DisplayMemory::new();
        memory.write_text("too long!");
        assert_eq!(memory.load(), DisplayBuffer::ERROR);
    }
}
