//! Host-level tests for publishing buffers between threads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use led4_clock::{DisplayBuffer, DisplayMemory};

static DISPLAY_MEMORY: DisplayMemory = DisplayMemory::new();

#[test]
fn reader_never_sees_a_torn_buffer() {
    let first = DisplayBuffer::from_text("1234");
    let second = DisplayBuffer::from_text("HELP");
    DISPLAY_MEMORY.commit(first);

    let done = AtomicBool::new(false);
    thread::scope(|scope| {
        scope.spawn(|| {
            for round in 0..20_000 {
                DISPLAY_MEMORY.commit(if round % 2 == 0 { second } else { first });
            }
            done.store(true, Ordering::Release);
        });

        let mut reads = 0_u32;
        while !done.load(Ordering::Acquire) || reads < 1_000 {
            let buffer = DISPLAY_MEMORY.load();
            assert!(buffer == first || buffer == second, "torn read: {buffer:?}");
            reads += 1;
        }
    });
}
