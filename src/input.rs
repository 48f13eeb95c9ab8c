//! Polled inputs: button edge detection and the serial line decoder.
//!
//! Both are sampled from the scheduler's wait loop roughly every 100 µs.
//! There is no explicit debounce filter; contact bounce shorter than the
//! poll interval is never seen, longer bounce can produce extra edges.

use crate::command::Command;
use crate::config::COMMAND_CAPACITY;
use heapless::Vec;

/// Trait for a non-blocking serial receiver.
pub trait SerialRx {
    /// Returns the next received byte, or `None` if nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Detects released-to-pressed transitions of a sampled button level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    was_pressed: bool,
}

impl EdgeDetector {
    /// Creates a detector that assumes the button starts released.
    pub const fn new() -> Self {
        Self { was_pressed: false }
    }

    /// Records a sample and returns true on a press edge.
    ///
    /// Holding the button returns true only for the first sample.
    #[inline]
    pub fn sample(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge
    }
}

/// Accumulates serial bytes into command lines.
///
/// Bytes past the buffer capacity are dropped until the next terminator,
/// so at most `CAP` bytes of a line ever reach [`Command::parse`].
#[derive(Debug, Clone, Default)]
pub struct LineDecoder<const CAP: usize = COMMAND_CAPACITY> {
    line: Vec<u8, CAP>,
}

impl<const CAP: usize> LineDecoder<CAP> {
    pub const fn new() -> Self {
        Self { line: Vec::new() }
    }

    /// Feeds one byte; returns the command when a terminator completes a
    /// recognized line.
    ///
    /// The buffer is cleared on every terminator, recognized or not.
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        match byte {
            b'\n' | b'\r' => {
                let command = Command::parse(&self.line);
                self.line.clear();
                command
            }
            _ => {
                // Full: drop the byte.
                let _ = self.line.push(byte);
                None
            }
        }
    }

    /// Bytes of the line accumulated so far.
    pub fn pending(&self) -> &[u8] {
        &self.line
    }
}
