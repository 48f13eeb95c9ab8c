//! Serial commands understood by the doorbell.
//!
//! The host sends one command per line:
//!
//! | Line         | Effect                                   |
//! |--------------|------------------------------------------|
//! | `#RGB`       | idle color, short form, state to Idle    |
//! | `#RGBW`      | idle color with white, short form        |
//! | `#RRGGBB`    | idle color                               |
//! | `#RRGGBBWW`  | idle color with white                    |
//! | `!...`       | start a notification                     |
//!
//! Anything else is ignored. Nothing is sent back.

use crate::colors::parse_color;
use crate::types::Rgbw;

/// Leading byte of a color command.
pub const COLOR_PREFIX: u8 = b'#';

/// Leading byte of a notification command.
pub const NOTIFY_PREFIX: u8 = b'!';

/// Longest encoded command: `#RRGGBBWW\n`.
pub const MAX_ENCODED_LEN: usize = 10;

/// A decoded host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set the idle color and return to Idle.
    SetIdleColor(Rgbw),
    /// Start the notification animation.
    Notify,
}

impl Command {
    /// Interprets one complete line (terminator already stripped).
    ///
    /// Malformed colors decode to black rather than being rejected; unknown
    /// or empty lines yield `None`.
    pub fn parse(line: &[u8]) -> Option<Self> {
        match line.split_first() {
            Some((&COLOR_PREFIX, payload)) => Some(Command::SetIdleColor(parse_color(payload))),
            Some((&NOTIFY_PREFIX, _)) => Some(Command::Notify),
            _ => None,
        }
    }

    /// Writes the wire form of the command, terminator included, and
    /// returns the number of bytes written.
    ///
    /// Colors are always encoded in the 8-digit form. Returns `None` if
    /// `buf` is too small.
    pub fn encode(&self, buf: &mut [u8]) -> Option<usize> {
        match self {
            Command::SetIdleColor(color) => {
                let out = buf.get_mut(..MAX_ENCODED_LEN)?;
                out[0] = COLOR_PREFIX;
                out[1..9].copy_from_slice(&color.to_hex());
                out[9] = b'\n';
                Some(MAX_ENCODED_LEN)
            }
            Command::Notify => {
                let out = buf.get_mut(..2)?;
                out.copy_from_slice(&[NOTIFY_PREFIX, b'\n']);
                Some(2)
            }
        }
    }
}
