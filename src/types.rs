//! Core value types shared across the crate.

/// An RGBW pixel color with 8-bit channels.
///
/// The white channel drives the dedicated white die of SK6812-style LEDs and
/// is independent from the RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

impl Rgbw {
    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Creates a color with the white channel off.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Scales every channel by `brightness`, clamped to 0.0-1.0.
    pub fn scale(self, brightness: f32) -> Self {
        let factor = brightness.clamp(0.0, 1.0);
        let channel = |value: u8| (f32::from(value) * factor) as u8;
        Self::new(
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.white),
        )
    }

    /// Encodes the color as eight uppercase hex digits (`RRGGBBWW`).
    pub fn to_hex(&self) -> [u8; 8] {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
        let mut out = [0u8; 8];
        for (pair, byte) in out
            .chunks_exact_mut(2)
            .zip([self.red, self.green, self.blue, self.white])
        {
            pair[0] = DIGITS[usize::from(byte >> 4)];
            pair[1] = DIGITS[usize::from(byte & 0x0F)];
        }
        out
    }
}

/// The externally visible mode of the doorbell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Button shows the idle color, mirror is dark.
    Idle,
    /// Button pressed: button is white, mirror plays the selected animation.
    Ring,
    /// Host notification: button shows the idle color, mirror plays the comet.
    Notify,
}

/// Errors from the checked color parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Payload length is not 3, 4, 6 or 8 digits.
    UnsupportedLength(usize),

    /// A character that is not a hex digit, at the given byte index.
    InvalidDigit { index: usize },
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::UnsupportedLength(len) => {
                write!(f, "color must have 3, 4, 6 or 8 hex digits, got {}", len)
            }
            ColorError::InvalidDigit { index } => {
                write!(f, "invalid hex digit at position {}", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Frame rate below [`MIN_FRAME_RATE`](crate::config::MIN_FRAME_RATE).
    FrameRateTooLow,

    /// Frame rate above [`MAX_FRAME_RATE`](crate::config::MAX_FRAME_RATE).
    FrameRateTooHigh,

    /// A ring or notify duration shorter than one frame period.
    DurationShorterThanFrame,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::FrameRateTooLow => {
                write!(f, "frame rate must be at least {}", crate::config::MIN_FRAME_RATE)
            }
            ConfigError::FrameRateTooHigh => {
                write!(f, "frame rate must be at most {}", crate::config::MAX_FRAME_RATE)
            }
            ConfigError::DurationShorterThanFrame => {
                write!(f, "animation durations must last at least one frame")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
