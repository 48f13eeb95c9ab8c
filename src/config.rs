//! Firmware constants and validated runtime configuration.
//!
//! Zone sizes and the command buffer capacity are fixed at compile time
//! because they size arrays. Timing and brightness live in
//! [`DoorbellConfig`] and are checked once by [`ConfigBuilder::build`].

use crate::types::ConfigError;

/// LEDs in the mirror ring. Addressed first on the daisy chain.
pub const MIRROR_LEDS: usize = 24;

/// LEDs in the button ring. Addressed after the mirror ring.
pub const BUTTON_LEDS: usize = 12;

/// Total LEDs on the chain.
pub const TOTAL_LEDS: usize = MIRROR_LEDS + BUTTON_LEDS;

/// Maximum bytes kept from one serial command line.
pub const COMMAND_CAPACITY: usize = 16;

/// Default frame rate (frames per second).
pub const FRAME_RATE: u16 = 20;

/// Default ring animation length after a button press.
pub const RING_DURATION_MS: u64 = 5_000;

/// Default notification length after a `!` command.
pub const NOTIFY_DURATION_MS: u64 = 15_000;

/// Default sleep between input polls while waiting for the next frame.
pub const POLL_INTERVAL_US: u32 = 100;

/// Default global strip brightness.
pub const BRIGHTNESS: u8 = 10;

/// Lowest frame rate with a non-empty pulse ramp-up.
pub const MIN_FRAME_RATE: u16 = 2;

/// Highest frame rate with a non-zero pulse ramp-down step.
pub const MAX_FRAME_RATE: u16 = 255;

/// Timing and brightness settings for the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DoorbellConfig {
    frame_rate: u16,
    ring_duration_ms: u64,
    notify_duration_ms: u64,
    poll_interval_us: u32,
    brightness: u8,
}

impl Default for DoorbellConfig {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            ring_duration_ms: RING_DURATION_MS,
            notify_duration_ms: NOTIFY_DURATION_MS,
            poll_interval_us: POLL_INTERVAL_US,
            brightness: BRIGHTNESS,
        }
    }
}

impl DoorbellConfig {
    /// Creates a builder seeded with the default firmware settings.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            config: Self::default(),
        }
    }

    pub fn frame_rate(&self) -> u16 {
        self.frame_rate
    }

    /// Length of one frame in microseconds (50 000 at 20 fps).
    pub fn frame_period_us(&self) -> u64 {
        1_000_000 / u64::from(self.frame_rate)
    }

    pub fn ring_duration_ms(&self) -> u64 {
        self.ring_duration_ms
    }

    pub fn notify_duration_ms(&self) -> u64 {
        self.notify_duration_ms
    }

    pub fn poll_interval_us(&self) -> u32 {
        self.poll_interval_us
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}

/// Builder for [`DoorbellConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: DoorbellConfig,
}

impl ConfigBuilder {
    /// Sets the frame rate in frames per second.
    pub fn frame_rate(mut self, frame_rate: u16) -> Self {
        self.config.frame_rate = frame_rate;
        self
    }

    /// Sets how long a button press animation runs.
    pub fn ring_duration_ms(mut self, millis: u64) -> Self {
        self.config.ring_duration_ms = millis;
        self
    }

    /// Sets how long a notification runs.
    pub fn notify_duration_ms(mut self, millis: u64) -> Self {
        self.config.notify_duration_ms = millis;
        self
    }

    /// Sets the sleep between input polls while waiting for a frame.
    pub fn poll_interval_us(mut self, micros: u32) -> Self {
        self.config.poll_interval_us = micros;
        self
    }

    /// Sets the global strip brightness (0-255).
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.config.brightness = brightness;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// * `FrameRateTooLow` / `FrameRateTooHigh` - frame rate outside
    ///   `MIN_FRAME_RATE..=MAX_FRAME_RATE`
    /// * `DurationShorterThanFrame` - ring or notify duration under one frame
    pub fn build(self) -> Result<DoorbellConfig, ConfigError> {
        let config = self.config;

        if config.frame_rate < MIN_FRAME_RATE {
            return Err(ConfigError::FrameRateTooLow);
        }
        if config.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::FrameRateTooHigh);
        }

        let frame_us = config.frame_period_us();
        let shortest_us = config
            .ring_duration_ms
            .min(config.notify_duration_ms)
            .saturating_mul(1_000);
        if shortest_us < frame_us {
            return Err(ConfigError::DurationShorterThanFrame);
        }

        Ok(config)
    }
}
