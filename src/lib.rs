#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Doorbell`**: The Idle / Ring / Notify state machine and everything it owns
//! - **`Runner`**: The fixed-rate control loop tying the doorbell to hardware
//! - **`FrameClock`**: Drift-free frame deadlines with skip-on-overrun
//! - **`Animation`**: The round-robin table of button-press animations
//! - **`Comet`**: The stateful bouncing-comet notification animation
//! - **`PixelBuffer`**: Mirror and button zones, committed to the strip as one chain
//! - **`LedStrip`**: Trait to implement for your addressable LED driver
//! - **`SerialRx`**: Trait to implement for your non-blocking serial receiver
//! - **`TimeSource`**: Trait to implement for your microsecond clock
//! - **`Command`**: Host commands decoded from serial lines
//!
//! Colors are 8-bit RGBW ([`Rgbw`]). The button pin, heartbeat pin and
//! delay are `embedded-hal` 1.0 traits.

pub mod animation;
pub mod colors;
pub mod command;
pub mod config;
pub mod doorbell;
pub mod input;
pub mod notification;
pub mod pixels;
pub mod scheduler;
pub mod time;
pub mod types;

pub use animation::{ANIMATION_COUNT, Animation, Pulse};
pub use colors::{OFF, WHITE, parse_color, try_parse_color};
pub use command::Command;
pub use config::{BUTTON_LEDS, COMMAND_CAPACITY, DoorbellConfig, MIRROR_LEDS, TOTAL_LEDS};
pub use doorbell::Doorbell;
pub use input::{EdgeDetector, LineDecoder, SerialRx};
pub use notification::Comet;
pub use pixels::{LedStrip, PixelBuffer, Zone};
pub use scheduler::{FrameClock, Runner};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ColorError, ConfigError, DeviceState, Rgbw};
