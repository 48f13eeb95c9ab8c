//! The doorbell state machine.
//!
//! Provides [`Doorbell`], which owns every piece of mutable device state:
//! the Idle/Ring/Notify mode, frame counter, animation selection, timeout,
//! idle color and the input latches. It is driven by the scheduler in two
//! phases: inputs between frames, then one [`Doorbell::frame`] call at each
//! frame boundary.

use crate::animation::{ANIMATION_COUNT, Animation};
use crate::colors::{OFF, WHITE};
use crate::command::Command;
use crate::config::{DoorbellConfig, MIRROR_LEDS};
use crate::input::{EdgeDetector, LineDecoder};
use crate::notification::Comet;
use crate::pixels::PixelBuffer;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{DeviceState, Rgbw};

/// Mirror index the notification comet is launched from.
pub const NOTIFY_ORIGIN: usize = 0;

/// Active mode together with the state only that mode needs.
#[derive(Debug, Clone)]
enum Mode {
    Idle,
    Ring,
    Notify(Comet<MIRROR_LEDS>),
}

impl Mode {
    fn state(&self) -> DeviceState {
        match self {
            Mode::Idle => DeviceState::Idle,
            Mode::Ring => DeviceState::Ring,
            Mode::Notify(_) => DeviceState::Notify,
        }
    }
}

/// Controls the mirror and button rings from button presses and host
/// commands.
///
/// # Type Parameters
/// * `I` - Time instant type
pub struct Doorbell<I: TimeInstant> {
    config: DoorbellConfig,
    animations: [Animation; ANIMATION_COUNT],
    mode: Mode,
    current_frame: u16,
    current_animation: usize,
    next_timeout: Option<I>,
    idle_color: Rgbw,
    press_latched: bool,
    button: EdgeDetector,
    decoder: LineDecoder,
}

impl<I: TimeInstant> Doorbell<I> {
    /// Creates an idle doorbell with the idle color off.
    pub fn new(config: DoorbellConfig) -> Self {
        Self {
            config,
            animations: Animation::table(config.frame_rate()),
            mode: Mode::Idle,
            current_frame: 0,
            current_animation: 0,
            next_timeout: None,
            idle_color: OFF,
            press_latched: false,
            button: EdgeDetector::new(),
            decoder: LineDecoder::new(),
        }
    }

    /// Samples the button level; latches a press on a released-to-pressed
    /// edge unless already ringing.
    ///
    /// The latched press is applied at the next frame boundary. Returns
    /// true if this sample latched a press.
    pub fn sample_button(&mut self, pressed: bool) -> bool {
        let edge = self.button.sample(pressed);
        if edge && !matches!(self.mode, Mode::Ring) {
            self.press_latched = true;
            return true;
        }
        false
    }

    /// Feeds one serial byte; a completed command takes effect immediately.
    pub fn receive_byte(&mut self, byte: u8, now: I) -> Option<Command> {
        let command = self.decoder.push(byte)?;
        self.apply(command, now);
        Some(command)
    }

    /// Applies a host command.
    ///
    /// Commands override whatever is running and discard a press latched
    /// earlier in the same frame.
    pub fn apply(&mut self, command: Command, now: I) {
        self.press_latched = false;
        match command {
            Command::SetIdleColor(color) => {
                self.idle_color = color;
                self.enter_idle();
            }
            Command::Notify => self.enter_notify(now),
        }
    }

    /// Frame-boundary transitions: a latched press starts a ring, otherwise
    /// an elapsed timeout returns to Idle.
    pub fn update(&mut self, now: I) {
        if self.press_latched {
            self.press_latched = false;
            self.enter_ring(now);
        } else if self.next_timeout.is_some_and(|deadline| now >= deadline) {
            self.enter_idle();
        }
    }

    /// Renders the current frame into both zones.
    pub fn render(&mut self, pixels: &mut PixelBuffer) {
        let frame = self.current_frame;
        match &mut self.mode {
            Mode::Idle => {
                pixels.button_mut().fill(self.idle_color);
                pixels.mirror_mut().fill(OFF);
            }
            Mode::Ring => {
                pixels.button_mut().fill(WHITE);
                self.animations[self.current_animation].render(frame, pixels.mirror_mut());
            }
            Mode::Notify(comet) => {
                pixels.button_mut().fill(self.idle_color);
                comet.render(frame, pixels.mirror_mut());
            }
        }
    }

    /// Runs one frame: transitions, rendering, then frame counter advance.
    pub fn frame(&mut self, now: I, pixels: &mut PixelBuffer) {
        self.update(now);
        self.render(pixels);
        self.current_frame = self.current_frame.wrapping_add(1);
    }

    /// Returns the current state.
    pub fn state(&self) -> DeviceState {
        self.mode.state()
    }

    /// Frames rendered since the current state was entered.
    pub fn current_frame(&self) -> u16 {
        self.current_frame
    }

    /// Index into [`Animation::table`] of the ring animation.
    pub fn current_animation(&self) -> usize {
        self.current_animation
    }

    /// The animation played on the next or current ring.
    pub fn animation(&self) -> Animation {
        self.animations[self.current_animation]
    }

    /// Instant at which Ring or Notify returns to Idle.
    pub fn next_timeout(&self) -> Option<I> {
        self.next_timeout
    }

    pub fn idle_color(&self) -> Rgbw {
        self.idle_color
    }

    /// Returns true if a press is waiting for the next frame boundary.
    pub fn is_press_latched(&self) -> bool {
        self.press_latched
    }

    /// The notification comet, while notifying.
    pub fn comet(&self) -> Option<&Comet<MIRROR_LEDS>> {
        match &self.mode {
            Mode::Notify(comet) => Some(comet),
            _ => None,
        }
    }

    fn enter_ring(&mut self, now: I) {
        self.current_animation = (self.current_animation + 1) % ANIMATION_COUNT;
        let duration = I::Duration::from_millis(self.config.ring_duration_ms());
        self.transition(Mode::Ring, Some(deadline(now, duration)));
    }

    fn enter_notify(&mut self, now: I) {
        let duration = I::Duration::from_millis(self.config.notify_duration_ms());
        self.transition(
            Mode::Notify(Comet::new(NOTIFY_ORIGIN)),
            Some(deadline(now, duration)),
        );
    }

    fn enter_idle(&mut self) {
        self.transition(Mode::Idle, None);
    }

    fn transition(&mut self, mode: Mode, timeout: Option<I>) {
        #[cfg(feature = "defmt")]
        defmt::debug!("doorbell: {} -> {}", self.mode.state(), mode.state());

        self.mode = mode;
        self.next_timeout = timeout;
        self.current_frame = 0;
    }
}

/// `now + duration`; on overflow the deadline is `now`, ending the state at
/// the next frame instead of never.
fn deadline<I: TimeInstant>(now: I, duration: I::Duration) -> I {
    now.checked_add(duration).unwrap_or(now)
}
