//! Fixed-rate frame scheduler and the control loop that drives the hardware.
//!
//! The loop is single-threaded and polled: between frame boundaries it
//! samples the button and one serial byte, then sleeps for the poll
//! interval. At each boundary it renders one frame and flushes it to the
//! strip. [`Runner`] is the only writer of the doorbell state and the pixel
//! buffer.

use crate::config::DoorbellConfig;
use crate::doorbell::Doorbell;
use crate::input::SerialRx;
use crate::pixels::{LedStrip, PixelBuffer};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, StatefulOutputPin};

/// Tracks the deadline of the next frame.
///
/// Deadlines advance by exactly one period from the previous deadline, not
/// from the current time, so frame timing does not drift. When the loop
/// falls more than a period behind, the missed frames are skipped rather
/// than rendered back to back.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock<I: TimeInstant> {
    period: I::Duration,
    next_frame: I,
}

impl<I: TimeInstant> FrameClock<I> {
    /// Creates a clock whose first frame is due at `start`.
    pub fn new(start: I, period: I::Duration) -> Self {
        Self {
            period,
            next_frame: start,
        }
    }

    /// Deadline of the next frame.
    pub fn next_frame(&self) -> I {
        self.next_frame
    }

    pub fn period(&self) -> I::Duration {
        self.period
    }

    /// Returns true if a frame is due at `now`, advancing the deadline.
    pub fn poll(&mut self, now: I) -> bool {
        if now < self.next_frame {
            return false;
        }

        let period_us = self.period.as_micros().max(1);
        let behind_us = now.duration_since(self.next_frame).as_micros();
        let periods = behind_us / period_us + 1;

        let step = I::Duration::from_micros(periods.saturating_mul(period_us));
        self.next_frame = self.next_frame.checked_add(step).unwrap_or(now);
        true
    }
}

/// Owns the hardware collaborators and runs the doorbell forever.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `S` - LED strip implementation type
/// * `B` - Button input pin (active low)
/// * `H` - Heartbeat output pin, toggled every frame
/// * `R` - Serial receiver
/// * `D` - Delay used between input polls
pub struct Runner<'t, I, T, S, B, H, R, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: InputPin,
    H: StatefulOutputPin,
    R: SerialRx,
    D: DelayNs,
{
    time_source: &'t T,
    strip: S,
    button: B,
    heartbeat: H,
    serial: R,
    delay: D,
    doorbell: Doorbell<I>,
    clock: FrameClock<I>,
    pixels: PixelBuffer,
    poll_interval_us: u32,
}

impl<'t, I, T, S, B, H, R, D> Runner<'t, I, T, S, B, H, R, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: InputPin,
    H: StatefulOutputPin,
    R: SerialRx,
    D: DelayNs,
{
    /// Blanks the strip, applies the configured brightness and schedules
    /// the first frame for now.
    pub fn new(
        config: DoorbellConfig,
        time_source: &'t T,
        mut strip: S,
        button: B,
        heartbeat: H,
        serial: R,
        delay: D,
    ) -> Self {
        let pixels = PixelBuffer::new();
        pixels.commit(&mut strip);
        strip.set_brightness(config.brightness());

        let period = I::Duration::from_micros(config.frame_period_us());
        let clock = FrameClock::new(time_source.now(), period);

        Self {
            time_source,
            strip,
            button,
            heartbeat,
            serial,
            delay,
            doorbell: Doorbell::new(config),
            clock,
            pixels,
            poll_interval_us: config.poll_interval_us(),
        }
    }

    /// Runs one iteration of the control loop.
    ///
    /// Returns true if a frame was rendered, false if only inputs were
    /// polled.
    pub fn tick(&mut self) -> bool {
        let now = self.time_source.now();
        if !self.clock.poll(now) {
            self.poll_inputs(now);
            self.delay.delay_us(self.poll_interval_us);
            return false;
        }

        // A failed heartbeat write is ignored; the frame still renders.
        let _ = self.heartbeat.toggle();

        self.doorbell.frame(now, &mut self.pixels);
        self.pixels.commit(&mut self.strip);
        true
    }

    /// Runs the control loop forever.
    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }

    fn poll_inputs(&mut self, now: I) {
        // A failed pin read counts as released.
        let pressed = self.button.is_low().unwrap_or(false);
        self.doorbell.sample_button(pressed);

        if let Some(byte) = self.serial.read_byte() {
            self.doorbell.receive_byte(byte, now);
        }
    }

    pub fn doorbell(&self) -> &Doorbell<I> {
        &self.doorbell
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn clock(&self) -> &FrameClock<I> {
        &self.clock
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn heartbeat(&self) -> &H {
        &self.heartbeat
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    pub fn serial_mut(&mut self) -> &mut R {
        &mut self.serial
    }
}
