//! Button-press animations for the mirror ring.
//!
//! Each animation is a pure function of the frame index: rendering frame
//! `n` always produces the same pixels, whatever was rendered before. The
//! stateful notification comet lives in [`crate::notification`].

use crate::colors::{OFF, WHITE, gamma8, hue_wheel, pixel_hue};
use crate::pixels::Zone;
use crate::types::Rgbw;

/// Number of entries in the animation table.
pub const ANIMATION_COUNT: usize = 4;

/// Frames each theatre-chase phase is held for.
const CHASE_HOLD_FRAMES: u16 = 2;

/// Lit pixel spacing of the theatre chase.
const CHASE_SPACING: usize = 3;

/// A mirror-ring animation selectable by a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    /// The full color wheel spread around the ring, rotating.
    Rainbow,
    /// Every third pixel lit white, marching around the ring.
    TheatreChase,
    /// Theatre chase with lit pixels taking their rainbow hue.
    TheatreChaseRainbow,
    /// The whole ring breathing on the white channel.
    PulseWhite(Pulse),
}

impl Animation {
    /// The round-robin animation table for the given frame rate.
    pub fn table(frame_rate: u16) -> [Animation; ANIMATION_COUNT] {
        [
            Animation::Rainbow,
            Animation::TheatreChase,
            Animation::TheatreChaseRainbow,
            Animation::PulseWhite(Pulse::for_frame_rate(frame_rate)),
        ]
    }

    /// Renders `frame` into every pixel of the zone.
    pub fn render<const N: usize>(&self, frame: u16, zone: &mut Zone<N>) {
        match self {
            Animation::Rainbow => rainbow(frame, zone),
            Animation::TheatreChase => theatre_chase(frame, zone, |_| WHITE),
            Animation::TheatreChaseRainbow => {
                theatre_chase(frame, zone, |i| hue_wheel(pixel_hue(frame, i, N)))
            }
            Animation::PulseWhite(pulse) => zone.fill(pulse.color_at(frame)),
        }
    }
}

fn rainbow<const N: usize>(frame: u16, zone: &mut Zone<N>) {
    for i in 0..N {
        zone.set(i, hue_wheel(pixel_hue(frame, i, N)));
    }
}

/// Phase of the chase at `frame`: which residue mod 3 is lit.
#[inline]
pub fn chase_phase(frame: u16) -> usize {
    usize::from(frame / CHASE_HOLD_FRAMES) % CHASE_SPACING
}

fn theatre_chase<const N: usize>(frame: u16, zone: &mut Zone<N>, lit: impl Fn(usize) -> Rgbw) {
    let phase = chase_phase(frame);
    for i in 0..N {
        let color = if i % CHASE_SPACING == phase { lit(i) } else { OFF };
        zone.set(i, color);
    }
}

/// Asymmetric white pulse: a fast linear attack followed by a slower decay.
///
/// At 20 fps the attack takes 10 frames and the decay 20, a 1.5 s period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    ramp_up: u16,
    ramp_down: u16,
}

impl Pulse {
    /// Attack over half a second, decay over one second.
    ///
    /// Frame rates are validated by [`crate::config::ConfigBuilder`]; any
    /// value here is clamped so both ramps have a non-zero step.
    pub fn for_frame_rate(frame_rate: u16) -> Self {
        let rate = frame_rate.clamp(2, 255);
        Self {
            ramp_up: rate / 2,
            ramp_down: rate,
        }
    }

    /// Frames in one full pulse.
    #[inline]
    pub fn period(&self) -> u16 {
        self.ramp_up + self.ramp_down
    }

    /// Linear (pre-gamma) brightness at `frame`.
    pub fn brightness_at(&self, frame: u16) -> u8 {
        let step_up = 255 / self.ramp_up;
        let step_down = 255 / self.ramp_down;

        let frame = frame % self.period();
        if frame < self.ramp_up {
            (step_up * frame) as u8
        } else {
            (255 - step_down * (frame - self.ramp_up)) as u8
        }
    }

    /// White-only, gamma-corrected color at `frame`.
    pub fn color_at(&self, frame: u16) -> Rgbw {
        Rgbw::new(0, 0, 0, gamma8(self.brightness_at(frame)))
    }
}
