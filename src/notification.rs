//! Notification animation: a white comet bouncing around the mirror ring
//! with a fading rainbow trail.
//!
//! The comet's position is a 1-D coordinate pulled toward its origin by a
//! constant force, so it swings back and forth like a ball in a V-shaped
//! valley. [`POSITION_SPAN`] position units make one full turn of the ring;
//! the swing is confined to half a turn on either side of the origin.

use crate::colors::{WHITE, hue_wheel, pixel_hue};
use crate::pixels::Zone;

/// Position units per full revolution of the ring.
pub const POSITION_SPAN: i32 = 400;

/// Velocity the comet is launched with on notification entry.
pub const LAUNCH_VELOCITY: i32 = 18;

/// Per-frame multiplicative decay of the trail.
pub const TRAIL_DECAY: f32 = 0.95;

/// State of one notification episode.
///
/// Created when the doorbell enters Notify and dropped when it leaves, so
/// every notification starts from the same launch.
#[derive(Debug, Clone, PartialEq)]
pub struct Comet<const N: usize> {
    position: i32,
    velocity: i32,
    origin: usize,
    index: usize,
    trail: [f32; N],
    launched: bool,
}

impl<const N: usize> Comet<N> {
    /// Launches a comet from ring index `origin` at [`LAUNCH_VELOCITY`].
    pub fn new(origin: usize) -> Self {
        Self::with_velocity(origin, LAUNCH_VELOCITY)
    }

    /// Launches a comet from ring index `origin` with an initial velocity in
    /// position units per frame.
    ///
    /// At [`LAUNCH_VELOCITY`] the swing peaks short of the antipode; faster
    /// launches reach it and bounce back.
    pub fn with_velocity(origin: usize, velocity: i32) -> Self {
        let origin = origin % N.max(1);
        let mut trail = [0.0; N];
        if let Some(head) = trail.get_mut(origin) {
            *head = 1.0;
        }
        Self {
            position: 0,
            velocity,
            origin,
            index: origin,
            trail,
            launched: false,
        }
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    /// Ring index of the comet head.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Trail brightness per pixel, 0.0-1.0.
    pub fn trail(&self) -> &[f32; N] {
        &self.trail
    }

    /// Advances the simulation by one frame.
    ///
    /// Decays the trail, moves the comet and relights every pixel it swept
    /// over, so fast passes leave no gaps.
    pub fn step(&mut self) {
        if N == 0 {
            return;
        }

        for brightness in self.trail.iter_mut() {
            *brightness *= TRAIL_DECAY;
        }

        let previous_index = self.index;

        self.velocity += if self.position > 0 { -1 } else { 1 };
        self.position += self.velocity;

        // Reflect off the antipode instead of lapping the ring.
        let limit = POSITION_SPAN / 2;
        if self.position > limit {
            self.position = 2 * limit - self.position;
            self.velocity = -self.velocity;
        } else if self.position < -limit {
            self.position = -2 * limit - self.position;
            self.velocity = -self.velocity;
        }

        self.index = self.ring_index(self.position);
        self.sweep(previous_index, self.index);
    }

    /// Maps a position to a ring index, normalizing negative offsets.
    pub fn ring_index(&self, position: i32) -> usize {
        let n = N as i32;
        let offset = position * n / POSITION_SPAN;
        (offset + self.origin as i32).rem_euclid(n) as usize
    }

    /// Lights every index from `from` to `to` along the shorter way round.
    fn sweep(&mut self, from: usize, to: usize) {
        let n = N as i32;
        let delta = (to as i32 - from as i32 + n / 2).rem_euclid(n) - n / 2;
        let direction = delta.signum();

        let mut current = from as i32;
        for _ in 0..delta.abs() {
            current = (current + direction).rem_euclid(n);
            self.trail[current as usize] = 1.0;
        }
        self.trail[to] = 1.0;
    }

    /// Renders the comet: the head is pure white, every other pixel its
    /// rotating hue dimmed by the trail.
    ///
    /// The first call draws the launch state as constructed; every later
    /// call steps the simulation first.
    pub fn render(&mut self, frame: u16, zone: &mut Zone<N>) {
        if self.launched {
            self.step();
        }
        self.launched = true;
        for (i, brightness) in self.trail.iter().enumerate() {
            let color = if i == self.index {
                WHITE
            } else {
                hue_wheel(pixel_hue(frame, i, N)).scale(*brightness)
            };
            zone.set(i, color);
        }
    }
}
