//! Two-zone pixel buffer and the LED strip abstraction.
//!
//! The mirror ring and the button ring are daisy-chained on one data line,
//! mirror first. Animations and the state machine write into a [`Zone`]
//! using zone-local indices; the chain offset is applied only when the
//! buffer is committed to the strip.

use crate::colors::OFF;
use crate::config::{BUTTON_LEDS, MIRROR_LEDS};
use crate::types::Rgbw;

/// Trait for abstracting the addressable LED strip driver.
///
/// Implement this for your strip hardware (PIO, SPI, bit-banged, etc.).
/// Pixel writes are buffered by the driver and only reach the LEDs on
/// [`show`](LedStrip::show). Handle hardware errors internally - these
/// methods cannot fail.
pub trait LedStrip {
    /// Buffers the color of the pixel at `index` on the chain.
    fn set_pixel(&mut self, index: usize, color: Rgbw);

    /// Transmits the buffered pixels to the LEDs.
    fn show(&mut self);

    /// Sets the global brightness (0-255) applied when transmitting.
    fn set_brightness(&mut self, brightness: u8);

    /// Number of pixels on the chain.
    fn num_pixels(&self) -> usize;
}

/// A fixed-size run of pixels addressed from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone<const N: usize> {
    pixels: [Rgbw; N],
}

impl<const N: usize> Zone<N> {
    /// Creates a zone with every pixel off.
    pub const fn new() -> Self {
        Self { pixels: [OFF; N] }
    }

    /// Number of pixels in the zone.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Sets one pixel. Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Returns one pixel, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgbw> {
        self.pixels.get(index).copied()
    }

    /// Sets every pixel to the same color.
    pub fn fill(&mut self, color: Rgbw) {
        self.pixels = [color; N];
    }

    pub fn as_slice(&self) -> &[Rgbw] {
        &self.pixels
    }
}

impl<const N: usize> Default for Zone<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The full chain: mirror ring followed by button ring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    mirror: Zone<MIRROR_LEDS>,
    button: Zone<BUTTON_LEDS>,
}

impl PixelBuffer {
    /// Creates a buffer with every pixel off.
    pub const fn new() -> Self {
        Self {
            mirror: Zone::new(),
            button: Zone::new(),
        }
    }

    pub fn mirror(&self) -> &Zone<MIRROR_LEDS> {
        &self.mirror
    }

    pub fn mirror_mut(&mut self) -> &mut Zone<MIRROR_LEDS> {
        &mut self.mirror
    }

    pub fn button(&self) -> &Zone<BUTTON_LEDS> {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut Zone<BUTTON_LEDS> {
        &mut self.button
    }

    /// Writes both zones to the strip at their chain offsets and shows them.
    ///
    /// Pixels beyond the strip's [`num_pixels`](LedStrip::num_pixels) are
    /// skipped, so a shorter test strip never sees out-of-range indices.
    pub fn commit<S: LedStrip>(&self, strip: &mut S) {
        let available = strip.num_pixels();
        let chain = self
            .mirror
            .as_slice()
            .iter()
            .chain(self.button.as_slice())
            .take(available);

        for (index, color) in chain.enumerate() {
            strip.set_pixel(index, *color);
        }
        strip.show();
    }
}
