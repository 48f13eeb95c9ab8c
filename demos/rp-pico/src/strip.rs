use mirror_doorbell::{LedStrip, Rgbw, TOTAL_LEDS};
use smart_leds_trait::{RGBW, SmartLedsWrite, White};

/// RGBW strip implementation over any `smart-leds` writer
///
/// Pixels are staged locally and only sent to the driver on `show()`. The
/// global brightness is applied at that point, so staged colors keep their
/// full 8-bit resolution.
pub struct SmartStrip<W> {
    driver: W,
    pixels: [Rgbw; TOTAL_LEDS],
    brightness: u8,
}

impl<W> SmartStrip<W>
where
    W: SmartLedsWrite,
    RGBW<u8>: Into<W::Color>,
{
    pub fn new(driver: W) -> Self {
        Self {
            driver,
            pixels: [Rgbw::default(); TOTAL_LEDS],
            brightness: u8::MAX,
        }
    }
}

/// Scale one channel by a 0-255 brightness, full brightness leaving it intact
fn dim(value: u8, brightness: u8) -> u8 {
    ((u16::from(value) * (u16::from(brightness) + 1)) >> 8) as u8
}

impl<W> LedStrip for SmartStrip<W>
where
    W: SmartLedsWrite,
    RGBW<u8>: Into<W::Color>,
{
    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        let brightness = self.brightness;
        let frame = self.pixels.iter().map(|pixel| RGBW {
            r: dim(pixel.red, brightness),
            g: dim(pixel.green, brightness),
            b: dim(pixel.blue, brightness),
            a: White(dim(pixel.white, brightness)),
        });
        // A failed write leaves the previous frame on the strip
        let _ = self.driver.write(frame);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn num_pixels(&self) -> usize {
        TOTAL_LEDS
    }
}
