//! Color codec: hex color parsing, hue wheel and gamma correction.
//!
//! Hue angles use the 16-bit convention of addressable-LED drivers: a full
//! turn of the color wheel is 65536 steps, so hue arithmetic wraps for free
//! in a `u16`. HSV conversion goes through `palette`.

use crate::types::{ColorError, Rgbw};
use palette::{FromColor, Hsv, Srgb};

/// All channels off.
pub const OFF: Rgbw = Rgbw::new(0, 0, 0, 0);

/// Pure white from the dedicated white channel.
pub const WHITE: Rgbw = Rgbw::new(0, 0, 0, 255);

/// Hue advance per frame for rotating animations.
pub const HUE_STEP: u16 = 0x0400;

/// Exponent of the LED gamma curve.
pub const GAMMA: f32 = 2.6;

/// `round(255 * (i / 255) ^ 2.6)` for every 8-bit input.
const GAMMA_2_6_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7,
    7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, 17,
    17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25, 25, 26, 27, 27, 28, 29, 29, 30, 31,
    31, 32, 33, 34, 34, 35, 36, 37, 38, 38, 39, 40, 41, 42, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 68, 69, 70, 71, 72, 73, 75, 76, 77,
    78, 80, 81, 82, 84, 85, 86, 88, 89, 90, 92, 93, 94, 96, 97, 99, 100, 102, 103, 105, 106, 108,
    109, 111, 112, 114, 115, 117, 119, 120, 122, 124, 125, 127, 129, 130, 132, 134, 136, 137, 139,
    141, 143, 145, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 166, 168, 170, 172, 174, 176,
    178, 180, 182, 184, 186, 188, 191, 193, 195, 197, 199, 202, 204, 206, 209, 211, 213, 215, 218,
    220, 223, 225, 227, 230, 232, 235, 237, 240, 242, 245, 247, 250, 252, 255,
];

/// Maps an ASCII hex digit to its value.
#[inline]
pub fn hex_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// Parses a color payload (without the leading `#`), falling back to black.
///
/// Any malformed payload, whether an invalid digit or an unsupported
/// length, yields [`OFF`].
pub fn parse_color(text: impl AsRef<[u8]>) -> Rgbw {
    try_parse_color(text).unwrap_or(OFF)
}

/// Parses a color payload of 3 (`RGB`), 4 (`RGBW`), 6 (`RRGGBB`) or
/// 8 (`RRGGBBWW`) hex digits.
///
/// Short forms duplicate each digit into a full byte, so `"F80"` is
/// `0xFF, 0x88, 0x00`. Missing white is zero.
///
/// # Errors
/// * `UnsupportedLength` - any other length
/// * `InvalidDigit` - first non-hex character found
pub fn try_parse_color(text: impl AsRef<[u8]>) -> Result<Rgbw, ColorError> {
    let digits = text.as_ref();
    let mut channels = [0u8; 4];

    match digits.len() {
        3 | 4 => parse_short_channels(digits, &mut channels[..digits.len()])?,
        6 | 8 => parse_byte_pairs(digits, &mut channels[..digits.len() / 2])?,
        len => return Err(ColorError::UnsupportedLength(len)),
    }

    let [red, green, blue, white] = channels;
    Ok(Rgbw::new(red, green, blue, white))
}

/// One digit per channel, duplicated into both nibbles.
fn parse_short_channels(digits: &[u8], channels: &mut [u8]) -> Result<(), ColorError> {
    for (index, channel) in channels.iter_mut().enumerate() {
        let nibble = nibble_at(digits, index)?;
        *channel = (nibble << 4) | nibble;
    }
    Ok(())
}

/// Two digits per channel, high nibble first.
fn parse_byte_pairs(digits: &[u8], channels: &mut [u8]) -> Result<(), ColorError> {
    for (index, channel) in channels.iter_mut().enumerate() {
        let high = nibble_at(digits, 2 * index)?;
        let low = nibble_at(digits, 2 * index + 1)?;
        *channel = (high << 4) | low;
    }
    Ok(())
}

fn nibble_at(digits: &[u8], index: usize) -> Result<u8, ColorError> {
    hex_nibble(digits[index]).ok_or(ColorError::InvalidDigit { index })
}

/// Converts a 16-bit hue with 8-bit saturation and value to RGB.
///
/// No gamma correction is applied; see [`hue_wheel`] for display colors.
pub fn hsv(hue: u16, saturation: u8, value: u8) -> Rgbw {
    let degrees = f32::from(hue) * 360.0 / 65536.0;
    let hsv: Hsv = Hsv::new(
        degrees,
        f32::from(saturation) / 255.0,
        f32::from(value) / 255.0,
    );
    let rgb: Srgb = Srgb::from_color(hsv);
    let rgb: Srgb<u8> = rgb.into_format();
    Rgbw::rgb(rgb.red, rgb.green, rgb.blue)
}

/// Fully saturated, full value, gamma-corrected color for a hue angle.
#[inline]
pub fn hue_wheel(hue: u16) -> Rgbw {
    gamma32(hsv(hue, 255, 255))
}

/// Hue of pixel `index` out of `count` at the given frame.
///
/// The whole wheel is spread once around the ring and rotates by
/// [`HUE_STEP`] per frame.
#[inline]
pub fn pixel_hue(frame: u16, index: usize, count: usize) -> u16 {
    let offset = (index as u32 * 65_536 / count.max(1) as u32) as u16;
    frame.wrapping_mul(HUE_STEP).wrapping_add(offset)
}

/// Gamma-corrects one 8-bit channel.
#[inline]
pub fn gamma8(value: u8) -> u8 {
    GAMMA_2_6_TABLE[usize::from(value)]
}

/// Gamma-corrects every channel of a color.
pub fn gamma32(color: Rgbw) -> Rgbw {
    Rgbw::new(
        gamma8(color.red),
        gamma8(color.green),
        gamma8(color.blue),
        gamma8(color.white),
    )
}
