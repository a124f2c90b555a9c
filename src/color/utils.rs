pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::Rgb,
    math8::{blend8, scale8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel of a color by a brightness value (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_color(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}

/// Map a hue in degrees (0-359) onto the 0-255 wheel used by `smart_leds::hsv::Hsv`.
///
/// Values above 359 wrap around the circle.
#[allow(clippy::cast_possible_truncation)]
pub const fn hue_to_hue8(degrees: u16) -> u8 {
    let degrees = (degrees % 360) as u32;
    ((degrees * 256) / 360) as u8
}
