use crate::color::{BLACK, Rgb};
use crate::math8::ratio8;

/// Lowest frequency of the green band; below it the color is red
pub const GREEN_BAND_HZ: f32 = 300.0;

/// Lowest frequency of the blue band
pub const BLUE_BAND_HZ: f32 = 1000.0;

/// Map a dominant frequency to a color
///
/// Three coarse bands pick a single channel: red below 300 Hz, green below
/// 1000 Hz, blue above. The channel intensity is `magnitude / reference_max`
/// of full scale, saturating at 255.
pub fn map_to_color(frequency_hz: f32, magnitude: f32, reference_max: f32) -> Rgb {
    let intensity = ratio8(magnitude / reference_max);
    let mut color = BLACK;

    if frequency_hz < GREEN_BAND_HZ {
        color.r = intensity;
    } else if frequency_hz < BLUE_BAND_HZ {
        color.g = intensity;
    } else {
        color.b = intensity;
    }

    color
}
