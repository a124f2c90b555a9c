mod kelvin;
mod utils;

pub use kelvin::{
    MAX_KELVIN, MIN_KELVIN, kelvin_to_mireds, kelvin_to_rgb, mireds_to_kelvin, mireds_to_rgb,
};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{blend_colors, hsv2rgb, hue_to_hue8, scale_color};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
