//! Weather-derived target colors.

use heapless::String;

use crate::color::{Rgb, blend_colors};
use crate::math8::ratio8;

/// Maximum stored length of a weather description
pub const MAX_DESCRIPTION_LEN: usize = 32;

/// Temperature at or below which clear skies render fully cold
pub const COLD_CELSIUS: f32 = 0.0;

/// Temperature at or above which clear skies render fully warm
pub const WARM_CELSIUS: f32 = 30.0;

const THUNDERSTORM: Rgb = Rgb { r: 128, g: 0, b: 255 };
const DRIZZLE: Rgb = Rgb { r: 100, g: 180, b: 255 };
const RAIN: Rgb = Rgb { r: 0, g: 80, b: 255 };
const SNOW: Rgb = Rgb { r: 220, g: 230, b: 255 };
const ATMOSPHERE: Rgb = Rgb { r: 150, g: 150, b: 160 };
const CLOUDS: Rgb = Rgb { r: 200, g: 200, b: 200 };
const CLEAR_COLD: Rgb = Rgb { r: 150, g: 200, b: 255 };
const CLEAR_WARM: Rgb = Rgb { r: 255, g: 140, b: 0 };
const UNKNOWN: Rgb = Rgb { r: 255, g: 180, b: 107 };

/// Condition id reported when the source had no condition
pub const UNKNOWN_CONDITION: i32 = -1;

/// One weather observation
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Air temperature in degrees Celsius
    pub temperature: f32,
    /// OpenWeatherMap condition code
    pub condition_id: i32,
    /// Short condition name, truncated to [`MAX_DESCRIPTION_LEN`] bytes
    pub description: String<MAX_DESCRIPTION_LEN>,
}

impl WeatherReport {
    pub fn new(temperature: f32, condition_id: i32, description: &str) -> Self {
        let mut stored = String::new();
        for ch in description.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        Self {
            temperature,
            condition_id,
            description: stored,
        }
    }

    /// Target color for this observation
    pub fn color(&self) -> Rgb {
        environmental_color(self.temperature, self.condition_id)
    }
}

/// Source of weather observations (for example an HTTP client)
pub trait WeatherSource {
    type Error: core::fmt::Debug;

    /// Fetch the current observation
    fn fetch(&mut self) -> Result<WeatherReport, Self::Error>;
}

/// Map a weather observation to the color the fixture shows
///
/// Condition codes follow the OpenWeatherMap groups. Clear skies are tinted by
/// temperature, everything else by condition group only.
pub fn environmental_color(temperature: f32, condition_id: i32) -> Rgb {
    match condition_id {
        200..=299 => THUNDERSTORM,
        300..=399 => DRIZZLE,
        500..=599 => RAIN,
        600..=699 => SNOW,
        700..=799 => ATMOSPHERE,
        800 => clear_sky_color(temperature),
        801..=804 => CLOUDS,
        _ => UNKNOWN,
    }
}

fn clear_sky_color(temperature: f32) -> Rgb {
    let warmth = (temperature - COLD_CELSIUS) / (WARM_CELSIUS - COLD_CELSIUS);
    blend_colors(CLEAR_COLD, CLEAR_WARM, ratio8(warmth))
}
