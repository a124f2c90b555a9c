//! Fixture configuration and construction defaults.

use embassy_time::Duration;

use crate::color::Rgb;
use crate::state::LightingMode;

/// Number of LEDs on the deployed strip
pub const LED_COUNT: usize = 150;

/// Samples per spectral analysis window
pub const FFT_SIZE: usize = 256;

/// Audio sampling rate
pub const SAMPLE_RATE_HZ: u32 = 4000;

/// Full-scale reading of the 12-bit ADC, used to normalise peak magnitudes
pub const ADC_REFERENCE_MAX: f32 = 4096.0;

/// Period of the adaptive (audio) producer
pub const DEFAULT_ADAPTIVE_PERIOD: Duration = Duration::from_millis(500);

/// Period of the environmental (weather) producer
pub const DEFAULT_ENVIRONMENTAL_PERIOD: Duration = Duration::from_secs(15 * 60);

/// Initial lighting state applied once at startup
#[derive(Debug, Clone, Copy)]
pub struct LightingDefaults {
    pub power: bool,
    pub brightness: u8,
    pub hue: u16,
    pub saturation: u8,
    pub color_temperature_mireds: u32,
    pub mode: LightingMode,
    pub environmental_target: Rgb,
}

impl LightingDefaults {
    pub const DEFAULT: Self = Self {
        power: true,
        brightness: 64,
        hue: 128,
        saturation: 254,
        color_temperature_mireds: 250,
        mode: LightingMode::Manual,
        environmental_target: Rgb {
            r: 255,
            g: 180,
            b: 107,
        },
    };
}

impl Default for LightingDefaults {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the audio-reactive pipeline
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveConfig {
    /// Sampling rate of the amplitude sensor
    pub sample_rate_hz: u32,
    /// Magnitude that maps to full channel intensity
    pub reference_max: f32,
    /// How often a capture/analysis cycle runs
    pub period: Duration,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            reference_max: ADC_REFERENCE_MAX,
            period: DEFAULT_ADAPTIVE_PERIOD,
        }
    }
}

/// Configuration for the weather-driven producer
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentalConfig {
    /// How often the weather source is polled
    pub period: Duration,
}

impl Default for EnvironmentalConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_ENVIRONMENTAL_PERIOD,
        }
    }
}
