#![no_std]

pub mod arbiter;
pub mod audio;
pub mod color;
pub mod config;
pub mod environment;
pub mod error;
pub mod fixture;
#[cfg(feature = "esp32-log")]
pub mod logging;
pub mod math8;
pub mod producer;
pub mod renderer;
pub mod scheduler;
pub mod state;

pub use arbiter::{Authority, LightingCommand};
pub use audio::{
    AmplitudeSensor, DominantFrequency, MagnitudeSpectrum, SampleAcquirer, SampleBuffer,
    SampleClock, SpectralAnalyzer, SystemClock,
};
pub use config::{AdaptiveConfig, EnvironmentalConfig, FFT_SIZE, LED_COUNT, LightingDefaults};
pub use environment::{WeatherReport, WeatherSource};
pub use error::{LightingError, RenderError, SetupError};
pub use fixture::LightFixture;
pub use producer::{AdaptiveProducer, CompanionLink, EnvironmentalProducer, Producer};
pub use renderer::{PixelSink, SmartLedsSink, StripRenderer};
pub use scheduler::{CycleScheduler, CycleTiming};
pub use state::{LightingMode, LightingState, LightingStore};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
