//! Audio-reactive pipeline
//!
//! Sampling, spectral analysis, peak extraction and frequency-to-color mapping.
//! Every stage owns a preallocated buffer that is reused on each cycle and handed
//! downstream by reference.

mod acquirer;
mod mapper;
mod peak;
mod spectrum;

pub use acquirer::{AmplitudeSensor, SampleAcquirer, SampleBuffer, SampleClock, SystemClock};
pub use mapper::{BLUE_BAND_HZ, GREEN_BAND_HZ, map_to_color};
pub use microfft::Complex32;
pub use peak::{DominantFrequency, extract_peak, strongest_bin};
pub use spectrum::{MagnitudeSpectrum, SpectralAnalyzer};
