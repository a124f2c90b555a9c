//! Audio-reactive producer.

use super::{CompanionLink, Producer, format_color_line};
use crate::audio::{
    AmplitudeSensor, DominantFrequency, SampleAcquirer, SampleClock, SpectralAnalyzer,
    extract_peak, map_to_color,
};
use embassy_time::Duration;

use crate::color::Rgb;
use crate::config::{AdaptiveConfig, FFT_SIZE};
use crate::error::SetupError;
use crate::fixture::LightFixture;
use crate::renderer::PixelSink;
use crate::state::LightingMode;

/// Samples audio, finds the dominant frequency and paints the per-pixel buffer
///
/// `N` is the transform size.
pub struct AdaptiveProducer<A, C, L, const N: usize = FFT_SIZE> {
    acquirer: SampleAcquirer<A, C, N>,
    analyzer: SpectralAnalyzer<N>,
    link: L,
    config: AdaptiveConfig,
    last_peak: Option<DominantFrequency>,
}

impl<A, C, L, const N: usize> AdaptiveProducer<A, C, L, N>
where
    A: AmplitudeSensor,
    C: SampleClock,
    L: CompanionLink,
{
    /// Build the pipeline
    ///
    /// An unsupported transform size or a zero sample rate fails here; the caller
    /// should run the fixture without the adaptive producer in that case.
    pub fn new(sensor: A, clock: C, link: L, config: AdaptiveConfig) -> Result<Self, SetupError> {
        let pipeline = SpectralAnalyzer::new()
            .and_then(|analyzer| {
                SampleAcquirer::new(sensor, clock, config.sample_rate_hz)
                    .map(|acquirer| (analyzer, acquirer))
            })
            .inspect_err(|err| log::error!("adaptive pipeline disabled: {}", err));
        let (analyzer, acquirer) = pipeline?;
        Ok(Self {
            acquirer,
            analyzer,
            link,
            config,
            last_peak: None,
        })
    }

    /// Capture one window and derive its color
    ///
    /// Blocks for the whole capture window.
    pub fn analyze(&mut self) -> (DominantFrequency, Rgb) {
        let buffer = self.acquirer.acquire();
        let spectrum = self.analyzer.transform(buffer);
        let peak = extract_peak(&spectrum, self.config.sample_rate_hz);
        let color = map_to_color(peak.frequency_hz, peak.magnitude, self.config.reference_max);
        self.last_peak = Some(peak);
        (peak, color)
    }

    /// Dominant frequency found in the last cycle
    pub const fn last_peak(&self) -> Option<DominantFrequency> {
        self.last_peak
    }

    pub const fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    pub const fn acquirer(&self) -> &SampleAcquirer<A, C, N> {
        &self.acquirer
    }

    pub const fn link(&self) -> &L {
        &self.link
    }
}

impl<A, C, L, const N: usize> Producer for AdaptiveProducer<A, C, L, N>
where
    A: AmplitudeSensor,
    C: SampleClock,
    L: CompanionLink,
{
    fn period(&self) -> Duration {
        self.config.period
    }

    fn run_cycle<S: PixelSink, const LEDS: usize>(&mut self, fixture: &LightFixture<S, LEDS>) {
        let (peak, color) = self.analyze();
        log::debug!(
            "dominant frequency {:.1} Hz (bin {}), magnitude {:.1} -> {:?}",
            peak.frequency_hz,
            peak.bin,
            peak.magnitude,
            color
        );

        fixture.fill_pixels(color);

        if let Err(err) = self.link.send_line(&format_color_line(color)) {
            log::warn!("failed to send color to companion: {:?}", err);
        }

        let should_render = fixture
            .store()
            .read(|state| state.mode() == LightingMode::Adaptive && state.power());
        if should_render {
            fixture.refresh();
        }
    }
}
