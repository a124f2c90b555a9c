//! Weather-driven producer.

use embassy_time::Duration;

use super::Producer;
use crate::config::EnvironmentalConfig;
use crate::environment::{WeatherReport, WeatherSource};
use crate::fixture::LightFixture;
use crate::renderer::PixelSink;

/// Polls a [`WeatherSource`] and keeps the environmental target up to date
///
/// The last good report is cached. A failed fetch keeps the cached target in
/// effect; rendering never waits on the source.
pub struct EnvironmentalProducer<W> {
    source: W,
    config: EnvironmentalConfig,
    cached: Option<WeatherReport>,
}

impl<W: WeatherSource> EnvironmentalProducer<W> {
    pub const fn new(source: W, config: EnvironmentalConfig) -> Self {
        Self {
            source,
            config,
            cached: None,
        }
    }

    /// Last report that was fetched successfully
    pub const fn cached(&self) -> Option<&WeatherReport> {
        self.cached.as_ref()
    }

    pub const fn source_mut(&mut self) -> &mut W {
        &mut self.source
    }
}

impl<W: WeatherSource> Producer for EnvironmentalProducer<W> {
    fn period(&self) -> Duration {
        self.config.period
    }

    fn run_cycle<S: PixelSink, const LEDS: usize>(&mut self, fixture: &LightFixture<S, LEDS>) {
        match self.source.fetch() {
            Ok(report) => {
                fixture.update_environmental_target(
                    report.temperature,
                    report.condition_id,
                    &report.description,
                );
                self.cached = Some(report);
            }
            Err(err) => {
                log::warn!("weather fetch failed, keeping cached target: {:?}", err);
            }
        }
    }
}
