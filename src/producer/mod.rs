//! Periodic producers writing into the fixture
//!
//! Each producer runs one cycle at a time under a
//! [`CycleScheduler`](crate::scheduler::CycleScheduler).

mod adaptive;
mod companion;
mod environmental;

pub use adaptive::AdaptiveProducer;
pub use companion::{COLOR_LINE_CAPACITY, CompanionLink, ColorLine, format_color_line};
pub use environmental::EnvironmentalProducer;

use embassy_time::Duration;

use crate::fixture::LightFixture;
use crate::renderer::PixelSink;

/// A task that periodically updates the fixture
pub trait Producer {
    /// Time between two cycles
    fn period(&self) -> Duration;

    /// Run one cycle against the fixture
    fn run_cycle<S: PixelSink, const LEDS: usize>(&mut self, fixture: &LightFixture<S, LEDS>);
}
