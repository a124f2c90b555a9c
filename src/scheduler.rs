//! Cycle scheduling and timing utilities.
//!
//! Provides portable periodic pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between cycles.

use embassy_time::{Duration, Instant};

use crate::fixture::LightFixture;
use crate::producer::Producer;
use crate::renderer::PixelSink;

/// Result of a cycle tick.
#[derive(Debug, Clone, Copy)]
pub struct CycleTiming {
    /// The deadline for the next cycle.
    pub next_deadline: Instant,
    /// How long to wait until the next cycle (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Runs a [`Producer`] on a fixed period.
///
/// Deadlines advance by exactly one period per cycle. If the scheduler falls more
/// than two periods behind it restarts from the current time instead of running a
/// burst of back-to-back cycles.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = CycleScheduler::new(producer);
///
/// loop {
///     let timing = scheduler.tick(Instant::now(), &FIXTURE);
///
///     // Platform-specific sleep
///     Timer::at(timing.next_deadline).await;
/// }
/// ```
pub struct CycleScheduler<P> {
    producer: P,
    next_cycle: Option<Instant>,
    period: Duration,
}

impl<P: Producer> CycleScheduler<P> {
    /// Schedule a producer on its own period
    pub fn new(producer: P) -> Self {
        let period = producer.period();
        Self::with_period(producer, period)
    }

    /// Schedule a producer on an explicit period
    pub const fn with_period(producer: P, period: Duration) -> Self {
        Self {
            producer,
            next_cycle: None,
            period,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Get a reference to the producer.
    pub const fn producer(&self) -> &P {
        &self.producer
    }

    /// Get a mutable reference to the producer.
    pub const fn producer_mut(&mut self) -> &mut P {
        &mut self.producer
    }

    /// Run one cycle and return timing information.
    ///
    /// The first tick anchors the schedule at `now`. The caller is responsible for
    /// waiting until `next_deadline` before calling `tick` again.
    pub fn tick<S, const LEDS: usize>(
        &mut self,
        now: Instant,
        fixture: &LightFixture<S, LEDS>,
    ) -> CycleTiming
    where
        S: PixelSink,
    {
        let max_drift = self.period * 2;
        let scheduled = match self.next_cycle {
            Some(deadline) if now.saturating_duration_since(deadline) <= max_drift => deadline,
            _ => now,
        };

        self.producer.run_cycle(fixture);

        let next_deadline = scheduled + self.period;
        self.next_cycle = Some(next_deadline);

        CycleTiming {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }
}
