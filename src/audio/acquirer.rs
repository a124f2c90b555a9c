//! Fixed-rate amplitude sampling.

use embassy_time::{Duration, Instant};
use microfft::Complex32;

use crate::error::SetupError;

const MICROS_PER_SECOND: u32 = 1_000_000;

/// Raw amplitude input, typically an ADC channel
pub trait AmplitudeSensor {
    type Error;

    /// Take one raw reading
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Time source used to pace sampling
pub trait SampleClock {
    fn now(&self) -> Instant;

    /// Block the calling task for `duration`
    fn delay(&mut self, duration: Duration);
}

/// [`SampleClock`] backed by the `embassy-time` driver, busy-waiting between samples
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SampleClock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn delay(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

/// N complex samples `(amplitude, 0)` from one capture window
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer<const N: usize> {
    samples: [Complex32; N],
}

impl<const N: usize> SampleBuffer<N> {
    pub const fn new() -> Self {
        Self {
            samples: [Complex32::new(0.0, 0.0); N],
        }
    }

    /// Build a buffer from a real-valued signal
    pub fn from_fn(mut amplitude: impl FnMut(usize) -> f32) -> Self {
        let mut buffer = Self::new();
        for (index, sample) in buffer.samples.iter_mut().enumerate() {
            *sample = Complex32::new(amplitude(index), 0.0);
        }
        buffer
    }

    pub const fn as_slice(&self) -> &[Complex32; N] {
        &self.samples
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for SampleBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Captures `N` samples at a fixed rate
///
/// Sample `i` is due at `start + i * period`. After each read the acquirer waits
/// out whatever is left of that slot. An overrun slot is not made up: later slots
/// stay anchored to the original start, so persistent overruns shift every
/// remaining sample late.
pub struct SampleAcquirer<A, C, const N: usize> {
    sensor: A,
    clock: C,
    period_us: u64,
    buffer: SampleBuffer<N>,
}

impl<A: AmplitudeSensor, C: SampleClock, const N: usize> SampleAcquirer<A, C, N> {
    pub fn new(sensor: A, clock: C, rate_hz: u32) -> Result<Self, SetupError> {
        if rate_hz == 0 {
            return Err(SetupError::InvalidSampleRate(rate_hz));
        }
        Ok(Self {
            sensor,
            clock,
            period_us: u64::from(MICROS_PER_SECOND / rate_hz),
            buffer: SampleBuffer::new(),
        })
    }

    /// Time between two consecutive samples
    pub const fn sample_period(&self) -> Duration {
        Duration::from_micros(self.period_us)
    }

    /// Fill the buffer with one capture window
    ///
    /// Blocks the caller for the whole window. A failed read is stored as zero.
    pub fn acquire(&mut self) -> &SampleBuffer<N> {
        let start = self.clock.now();

        for (index, sample) in self.buffer.samples.iter_mut().enumerate() {
            let slot = start + Duration::from_micros(index as u64 * self.period_us);

            let raw = self.sensor.read_raw().unwrap_or(0);
            *sample = Complex32::new(f32::from(raw), 0.0);

            let now = self.clock.now();
            if let Some(remaining) = slot.checked_duration_since(now) {
                if remaining.as_ticks() > 0 {
                    self.clock.delay(remaining);
                }
            }
        }

        &self.buffer
    }

    /// Last captured window
    pub const fn buffer(&self) -> &SampleBuffer<N> {
        &self.buffer
    }

    pub const fn sensor(&self) -> &A {
        &self.sensor
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
