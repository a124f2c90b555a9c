#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lumen_fixture::producer::CompanionLink;
use lumen_fixture::{AmplitudeSensor, Duration, Instant, PixelSink, Rgb, SampleClock};

/// Sink that records every shown frame
#[derive(Debug, Default)]
pub struct RecordingSink {
    staged: Vec<Rgb>,
    pub frames: Vec<Vec<Rgb>>,
    pub fail_show: bool,
}

impl PixelSink for RecordingSink {
    type Error = &'static str;

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        if self.staged.len() <= index {
            self.staged.resize(index + 1, Rgb::default());
        }
        self.staged[index] = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        if self.fail_show {
            return Err("strip transfer failed");
        }
        self.frames.push(self.staged.clone());
        Ok(())
    }
}

impl RecordingSink {
    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

/// Manually driven clock counting microseconds
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    pub now_us: Rc<Cell<u64>>,
    pub delays_us: Rc<RefCell<Vec<u64>>>,
}

impl FakeClock {
    pub fn advance(&self, micros: u64) {
        self.now_us.set(self.now_us.get() + micros);
    }
}

impl SampleClock for FakeClock {
    fn now(&self) -> Instant {
        Instant::from_micros(self.now_us.get())
    }

    fn delay(&mut self, duration: Duration) {
        self.delays_us.borrow_mut().push(duration.as_micros());
        self.advance(duration.as_micros());
    }
}

/// Sensor producing a sinusoid centered on half of the ADC range
pub struct SineSensor {
    pub bin: usize,
    pub window: usize,
    pub amplitude: f64,
    index: usize,
}

impl SineSensor {
    pub fn new(bin: usize, window: usize, amplitude: f64) -> Self {
        Self {
            bin,
            window,
            amplitude,
            index: 0,
        }
    }
}

impl AmplitudeSensor for SineSensor {
    type Error = ();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        let phase =
            2.0 * std::f64::consts::PI * (self.bin * self.index) as f64 / self.window as f64;
        self.index += 1;
        Ok((2048.0 + self.amplitude * phase.sin()).round() as u16)
    }
}

/// Link that keeps every line it was asked to send
#[derive(Debug, Default)]
pub struct RecordingLink {
    pub lines: Vec<String>,
    pub fail: bool,
}

impl CompanionLink for RecordingLink {
    type Error = &'static str;

    fn send_line(&mut self, line: &str) -> Result<(), Self::Error> {
        if self.fail {
            return Err("uart busy");
        }
        self.lines.push(line.to_owned());
        Ok(())
    }
}
