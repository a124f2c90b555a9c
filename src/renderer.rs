use smart_leds::SmartLedsWrite;

use crate::arbiter::compose;
use crate::color::{BLACK, Rgb};
use crate::error::RenderError;
use crate::state::LightingState;

/// Output sink for a physical strip
///
/// Implement this trait to support different hardware platforms. Pixels written with
/// [`set_pixel`](Self::set_pixel) become visible together on [`show`](Self::show).
pub trait PixelSink {
    type Error: core::fmt::Debug;

    /// Stage one pixel in the sink's buffer
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Latch all staged pixels onto the strip
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// Strip renderer
///
/// Turns a [`LightingState`] snapshot into a frame and pushes it to the sink.
pub struct StripRenderer<S: PixelSink, const LEDS: usize> {
    sink: S,
    frame_buffer: [Rgb; LEDS],
}

impl<S: PixelSink, const LEDS: usize> StripRenderer<S, LEDS> {
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            frame_buffer: [BLACK; LEDS],
        }
    }

    /// Render one frame from `state` and show it
    ///
    /// Stops at the first sink error. Nothing is retried; the next render
    /// starts over from a fresh state.
    pub fn present(&mut self, state: &LightingState<LEDS>) -> Result<(), RenderError<S::Error>> {
        compose(state, &mut self.frame_buffer);

        for (index, color) in self.frame_buffer.iter().enumerate() {
            self.sink
                .set_pixel(index, *color)
                .map_err(|source| RenderError::Pixel { index, source })?;
        }
        self.sink.show().map_err(RenderError::Show)
    }

    /// Last frame handed to the sink
    pub const fn frame(&self) -> &[Rgb; LEDS] {
        &self.frame_buffer
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

/// Adapter from any `smart-leds` driver to [`PixelSink`]
///
/// Buffers pixels and writes the whole strip in one transfer on `show`.
pub struct SmartLedsSink<W, const LEDS: usize> {
    writer: W,
    pixels: [Rgb; LEDS],
}

impl<W, const LEDS: usize> SmartLedsSink<W, LEDS>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [BLACK; LEDS],
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Error from [`SmartLedsSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartLedsSinkError<E> {
    /// Index past the end of the strip
    OutOfRange(usize),
    /// Driver transfer failed
    Write(E),
}

impl<W, const LEDS: usize> PixelSink for SmartLedsSink<W, LEDS>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: core::fmt::Debug,
{
    type Error = SmartLedsSinkError<W::Error>;

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(SmartLedsSinkError::OutOfRange(index))?;
        *pixel = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(self.pixels.iter().copied())
            .map_err(SmartLedsSinkError::Write)
    }
}
