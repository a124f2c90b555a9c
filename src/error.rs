//! Error types shared across the fixture.

use core::fmt;

/// Rejections from the lighting control plane.
///
/// A rejected call leaves the lighting state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingError {
    /// Mode name or id is not one of `manual`, `adaptive`, `environmental`
    InvalidMode,
    /// Pixel index is past the end of the strip
    PixelOutOfRange { index: usize, led_count: usize },
    /// Hue is outside of 0-359 degrees
    HueOutOfRange(u16),
}

impl fmt::Display for LightingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMode => {
                f.write_str("invalid mode, use 'manual', 'adaptive' or 'environmental'")
            }
            Self::PixelOutOfRange { index, led_count } => {
                write!(f, "pixel index {index} out of range for {led_count} leds")
            }
            Self::HueOutOfRange(hue) => write!(f, "hue {hue} out of range (0-359)"),
        }
    }
}

/// Failures while building the adaptive (audio) pipeline.
///
/// These abort the adaptive pipeline only; the rest of the fixture keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Transform size is not a power of two of at least 2
    UnsupportedTransformSize(usize),
    /// Sample rate must be non-zero
    InvalidSampleRate(u32),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTransformSize(size) => {
                write!(f, "unsupported transform size {size}, expected a power of two >= 2")
            }
            Self::InvalidSampleRate(rate) => write!(f, "invalid sample rate {rate} Hz"),
        }
    }
}

/// Failure while pushing a frame to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError<E> {
    /// Writing a single pixel into the sink buffer failed
    Pixel { index: usize, source: E },
    /// Latching the frame onto the strip failed
    Show(E),
}

impl<E: fmt::Debug> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel { index, source } => write!(f, "failed to write pixel {index}: {source:?}"),
            Self::Show(source) => write!(f, "failed to show frame: {source:?}"),
        }
    }
}
