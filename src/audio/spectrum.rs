//! Spectral analysis on top of `microfft`.

use microfft::Complex32;

use super::SampleBuffer;
use crate::error::SetupError;

/// In-place complex FFT for one supported transform size
type Kernel = fn(&mut [Complex32]);

macro_rules! cfft_kernels {
    ($($size:literal => $fft:ident),* $(,)?) => {
        /// Pick the `microfft` kernel for `size`, if there is one
        fn kernel(size: usize) -> Option<Kernel> {
            match size {
                $(
                    $size => {
                        fn run(data: &mut [Complex32]) {
                            if let Ok(data) = <&mut [Complex32; $size]>::try_from(data) {
                                microfft::complex::$fft(data);
                            }
                        }
                        Some(run as Kernel)
                    }
                )*
                _ => None,
            }
        }
    };
}

cfft_kernels! {
    2 => cfft_2,
    4 => cfft_4,
    8 => cfft_8,
    16 => cfft_16,
    32 => cfft_32,
    64 => cfft_64,
    128 => cfft_128,
    256 => cfft_256,
    512 => cfft_512,
    1024 => cfft_1024,
    2048 => cfft_2048,
    4096 => cfft_4096,
}

/// Magnitudes of the lower half of a transform
///
/// Bin `i` covers frequency `i * sample_rate / N`. Bin 0 is the DC offset.
/// Borrows the analyzer's work buffer, so it lives until the next transform.
#[derive(Debug, Clone, Copy)]
pub struct MagnitudeSpectrum<'a> {
    // Magnitude of bin i is stored in bins[i].re
    bins: &'a [Complex32],
    transform_size: usize,
}

impl<'a> MagnitudeSpectrum<'a> {
    /// Magnitude of one bin
    pub fn magnitude(&self, bin: usize) -> Option<f32> {
        self.bins.get(bin).map(|bin| bin.re)
    }

    /// Magnitudes in bin order, DC first
    pub fn iter(&self) -> impl Iterator<Item = f32> + 'a {
        self.bins.iter().map(|bin| bin.re)
    }

    /// Number of bins, always half the transform size
    pub const fn len(&self) -> usize {
        self.bins.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of samples the spectrum was computed from
    pub const fn transform_size(&self) -> usize {
        self.transform_size
    }

    /// Width of one bin in Hz
    #[allow(clippy::cast_precision_loss)]
    pub fn bin_width(&self, sample_rate_hz: u32) -> f32 {
        sample_rate_hz as f32 / self.transform_size as f32
    }
}

/// Radix-2 FFT over `N` samples
///
/// The window is copied into a work buffer, transformed in place by `microfft` and
/// reduced to magnitudes in the same buffer. No window function is applied.
pub struct SpectralAnalyzer<const N: usize> {
    kernel: Kernel,
    work: [Complex32; N],
}

impl<const N: usize> SpectralAnalyzer<N> {
    /// Prepare an analyzer
    ///
    /// Fails unless `N` is a power of two between 2 and 4096.
    pub fn new() -> Result<Self, SetupError> {
        let kernel = kernel(N).ok_or(SetupError::UnsupportedTransformSize(N))?;
        Ok(Self {
            kernel,
            work: [Complex32::new(0.0, 0.0); N],
        })
    }

    /// Transform a captured window into its magnitude spectrum
    ///
    /// The input buffer is left untouched.
    pub fn transform(&mut self, buffer: &SampleBuffer<N>) -> MagnitudeSpectrum<'_> {
        self.work = *buffer.as_slice();
        (self.kernel)(&mut self.work);

        for bin in &mut self.work[..N / 2] {
            *bin = Complex32::new(libm::sqrtf(bin.norm_sqr()), 0.0);
        }

        self.spectrum()
    }

    /// Spectrum of the last transform
    pub fn spectrum(&self) -> MagnitudeSpectrum<'_> {
        MagnitudeSpectrum {
            bins: &self.work[..N / 2],
            transform_size: N,
        }
    }
}
