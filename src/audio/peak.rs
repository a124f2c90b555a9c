use super::MagnitudeSpectrum;

/// Strongest non-DC component of a spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantFrequency {
    /// Winning bin index
    pub bin: usize,
    /// Center frequency of the bin in Hz
    pub frequency_hz: f32,
    /// Raw linear magnitude of the bin, not normalised
    pub magnitude: f32,
}

/// Find the peak bin, skipping the DC bin
///
/// A spectrum without any non-DC bin yields bin 0 at 0 Hz with zero magnitude.
#[allow(clippy::cast_precision_loss)]
pub fn extract_peak(spectrum: &MagnitudeSpectrum<'_>, sample_rate_hz: u32) -> DominantFrequency {
    let Some((bin, magnitude)) = strongest_bin(spectrum.iter()) else {
        return DominantFrequency {
            bin: 0,
            frequency_hz: 0.0,
            magnitude: 0.0,
        };
    };

    DominantFrequency {
        bin,
        frequency_hz: bin as f32 * spectrum.bin_width(sample_rate_hz),
        magnitude,
    }
}

/// Index and magnitude of the largest value after the first one
///
/// Ties go to the lowest index. Returns `None` when there is nothing past index 0.
pub fn strongest_bin(magnitudes: impl IntoIterator<Item = f32>) -> Option<(usize, f32)> {
    magnitudes
        .into_iter()
        .enumerate()
        .skip(1)
        .fold(None, |best, (bin, magnitude)| match best {
            Some((_, peak)) if magnitude <= peak => best,
            _ => Some((bin, magnitude)),
        })
}
