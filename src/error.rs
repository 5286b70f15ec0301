//! Error types for waveform construction and audio generation.

use thiserror::Error;

/// Result type for fallible waveform operations.
pub type WaveformResult<T> = Result<T, WaveformError>;

/// Errors raised at the boundary of the waveform core.
///
/// The sampling math itself never fails: degenerate composites fall back to
/// flat output or silence instead of producing an error.
#[derive(Debug, Error)]
pub enum WaveformError {
    /// A harmonic parameter is out of range.
    #[error("invalid harmonic {field} = {value}: {reason}")]
    InvalidHarmonic {
        /// Parameter name (`magnitude_x`, `magnitude_y` or `phase`).
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Edit of a harmonic that does not exist.
    #[error("harmonic index {index} out of range for waveform of {len} harmonics")]
    HarmonicIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of harmonics in the waveform.
        len: usize,
    },

    /// Fundamental frequency must be positive and finite.
    #[error("invalid frequency: {frequency} Hz")]
    InvalidFrequency {
        /// The rejected frequency.
        frequency: f64,
    },

    /// Duration must be positive and finite.
    #[error("invalid duration: {seconds} seconds")]
    InvalidDuration {
        /// The rejected duration.
        seconds: f64,
    },

    /// The requested duration needs more samples than one buffer may hold.
    #[error("duration of {seconds} seconds needs more than {max_samples} samples")]
    DurationTooLong {
        /// The rejected duration.
        seconds: f64,
        /// Upper bound on generated samples.
        max_samples: usize,
    },

    /// Sample rate must be non-zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected rate.
        rate: u32,
    },

    /// Not even one sample fits in a period.
    #[error("frequency {frequency} Hz leaves no samples per period at {sample_rate} Hz")]
    FrequencyAboveSampleRate {
        /// Requested fundamental.
        frequency: f64,
        /// Sample rate in use.
        sample_rate: u32,
    },

    /// WAV encoding failed.
    #[error(transparent)]
    Wav(#[from] hound::Error),
}
