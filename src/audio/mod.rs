//! Audio sample generation from a composite waveform.
//!
//! Only the sample computation lives here. Device playback belongs to the
//! caller; WAV encoding lives in [`crate::io::wav`].

/// Peak normalization with a fixed headroom.
pub mod normalize;
/// One loopable period of the additive sine composite.
pub mod period;

pub use normalize::normalize_peak;
pub use period::period_samples;

use log::debug;

use crate::error::{WaveformError, WaveformResult};
use crate::waveform::CompositeWaveform;
use crate::MAX_AUDIO_SAMPLES;

/*
Audio From Geometry
===================

The audible signal is the sine (y) component of the additive composite,
exactly what the sine timeline draws.

  1. samples_per_period = floor(sample_rate / frequency)
  2. Sample one period at Δt = 1 / samples_per_period. The last sample stops
     one step short of t = 1 so the period can be repeated seamlessly.
  3. Peak-normalize the period to 11/12 (see `normalize`).
  4. Tile the period by modulo indexing until the requested duration is
     filled: round(seconds × frequency × samples_per_period) samples.

Because the frequency is quantized to a whole number of samples per period,
the played pitch is sample_rate / samples_per_period, slightly above the
requested frequency for rates that do not divide evenly.
*/

/// Whole samples in one period of `frequency` at `sample_rate`.
///
/// Frequencies so low that one period exceeds [`MAX_AUDIO_SAMPLES`] are
/// rejected as invalid.
pub fn samples_per_period(sample_rate: u32, frequency: f64) -> WaveformResult<usize> {
    if sample_rate == 0 {
        return Err(WaveformError::InvalidSampleRate { rate: sample_rate });
    }
    if !(frequency > 0.0 && frequency.is_finite()) {
        return Err(WaveformError::InvalidFrequency { frequency });
    }
    let samples = (sample_rate as f64 / frequency).floor();
    if samples > MAX_AUDIO_SAMPLES as f64 {
        return Err(WaveformError::InvalidFrequency { frequency });
    }
    let samples = samples as usize;
    if samples == 0 {
        return Err(WaveformError::FrequencyAboveSampleRate {
            frequency,
            sample_rate,
        });
    }
    Ok(samples)
}

/// Mono samples in `[-1, 1]` for `duration_seconds` of the waveform at
/// `frequency`.
///
/// An empty waveform yields silence of the requested length. The duration
/// must come to at least one sample and at most [`MAX_AUDIO_SAMPLES`].
pub fn generate_audio_samples(
    waveform: &CompositeWaveform,
    frequency: f64,
    duration_seconds: f64,
    sample_rate: u32,
) -> WaveformResult<Vec<f32>> {
    if !(duration_seconds > 0.0 && duration_seconds.is_finite()) {
        return Err(WaveformError::InvalidDuration {
            seconds: duration_seconds,
        });
    }
    let period_len = samples_per_period(sample_rate, frequency)?;
    let total = (duration_seconds * frequency * period_len as f64).round();
    if total > MAX_AUDIO_SAMPLES as f64 {
        return Err(WaveformError::DurationTooLong {
            seconds: duration_seconds,
            max_samples: MAX_AUDIO_SAMPLES,
        });
    }
    if total < 1.0 {
        return Err(WaveformError::InvalidDuration {
            seconds: duration_seconds,
        });
    }
    let total = total as usize;
    let period = period_samples(waveform, period_len);
    debug!(
        "generating {total} samples ({period_len} per period) at {sample_rate} Hz for {} harmonics",
        waveform.len()
    );
    Ok((0..total).map(|index| period[index % period_len]).collect())
}
