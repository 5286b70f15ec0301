use log::debug;

use crate::{AUDIO_HEADROOM, SILENCE_THRESHOLD};

/// Rescale so the loudest sample sits at `±11/12`, leaving a fixed clipping
/// margin.
///
/// `full_scale` is the largest amplitude the samples could reach (the
/// composite's unit radius). A peak at or below [`SILENCE_THRESHOLD`] times it is
/// rounding residue of a silent signal, as is all-zero input, and stays
/// silent.
pub fn normalize_peak(samples: &[f64], full_scale: f64) -> Vec<f32> {
    let peak = samples.iter().fold(0.0f64, |max, sample| max.max(sample.abs()));
    let floor = full_scale.abs() * SILENCE_THRESHOLD;
    if peak <= floor || !peak.is_finite() {
        debug!("peak amplitude {peak}, emitting silence");
        return vec![0.0; samples.len()];
    }
    samples
        .iter()
        .map(|sample| (sample / peak * AUDIO_HEADROOM) as f32)
        .collect()
}
