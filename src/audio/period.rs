use super::normalize_peak;
use crate::compose::superpose_sines;
use crate::sampling::{sample_steps, StepSpacing};
use crate::waveform::CompositeWaveform;

/// One peak-normalized period of the waveform's sine composite, sampled at
/// `Δt = 1 / samples_per_period` so it loops without a seam.
pub fn period_samples(waveform: &CompositeWaveform, samples_per_period: usize) -> Vec<f32> {
    let composite = superpose_sines(waveform);
    let raw = sample_steps(samples_per_period, StepSpacing::Closed, |time_index| {
        composite.unit_sample(time_index)
    });
    normalize_peak(&raw, composite.max_unit_radius())
}
