//! Harmonic composition: turning a [`CompositeWaveform`] into sample functions.
//!
//! The same harmonic list is composed in two unrelated ways, kept as two
//! separately named entry points:
//!
//! - [`superpose_harmonics`]: every harmonic sits at the origin and their
//!   perimeter samples are summed. Used by the timelines, the timeloop and
//!   audio.
//! - [`chain_harmonics`]: each harmonic is centered on its parent's perimeter.
//!   Used only by the structure graphic; nothing is summed.
//!
//! Both report the composite's maximum unit radius, the sum of each
//! harmonic's larger radius. It is a normalization divisor, not a tight
//! geometric bound.

/// Additive superposition of origin-centered harmonics.
pub mod additive;
/// Positional chaining of harmonics for the structure graphic.
pub mod chained;
/// Sample value types shared by the additive composites.
pub mod sample;

pub use additive::{superpose_cosines, superpose_harmonics, superpose_sines, superpose_vectors, AdditiveComposite};
pub use chained::{chain_harmonics, ChainedComposite};
pub use sample::UnitSample;

use crate::waveform::CompositeWaveform;
use crate::HARMONIC_RATIO;

/// Sum over harmonics of `max(magnitude_x, magnitude_y)`.
pub fn max_composite_unit_radius(waveform: &CompositeWaveform) -> f64 {
    waveform
        .iter()
        .map(|harmonic| harmonic.magnitude_x().max(harmonic.magnitude_y()))
        .sum()
}

/// Angular rate of harmonic `index` relative to the fundamental: `2^index`.
pub fn harmonic_rate(index: usize) -> f64 {
    HARMONIC_RATIO.powi(index as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::BasicWaveform;

    #[test]
    fn max_radius_sums_larger_radii() {
        let waveform = CompositeWaveform::from(vec![
            BasicWaveform::new(1.0, 0.25, 0.1).unwrap(),
            BasicWaveform::new(0.5, 2.0, 0.0).unwrap(),
            BasicWaveform::new(0.75, 0.75, 0.9).unwrap(),
        ]);
        assert!((max_composite_unit_radius(&waveform) - 3.75).abs() < 1e-12);
    }

    #[test]
    fn empty_waveform_has_zero_radius() {
        assert_eq!(max_composite_unit_radius(&CompositeWaveform::new()), 0.0);
    }

    #[test]
    fn rates_double_per_harmonic() {
        assert_eq!(harmonic_rate(0), 1.0);
        assert_eq!(harmonic_rate(1), 2.0);
        assert_eq!(harmonic_rate(2), 4.0);
        assert_eq!(harmonic_rate(5), 32.0);
    }
}
