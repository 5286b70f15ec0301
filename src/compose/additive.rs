use log::debug;

use super::{harmonic_rate, max_composite_unit_radius, UnitSample};
use crate::geometry::{Ellipse, Point};
use crate::waveform::CompositeWaveform;

/// Reads one value off a harmonic's ellipse at an angle index.
pub type HarmonicProbe<S> = fn(&Ellipse, f64) -> S;

/*
Additive Superposition
======================

Every harmonic is an origin-centered ellipse. At time index t (fraction of
one fundamental period) harmonic i contributes

  probe(ellipse_i, −rotation_i + t · 2^i)

and the contributions are summed.

  −rotation_i   cancels the harmonic's own rotation, so at t = 0 every
                harmonic starts from its canonical position.
  t · 2^i       harmonic i turns 2^i times per fundamental period. The ratio
                is fixed at two; it is not a parameter.

The probe picks what is read off each ellipse: the x component (cosine
timeline), the y component (sine timeline, audio) or the full vector
(timeloop).
*/

#[derive(Debug, Clone)]
struct Harmonic {
    ellipse: Ellipse,
    rate: f64,
}

/// Additive composite of a waveform's harmonics.
#[derive(Debug, Clone)]
pub struct AdditiveComposite<S: UnitSample> {
    harmonics: Vec<Harmonic>,
    max_unit_radius: f64,
    probe: HarmonicProbe<S>,
}

/// Compose a waveform by summing `probe` over its origin-centered harmonics.
pub fn superpose_harmonics<S: UnitSample>(
    waveform: &CompositeWaveform,
    probe: HarmonicProbe<S>,
) -> AdditiveComposite<S> {
    let harmonics = waveform
        .iter()
        .enumerate()
        .map(|(index, harmonic)| Harmonic {
            ellipse: harmonic.ellipse(Point::ORIGIN),
            rate: harmonic_rate(index),
        })
        .collect();
    AdditiveComposite {
        harmonics,
        max_unit_radius: max_composite_unit_radius(waveform),
        probe,
    }
}

/// Sum of the harmonics' y components (sine timeline, audio).
pub fn superpose_sines(waveform: &CompositeWaveform) -> AdditiveComposite<f64> {
    superpose_harmonics(waveform, Ellipse::perimeter_sine)
}

/// Sum of the harmonics' x components (cosine timeline).
pub fn superpose_cosines(waveform: &CompositeWaveform) -> AdditiveComposite<f64> {
    superpose_harmonics(waveform, Ellipse::perimeter_cosine)
}

/// Sum of the harmonics' perimeter vectors (timeloop).
pub fn superpose_vectors(waveform: &CompositeWaveform) -> AdditiveComposite<Point> {
    superpose_harmonics(waveform, Ellipse::perimeter_vector)
}

impl<S: UnitSample> AdditiveComposite<S> {
    /// Raw composite sample at `time_index`, any real value.
    pub fn unit_sample(&self, time_index: f64) -> S {
        self.harmonics.iter().fold(S::ZERO, |total, harmonic| {
            let angle_index = -harmonic.ellipse.rotation + time_index * harmonic.rate;
            total.combine((self.probe)(&harmonic.ellipse, angle_index))
        })
    }

    /// Composite sample divided by the maximum unit radius.
    ///
    /// A composite with zero radius (no harmonics) yields zero.
    pub fn normalized_sample(&self, time_index: f64) -> S {
        if !self.has_extent() {
            debug!("normalizing a zero-radius composite, emitting zero");
            return S::ZERO;
        }
        self.unit_sample(time_index)
            .scale(1.0 / self.max_unit_radius)
    }

    pub fn max_unit_radius(&self) -> f64 {
        self.max_unit_radius
    }

    pub fn harmonic_count(&self) -> usize {
        self.harmonics.len()
    }

    fn has_extent(&self) -> bool {
        self.max_unit_radius > 0.0 && self.max_unit_radius.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::BasicWaveform;
    use std::f64::consts::TAU;

    const EPS: f64 = 1e-9;

    fn waveform(harmonics: &[(f64, f64, f64)]) -> CompositeWaveform {
        harmonics
            .iter()
            .map(|&(mx, my, phase)| BasicWaveform::new(mx, my, phase).unwrap())
            .collect()
    }

    #[test]
    fn unit_circle_sine_is_a_sine() {
        let composite = superpose_sines(&waveform(&[(1.0, 1.0, 0.0)]));
        for step in 0..4 {
            let t = step as f64 / 3.0;
            let expected = (TAU * t).sin();
            let actual = composite.unit_sample(t);
            assert!((actual - expected).abs() < EPS, "t={t}: {actual} vs {expected}");
        }
    }

    #[test]
    fn two_harmonic_cosine_at_zero() {
        let composite = superpose_cosines(&waveform(&[(1.0, 1.0, 0.0), (0.5, 0.5, 0.0)]));
        assert!((composite.max_unit_radius() - 1.5).abs() < EPS);
        assert!((composite.unit_sample(0.0) - 1.5).abs() < EPS);
        assert!((composite.normalized_sample(0.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn second_harmonic_runs_twice_as_fast() {
        let composite = superpose_sines(&waveform(&[(1.0, 1.0, 0.0), (0.5, 0.5, 0.0)]));
        // At t = 1/8 the fundamental is at 45° and the second harmonic at 90°.
        let expected = (TAU / 8.0).sin() + 0.5;
        assert!((composite.unit_sample(0.125) - expected).abs() < EPS);
    }

    #[test]
    fn phase_of_a_circle_is_cancelled() {
        let plain = superpose_vectors(&waveform(&[(1.0, 1.0, 0.0)]));
        let rotated = superpose_vectors(&waveform(&[(1.0, 1.0, 0.3)]));
        for step in 0..16 {
            let t = step as f64 / 16.0;
            let d = plain.unit_sample(t).distance(rotated.unit_sample(t));
            assert!(d < EPS, "t={t} differs by {d}");
        }
    }

    #[test]
    fn phase_of_an_ellipse_is_visible() {
        let plain = superpose_sines(&waveform(&[(1.0, 0.5, 0.0)]));
        let rotated = superpose_sines(&waveform(&[(1.0, 0.5, 0.125)]));
        let differs = (0..16).any(|step| {
            let t = step as f64 / 16.0;
            (plain.unit_sample(t) - rotated.unit_sample(t)).abs() > 1e-3
        });
        assert!(differs);
    }

    #[test]
    fn vector_components_match_scalar_composites() {
        let shape = waveform(&[(1.0, 0.5, 0.2), (0.25, 0.75, 0.6)]);
        let vectors = superpose_vectors(&shape);
        let sines = superpose_sines(&shape);
        let cosines = superpose_cosines(&shape);
        for step in 0..10 {
            let t = step as f64 / 9.0;
            let v = vectors.unit_sample(t);
            assert!((v.x - cosines.unit_sample(t)).abs() < EPS);
            assert!((v.y - sines.unit_sample(t)).abs() < EPS);
        }
    }

    #[test]
    fn composite_is_periodic_over_one_period() {
        let composite = superpose_vectors(&waveform(&[(1.0, 0.5, 0.2), (0.25, 0.75, 0.6), (0.1, 0.2, 0.9)]));
        for step in 0..8 {
            let t = step as f64 / 8.0;
            let d = composite.unit_sample(t).distance(composite.unit_sample(t + 1.0));
            assert!(d < 1e-9);
        }
    }

    #[test]
    fn empty_composite_is_zero() {
        let empty = CompositeWaveform::new();
        let scalar = superpose_sines(&empty);
        assert_eq!(scalar.unit_sample(0.3), 0.0);
        assert_eq!(scalar.normalized_sample(0.3), 0.0);
        assert_eq!(scalar.max_unit_radius(), 0.0);

        let vector = superpose_vectors(&empty);
        assert_eq!(vector.normalized_sample(0.7), Point::ORIGIN);
    }
}
