use super::max_composite_unit_radius;
use crate::geometry::{Ellipse, Point};
use crate::waveform::CompositeWaveform;

/// Harmonics laid out for the structure graphic: each ellipse is centered on
/// its parent's perimeter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainedComposite {
    harmonics: Vec<Ellipse>,
    max_unit_radius: f64,
}

/// Chain a waveform's harmonics positionally.
///
/// Harmonic 0 is centered at the origin. Harmonic `i` is centered at the
/// perimeter point of harmonic `i - 1` taken at angle index
/// `-rotation_{i-1}`, which cancels the parent's own rotation.
pub fn chain_harmonics(waveform: &CompositeWaveform) -> ChainedComposite {
    let mut harmonics: Vec<Ellipse> = Vec::with_capacity(waveform.len());
    for harmonic in waveform {
        let center = harmonics
            .last()
            .map(|parent| parent.perimeter_point(-parent.rotation))
            .unwrap_or(Point::ORIGIN);
        harmonics.push(harmonic.ellipse(center));
    }
    ChainedComposite {
        harmonics,
        max_unit_radius: max_composite_unit_radius(waveform),
    }
}

impl ChainedComposite {
    pub fn harmonics(&self) -> &[Ellipse] {
        &self.harmonics
    }

    pub fn max_unit_radius(&self) -> f64 {
        self.max_unit_radius
    }
}
