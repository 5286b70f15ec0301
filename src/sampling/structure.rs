use log::trace;

use super::{sample_steps, StepSpacing};
use crate::compose::chain_harmonics;
use crate::geometry::{Path, Region};
use crate::projection::Projection;
use crate::waveform::CompositeWaveform;

/// One closed shape per harmonic, each harmonic centered on its parent's
/// perimeter, all projected into the padded square of `canvas`.
///
/// An empty waveform yields no paths.
pub fn sample_structure_paths(
    waveform: &CompositeWaveform,
    sample_count: usize,
    canvas: Region,
) -> Vec<Path> {
    let chained = chain_harmonics(waveform);
    let projection = Projection::for_canvas(canvas, chained.max_unit_radius());
    trace!(
        "structure: {} harmonics x {} perimeter samples",
        chained.harmonics().len(),
        sample_count
    );
    chained
        .harmonics()
        .iter()
        .map(|ellipse| {
            let points = sample_steps(sample_count, StepSpacing::Closed, |angle_index| {
                projection.project(ellipse.perimeter_point(angle_index))
            });
            Path::shape(points)
        })
        .collect()
}
