use super::sample_time_graphic;
use crate::compose::{superpose_cosines, superpose_sines};
use crate::geometry::{Path, Point, Region};
use crate::waveform::CompositeWaveform;

/// Which component of the additive composite a timeline plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineAxis {
    /// Y components; time runs left to right, signal maps to y.
    Sine,
    /// X components; time runs top to bottom, signal maps to x.
    Cosine,
}

/// Open polyline of one component of the additive composite over a single
/// period, projected into the padded square of `canvas`.
pub fn sample_timeline(
    waveform: &CompositeWaveform,
    axis: TimelineAxis,
    sample_count: usize,
    canvas: Region,
) -> Path {
    match axis {
        TimelineAxis::Sine => sample_time_graphic(
            &superpose_sines(waveform),
            sample_count,
            canvas,
            |projection, time_index, unit| {
                Point::new(projection.time_x(time_index), projection.project_y(unit))
            },
        ),
        TimelineAxis::Cosine => sample_time_graphic(
            &superpose_cosines(waveform),
            sample_count,
            canvas,
            |projection, time_index, unit| {
                Point::new(projection.project_x(unit), projection.time_y(time_index))
            },
        ),
    }
}
