//! Sampling drivers: walk a composite across a fixed number of steps, project
//! every sample and collect the ordered result.
//!
//! All drivers share [`sample_steps`]; the time-domain graphics additionally
//! share [`sample_time_graphic`], parameterized by how one composite sample
//! becomes a point.

/// All four graphics in one call.
pub mod graphics;
/// Per-harmonic closed shapes from the chained composite.
pub mod structure;
/// Sine and cosine timelines.
pub mod timeline;
/// 2D phase-plane loop.
pub mod timeloop;

pub use graphics::WaveformGraphics;
pub use structure::sample_structure_paths;
pub use timeline::{sample_timeline, TimelineAxis};
pub use timeloop::sample_timeloop;

use log::trace;

use crate::compose::{AdditiveComposite, UnitSample};
use crate::geometry::{Path, Point, Region};
use crate::projection::Projection;

/// How step indices map onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSpacing {
    /// `Δt = 1/(n − 1)`: first sample at 0, last at exactly 1.
    Open,
    /// `Δt = 1/n`: the last sample stops one step short of a full turn, for
    /// paths that wrap around.
    Closed,
}

impl StepSpacing {
    /// Step size for `count` samples. Zero when there is at most one sample
    /// on an open path.
    pub fn step(self, count: usize) -> f64 {
        match self {
            StepSpacing::Open if count > 1 => 1.0 / (count - 1) as f64,
            StepSpacing::Open => 0.0,
            StepSpacing::Closed if count > 0 => 1.0 / count as f64,
            StepSpacing::Closed => 0.0,
        }
    }
}

/// Evaluate `sample` at `count` evenly spaced indices, in order.
pub fn sample_steps<T>(count: usize, spacing: StepSpacing, mut sample: impl FnMut(f64) -> T) -> Vec<T> {
    let step = spacing.step(count);
    (0..count).map(|index| sample(step * index as f64)).collect()
}

/// Shared driver for the timelines and the timeloop: sample an additive
/// composite over one period and project each sample with `to_point`.
pub fn sample_time_graphic<S: UnitSample>(
    composite: &AdditiveComposite<S>,
    sample_count: usize,
    canvas: Region,
    to_point: impl Fn(&Projection, f64, S) -> Point,
) -> Path {
    let projection = Projection::for_canvas(canvas, composite.max_unit_radius());
    trace!(
        "sampling {} harmonics at {} steps",
        composite.harmonic_count(),
        sample_count
    );
    let points = sample_steps(sample_count, StepSpacing::Open, |time_index| {
        to_point(&projection, time_index, composite.unit_sample(time_index))
    });
    Path::sequence(points)
}
