use super::{sample_structure_paths, sample_timeline, sample_timeloop, TimelineAxis};
use crate::geometry::{Path, Region};
use crate::waveform::CompositeWaveform;
use crate::{STRUCTURE_SAMPLE_COUNT, TIMELINE_SAMPLE_COUNT, TIMELOOP_SAMPLE_COUNT};

/// Every graphic of a waveform, sampled at the default resolutions.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformGraphics {
    pub structure: Vec<Path>,
    pub timeloop: Path,
    pub cosine_timeline: Path,
    pub sine_timeline: Path,
}

impl WaveformGraphics {
    /// Recompute all graphics. Call again whenever the waveform changes; the
    /// result holds no reference to its inputs.
    pub fn sample(waveform: &CompositeWaveform, canvas: Region) -> Self {
        Self {
            structure: sample_structure_paths(waveform, STRUCTURE_SAMPLE_COUNT, canvas),
            timeloop: sample_timeloop(waveform, TIMELOOP_SAMPLE_COUNT, canvas),
            cosine_timeline: sample_timeline(
                waveform,
                TimelineAxis::Cosine,
                TIMELINE_SAMPLE_COUNT,
                canvas,
            ),
            sine_timeline: sample_timeline(
                waveform,
                TimelineAxis::Sine,
                TIMELINE_SAMPLE_COUNT,
                canvas,
            ),
        }
    }
}
