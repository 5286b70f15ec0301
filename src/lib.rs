pub mod audio; // Audio sample buffers
pub mod compose; // Harmonic composition
pub mod error;
pub mod geometry;
pub mod io;
pub mod projection;
pub mod sampling; // Per-graphic sampling drivers
pub mod waveform;

pub use audio::generate_audio_samples;
pub use error::{WaveformError, WaveformResult};
pub use geometry::{Ellipse, Path, PathVariant, Point, Region};
pub use sampling::{sample_structure_paths, sample_timeline, sample_timeloop, TimelineAxis, WaveformGraphics};
pub use waveform::{BasicWaveform, CompositeWaveform, HarmonicPatch};

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const STRUCTURE_SAMPLE_COUNT: usize = 128;
pub const TIMELINE_SAMPLE_COUNT: usize = 128;
pub const TIMELOOP_SAMPLE_COUNT: usize = 256;
/// Peak amplitude of normalized audio.
pub const AUDIO_HEADROOM: f64 = 11.0 / 12.0;
/// Angular rate multiplier between consecutive harmonics.
pub const HARMONIC_RATIO: f64 = 2.0;
/// Largest audio buffer the generator will allocate: 32-bit float samples
/// filling a 4 GiB WAV data chunk.
pub const MAX_AUDIO_SAMPLES: usize = (u32::MAX / 4) as usize;
/// Peaks at or below this fraction of the composite's unit radius are
/// rounding residue and normalize to silence.
pub const SILENCE_THRESHOLD: f64 = 1e-12;
pub const CANVAS_PADDING_DIVISOR: f64 = 8.0;
pub const DEFAULT_CANVAS_SIZE: f64 = 256.0;
