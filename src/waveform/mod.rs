//! The waveform data model: single elliptical harmonics and ordered
//! composites of them.

/// A single validated harmonic.
pub mod basic;
/// Ordered harmonic lists and their edit operations.
pub mod composite;

pub use basic::{BasicWaveform, HarmonicPatch};
pub use composite::CompositeWaveform;
