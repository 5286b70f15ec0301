#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BasicWaveform, HarmonicPatch};
use crate::error::{WaveformError, WaveformResult};

/// Ordered list of harmonics. Index `i` is the `i`-th harmonic and runs at
/// `2^i` times the fundamental's angular rate.
///
/// An empty composite is valid and means "no waveform".
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeWaveform {
    harmonics: Vec<BasicWaveform>,
}

impl CompositeWaveform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_harmonics(harmonics: Vec<BasicWaveform>) -> Self {
        Self { harmonics }
    }

    pub fn harmonics(&self) -> &[BasicWaveform] {
        &self.harmonics
    }

    pub fn len(&self) -> usize {
        self.harmonics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.harmonics.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BasicWaveform> {
        self.harmonics.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BasicWaveform> {
        self.harmonics.iter()
    }

    /// Append a harmonic above the current highest one.
    pub fn push(&mut self, harmonic: BasicWaveform) {
        self.harmonics.push(harmonic);
    }

    /// Drop the highest harmonic.
    pub fn pop(&mut self) -> Option<BasicWaveform> {
        self.harmonics.pop()
    }

    /// Remove every harmonic.
    pub fn clear(&mut self) {
        self.harmonics.clear();
    }

    /// Replace harmonic `index` with a patched copy of itself.
    ///
    /// The waveform is left untouched if the index is missing or the patched
    /// harmonic fails validation.
    pub fn edit(&mut self, index: usize, patch: HarmonicPatch) -> WaveformResult<BasicWaveform> {
        let len = self.harmonics.len();
        let current = self
            .harmonics
            .get(index)
            .ok_or(WaveformError::HarmonicIndexOutOfRange { index, len })?;
        let next = current.patched(patch)?;
        self.harmonics[index] = next;
        Ok(next)
    }
}

impl From<Vec<BasicWaveform>> for CompositeWaveform {
    fn from(harmonics: Vec<BasicWaveform>) -> Self {
        Self::from_harmonics(harmonics)
    }
}

impl FromIterator<BasicWaveform> for CompositeWaveform {
    fn from_iter<I: IntoIterator<Item = BasicWaveform>>(iter: I) -> Self {
        Self::from_harmonics(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CompositeWaveform {
    type Item = &'a BasicWaveform;
    type IntoIter = std::slice::Iter<'a, BasicWaveform>;

    fn into_iter(self) -> Self::IntoIter {
        self.harmonics.iter()
    }
}
