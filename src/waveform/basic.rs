#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WaveformError, WaveformResult};
use crate::geometry::{Ellipse, Point};

/// One harmonic: an ellipse with independent X/Y magnitudes and a phase given
/// as a fraction of a full turn.
///
/// Values are validated on construction and never change afterwards; edits go
/// through [`BasicWaveform::patched`], which builds a new value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "HarmonicFields")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicWaveform {
    magnitude_x: f64,
    magnitude_y: f64,
    phase: f64,
}

impl BasicWaveform {
    /// Validate and build a harmonic.
    ///
    /// Magnitudes must be finite and greater than zero; phase must lie in
    /// `[0, 1)`. Out-of-range phases are rejected, not wrapped.
    pub fn new(magnitude_x: f64, magnitude_y: f64, phase: f64) -> WaveformResult<Self> {
        check_magnitude("magnitude_x", magnitude_x)?;
        check_magnitude("magnitude_y", magnitude_y)?;
        check_phase(phase)?;
        Ok(Self {
            magnitude_x,
            magnitude_y,
            phase,
        })
    }

    /// Circular harmonic of the given radius and no phase offset.
    pub fn circle(radius: f64) -> WaveformResult<Self> {
        Self::new(radius, radius, 0.0)
    }

    pub fn magnitude_x(&self) -> f64 {
        self.magnitude_x
    }

    pub fn magnitude_y(&self) -> f64 {
        self.magnitude_y
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// A new harmonic with the patch's fields overriding this one's.
    pub fn patched(&self, patch: HarmonicPatch) -> WaveformResult<Self> {
        Self::new(
            patch.magnitude_x.unwrap_or(self.magnitude_x),
            patch.magnitude_y.unwrap_or(self.magnitude_y),
            patch.phase.unwrap_or(self.phase),
        )
    }

    /// The harmonic's ellipse placed at `center`.
    pub fn ellipse(&self, center: Point) -> Ellipse {
        Ellipse::new(center, self.magnitude_x, self.magnitude_y, self.phase)
    }
}

impl Default for BasicWaveform {
    /// Unit circle with no phase offset.
    fn default() -> Self {
        Self {
            magnitude_x: 1.0,
            magnitude_y: 1.0,
            phase: 0.0,
        }
    }
}

/// Partial update for a harmonic; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HarmonicPatch {
    pub magnitude_x: Option<f64>,
    pub magnitude_y: Option<f64>,
    pub phase: Option<f64>,
}

impl HarmonicPatch {
    pub fn is_empty(&self) -> bool {
        self.magnitude_x.is_none() && self.magnitude_y.is_none() && self.phase.is_none()
    }
}

fn check_magnitude(field: &'static str, value: f64) -> WaveformResult<()> {
    if !value.is_finite() {
        return Err(WaveformError::InvalidHarmonic {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(WaveformError::InvalidHarmonic {
            field,
            value,
            reason: "must be greater than 0",
        });
    }
    Ok(())
}

fn check_phase(value: f64) -> WaveformResult<()> {
    let reason = if !value.is_finite() {
        "must be a finite number"
    } else if value < 0.0 {
        "must be greater than or equal to 0"
    } else if value >= 1.0 {
        "must be less than 1"
    } else {
        return Ok(());
    };
    Err(WaveformError::InvalidHarmonic {
        field: "phase",
        value,
        reason,
    })
}

/// Unvalidated wire form, checked through `BasicWaveform::new` on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HarmonicFields {
    magnitude_x: f64,
    magnitude_y: f64,
    phase: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<HarmonicFields> for BasicWaveform {
    type Error = WaveformError;

    fn try_from(fields: HarmonicFields) -> WaveformResult<Self> {
        Self::new(fields.magnitude_x, fields.magnitude_y, fields.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_harmonic() {
        let harmonic = BasicWaveform::new(1.0, 0.5, 0.75).unwrap();
        assert_eq!(harmonic.magnitude_x(), 1.0);
        assert_eq!(harmonic.magnitude_y(), 0.5);
        assert_eq!(harmonic.phase(), 0.75);
    }

    #[test]
    fn rejects_non_positive_magnitudes() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                BasicWaveform::new(bad, 1.0, 0.0),
                Err(WaveformError::InvalidHarmonic { field: "magnitude_x", .. })
            ));
            assert!(matches!(
                BasicWaveform::new(1.0, bad, 0.0),
                Err(WaveformError::InvalidHarmonic { field: "magnitude_y", .. })
            ));
        }
    }

    #[test]
    fn rejects_phase_outside_unit_interval() {
        for bad in [-0.01, 1.0, 1.5, f64::NAN] {
            assert!(
                matches!(
                    BasicWaveform::new(1.0, 1.0, bad),
                    Err(WaveformError::InvalidHarmonic { field: "phase", .. })
                ),
                "phase {bad} should be rejected"
            );
        }
        assert!(BasicWaveform::new(1.0, 1.0, 0.0).is_ok());
        assert!(BasicWaveform::new(1.0, 1.0, 0.999).is_ok());
    }

    #[test]
    fn patch_builds_new_value() {
        let original = BasicWaveform::new(1.0, 1.0, 0.0).unwrap();
        let patched = original
            .patched(HarmonicPatch {
                phase: Some(0.5),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(patched.phase(), 0.5);
        assert_eq!(patched.magnitude_x(), 1.0);
        assert_eq!(original.phase(), 0.0);
    }

    #[test]
    fn patch_is_revalidated() {
        let original = BasicWaveform::default();
        let result = original.patched(HarmonicPatch {
            magnitude_y: Some(0.0),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn error_message_names_field() {
        let err = BasicWaveform::new(1.0, 1.0, 2.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid harmonic phase = 2: must be less than 1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let ok: BasicWaveform =
            serde_json::from_str(r#"{"magnitudeX":1.0,"magnitudeY":0.5,"phase":0.25}"#).unwrap();
        assert_eq!(ok.magnitude_y(), 0.5);
        let bad = serde_json::from_str::<BasicWaveform>(
            r#"{"magnitudeX":-1.0,"magnitudeY":0.5,"phase":0.25}"#,
        );
        assert!(bad.is_err());
    }
}
