use super::sample_time_graphic;
use crate::compose::superpose_vectors;
use crate::geometry::{Path, Region};
use crate::waveform::CompositeWaveform;

/// Open polyline tracing the full 2D additive composite over one period.
pub fn sample_timeloop(waveform: &CompositeWaveform, sample_count: usize, canvas: Region) -> Path {
    sample_time_graphic(
        &superpose_vectors(waveform),
        sample_count,
        canvas,
        |projection, _time_index, unit| projection.project(unit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::waveform::BasicWaveform;
    use crate::TIMELOOP_SAMPLE_COUNT;

    #[test]
    fn loop_closes_on_itself() {
        let waveform: CompositeWaveform = vec![
            BasicWaveform::new(1.0, 0.5, 0.1).unwrap(),
            BasicWaveform::new(0.3, 0.6, 0.7).unwrap(),
        ]
        .into();
        let path = sample_timeloop(&waveform, TIMELOOP_SAMPLE_COUNT, Region::canvas(256.0, 256.0));
        assert_eq!(path.len(), TIMELOOP_SAMPLE_COUNT);
        let first = path.points[0];
        let last = path.points[TIMELOOP_SAMPLE_COUNT - 1];
        assert!(first.distance(last) < 1e-6);
    }

    #[test]
    fn unit_circle_traces_inscribed_circle() {
        let waveform: CompositeWaveform = vec![BasicWaveform::default()].into();
        let path = sample_timeloop(&waveform, 64, Region::canvas(256.0, 256.0));
        let center = Point::new(128.0, 128.0);
        for point in &path.points {
            assert!((point.distance(center) - 96.0).abs() < 1e-9);
        }
    }

    #[test]
    fn stays_inside_padded_square() {
        let waveform: CompositeWaveform = vec![
            BasicWaveform::new(1.0, 0.2, 0.3).unwrap(),
            BasicWaveform::new(0.8, 0.8, 0.0).unwrap(),
            BasicWaveform::new(0.1, 0.4, 0.5).unwrap(),
        ]
        .into();
        let canvas = Region::canvas(320.0, 200.0);
        let target = canvas.padded_square();
        let path = sample_timeloop(&waveform, 256, canvas);
        let slack = 1e-6;
        assert!(path.points.iter().all(|p| {
            p.x >= target.anchor.x - slack
                && p.x <= target.anchor.x + target.width + slack
                && p.y >= target.anchor.y - slack
                && p.y <= target.anchor.y + target.height + slack
        }));
    }

    #[test]
    fn empty_waveform_collapses_to_center() {
        let path = sample_timeloop(&CompositeWaveform::new(), 8, Region::canvas(100.0, 100.0));
        assert!(path.points.iter().all(|p| *p == Point::new(50.0, 50.0)));
    }
}
