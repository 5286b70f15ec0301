use crate::geometry::Point;

/// A value produced by sampling harmonics: a scalar for timelines and audio,
/// a vector for the timeloop.
pub trait UnitSample: Copy + std::fmt::Debug {
    const ZERO: Self;

    fn combine(self, other: Self) -> Self;

    fn scale(self, factor: f64) -> Self;
}

impl UnitSample for f64 {
    const ZERO: Self = 0.0;

    fn combine(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl UnitSample for Point {
    const ZERO: Self = Point::ORIGIN;

    fn combine(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}
