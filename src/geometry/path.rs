#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;

/// How a renderer should stroke a path.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathVariant {
    /// Open polyline (timelines, timeloop).
    Sequence,
    /// Closed polygon; the last point connects back to the first.
    Shape,
}

/// An ordered list of projected points plus how to stroke them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub variant: PathVariant,
    pub points: Vec<Point>,
}

impl Path {
    pub fn sequence(points: Vec<Point>) -> Self {
        Self {
            variant: PathVariant::Sequence,
            points,
        }
    }

    pub fn shape(points: Vec<Point>) -> Self {
        Self {
            variant: PathVariant::Shape,
            points,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.variant, PathVariant::Shape)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs to stroke, including the closing segment of a
    /// shape.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let closing = match (self.is_closed(), self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 2 => Some((last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }
}
