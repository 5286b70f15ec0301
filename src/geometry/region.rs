#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;
use crate::CANVAS_PADDING_DIVISOR;

/// Axis-aligned rectangle anchored at its top-left corner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub anchor: Point,
    pub width: f64,
    pub height: f64,
}

impl Region {
    /// Negative dimensions are clamped to zero.
    pub fn new(anchor: Point, width: f64, height: f64) -> Self {
        Self {
            anchor,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Full canvas of the given size, anchored at the origin.
    pub fn canvas(width: f64, height: f64) -> Self {
        Self::new(Point::ORIGIN, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.anchor.x + self.width / 2.0,
            self.anchor.y + self.height / 2.0,
        )
    }

    /// Length of the shorter side.
    pub fn root(&self) -> f64 {
        self.width.min(self.height)
    }

    /// The drawable square inside a canvas: the shorter side minus a padding
    /// of `root / 8` on each side, centered in this region.
    pub fn padded_square(&self) -> Region {
        let root = self.root();
        let padding = root / CANVAS_PADDING_DIVISOR;
        let side = root - 2.0 * padding;
        let center = self.center();
        Region::new(
            Point::new(center.x - side / 2.0, center.y - side / 2.0),
            side,
            side,
        )
    }
}
