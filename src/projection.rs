//! Mapping unit-scale composite samples into a bounded target region.

use log::debug;

use crate::geometry::{Point, Region};

/// Scales unit samples by `max_target_radius / max_unit_radius` and offsets
/// them by the target's center.
///
/// `max_target_radius` is half the target's shorter side. When the unit
/// radius is zero or not finite the scale factor is zero: every sample lands
/// on the target center and nothing is ever NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    target: Region,
    center: Point,
    scale: f64,
}

impl Projection {
    /// Project into `target` directly.
    pub fn new(target: Region, max_unit_radius: f64) -> Self {
        let max_target_radius = target.root() / 2.0;
        let scale = if max_unit_radius > 0.0 && max_unit_radius.is_finite() {
            max_target_radius / max_unit_radius
        } else {
            debug!("degenerate unit radius {max_unit_radius}, collapsing projection to center");
            0.0
        };
        Self {
            target,
            center: target.center(),
            scale,
        }
    }

    /// Project into the padded square of a full canvas.
    pub fn for_canvas(canvas: Region, max_unit_radius: f64) -> Self {
        Self::new(canvas.padded_square(), max_unit_radius)
    }

    /// True when the unit radius gave no usable scale.
    pub fn is_degenerate(&self) -> bool {
        self.scale == 0.0
    }

    /// Project a 2D unit sample.
    pub fn project(&self, unit: Point) -> Point {
        unit * self.scale + self.center
    }

    /// Project a scalar sample onto the horizontal axis.
    pub fn project_x(&self, unit: f64) -> f64 {
        unit * self.scale + self.center.x
    }

    /// Project a scalar sample onto the vertical axis.
    pub fn project_y(&self, unit: f64) -> f64 {
        unit * self.scale + self.center.y
    }

    /// Time index `t ∈ [0, 1]` spread across the target's width.
    pub fn time_x(&self, time_index: f64) -> f64 {
        time_index * self.target.width + self.target.anchor.x
    }

    /// Time index `t ∈ [0, 1]` spread down the target's height.
    pub fn time_y(&self, time_index: f64) -> f64 {
        time_index * self.target.height + self.target.anchor.y
    }

    /// Undo [`Projection::project`]. `None` for a degenerate projection.
    pub fn unproject(&self, projected: Point) -> Option<Point> {
        if self.is_degenerate() {
            return None;
        }
        Some((projected - self.center) * (1.0 / self.scale))
    }
}
