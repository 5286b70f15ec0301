use std::f64::consts::TAU;

use super::Point;

/*
Ellipse Perimeter Sampling
==========================

Every harmonic of a waveform is an ellipse. Sampling a harmonic means asking
for the point on its perimeter at some angle.

Angle Index
-----------

Angles are given as an *angle index*: a fraction of a full turn.

  0.0   -> 0 rad
  0.25  -> π/2
  1.0   -> 2π (same point as 0.0)

Indices are NOT wrapped. Harmonic `i` is evaluated at `t · 2^i`, which leaves
[0, 1) as soon as i > 0; sin/cos take care of the periodicity.

The Closed Form
---------------

For an axis-aligned ellipse with radii a (x) and b (y), the perimeter point
in direction θ is the intersection of the ray at θ with the ellipse:

              a · b
  r(θ) = ─────────────────────────
         √((b·cos θ)² + (a·sin θ)²)

  x = r(θ) · cos θ
  y = r(θ) · sin θ

This is a polar-ray parameterisation, not the usual (a cos θ, b sin θ): the
returned point really sits at angle θ from the center.

Rotation
--------

The unrotated vector is then turned by 2π · rotation with the standard
rotation matrix:

  x' = x·cos φ − y·sin φ
  y' = x·sin φ + y·cos φ

Cosine and sine samples are simply the x' and y' components. Timelines and
audio only ever need one of them.
*/

/// An ellipse with independent radii and a rotation given as a fraction of a
/// full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Fraction of a full turn, expected in [0, 1).
    pub rotation: f64,
}

impl Ellipse {
    pub const fn new(center: Point, radius_x: f64, radius_y: f64, rotation: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            rotation,
        }
    }

    /// Largest distance from the center to the perimeter.
    pub fn max_radius(&self) -> f64 {
        self.radius_x.max(self.radius_y)
    }

    /// Perimeter vector before rotation, relative to the center.
    pub fn base_perimeter_vector(&self, angle_index: f64) -> Point {
        let (sin, cos) = (TAU * angle_index).sin_cos();
        let (a, b) = (self.radius_x, self.radius_y);
        let denominator = ((b * cos).powi(2) + (a * sin).powi(2)).sqrt();
        // Zero-radius ellipse: the whole perimeter is the center.
        if denominator == 0.0 {
            return Point::ORIGIN;
        }
        let radius = a * b / denominator;
        Point::new(radius * cos, radius * sin)
    }

    /// Rotated perimeter vector, relative to the center.
    pub fn perimeter_vector(&self, angle_index: f64) -> Point {
        self.base_perimeter_vector(angle_index)
            .rotated(TAU * self.rotation)
    }

    /// Absolute perimeter point.
    pub fn perimeter_point(&self, angle_index: f64) -> Point {
        self.perimeter_vector(angle_index) + self.center
    }

    /// X component of the rotated perimeter vector.
    pub fn perimeter_cosine(&self, angle_index: f64) -> f64 {
        self.perimeter_vector(angle_index).x
    }

    /// Y component of the rotated perimeter vector.
    pub fn perimeter_sine(&self, angle_index: f64) -> f64 {
        self.perimeter_vector(angle_index).y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn circle_quadrants() {
        let r = 3.0;
        let circle = Ellipse::new(Point::ORIGIN, r, r, 0.0);
        assert_close(circle.perimeter_point(0.0), Point::new(r, 0.0));
        assert_close(circle.perimeter_point(0.25), Point::new(0.0, r));
        assert_close(circle.perimeter_point(0.5), Point::new(-r, 0.0));
        assert_close(circle.perimeter_point(0.75), Point::new(0.0, -r));
    }

    #[test]
    fn perimeter_is_periodic() {
        let ellipse = Ellipse::new(Point::new(1.0, -2.0), 2.0, 0.5, 0.3);
        for step in 0..32 {
            let t = step as f64 / 7.0 - 2.0;
            assert_close(ellipse.perimeter_point(t + 1.0), ellipse.perimeter_point(t));
        }
    }

    #[test]
    fn unwrapped_indices_keep_their_angle() {
        // 2.25 turns lands where 0.25 does; no clamping to [0, 1).
        let ellipse = Ellipse::new(Point::ORIGIN, 2.0, 1.0, 0.0);
        assert_close(ellipse.perimeter_vector(2.25), Point::new(0.0, 1.0));
        assert_close(ellipse.perimeter_vector(-0.75), Point::new(0.0, 1.0));
    }

    #[test]
    fn axis_points_hit_the_radii() {
        let ellipse = Ellipse::new(Point::ORIGIN, 2.0, 0.5, 0.0);
        assert_close(ellipse.perimeter_vector(0.0), Point::new(2.0, 0.0));
        assert_close(ellipse.perimeter_vector(0.25), Point::new(0.0, 0.5));
    }

    #[test]
    fn perimeter_point_lies_on_the_ellipse() {
        let (a, b) = (3.0, 1.25);
        let ellipse = Ellipse::new(Point::ORIGIN, a, b, 0.0);
        for step in 0..50 {
            let p = ellipse.base_perimeter_vector(step as f64 / 50.0);
            let implicit = (p.x / a).powi(2) + (p.y / b).powi(2);
            assert!((implicit - 1.0).abs() < EPS, "off the ellipse: {implicit}");
        }
    }

    #[test]
    fn rotation_is_a_fraction_of_a_turn() {
        let quarter = Ellipse::new(Point::ORIGIN, 2.0, 1.0, 0.25);
        assert_close(quarter.perimeter_vector(0.0), Point::new(0.0, 2.0));
        assert!((quarter.perimeter_cosine(0.0)).abs() < EPS);
        assert!((quarter.perimeter_sine(0.0) - 2.0).abs() < EPS);
    }

    #[test]
    fn center_offsets_point_but_not_vector() {
        let ellipse = Ellipse::new(Point::new(10.0, 5.0), 1.0, 1.0, 0.0);
        assert_close(ellipse.perimeter_vector(0.0), Point::new(1.0, 0.0));
        assert_close(ellipse.perimeter_point(0.0), Point::new(11.0, 5.0));
    }

    #[test]
    fn zero_radius_does_not_produce_nan() {
        let dot = Ellipse::new(Point::new(1.0, 1.0), 0.0, 0.0, 0.4);
        let p = dot.perimeter_point(0.1);
        assert!(p.is_finite());
        assert_close(p, Point::new(1.0, 1.0));
    }
}
