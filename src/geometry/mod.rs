//! Plane geometry used by every waveform graphic.
//!
//! Angles throughout the crate are expressed as *angle indices*: fractions of a
//! full turn rather than radians. Conversion to radians happens inside the
//! ellipse sampler and nowhere else.

/// Ellipses and perimeter sampling.
pub mod ellipse;
/// Point sequences handed to renderers.
pub mod path;
/// 2D points and vectors.
pub mod point;
/// Axis-aligned target rectangles.
pub mod region;

pub use ellipse::Ellipse;
pub use path::{Path, PathVariant};
pub use point::Point;
pub use region::Region;
