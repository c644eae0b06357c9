//! The transform engine: pure `Shape -> Shape` operations.
//!
//! Move, rotate and scale are thin dispatchers over the per-variant
//! methods; the intricate operations (handle-based resize, axis flip,
//! projective quad warp) live in their own modules.

mod flip;
mod resize;
mod warp;

pub use flip::flip_shape;
pub use resize::resize_shape;
pub use warp::{project_point, quad_projective_matrix, warp_corner, warped_corners};

use vexel_core::Point;

use crate::model::{EditorShape, Shape};

/// Translates a shape by `(dx, dy)`. Groups move all children.
pub fn translate_shape(shape: &Shape, dx: f64, dy: f64) -> Shape {
    shape.translated(dx, dy)
}

/// Rotates a shape about an external `center` by `angle` radians.
///
/// Point-based variants rotate every coordinate; box-based variants orbit
/// their center and accumulate the angle into their `rotation` field;
/// groups rotate each child about the same external center.
pub fn rotate_shape(shape: &Shape, center: Point, angle: f64) -> Shape {
    shape.rotated(center, angle)
}

/// Scales a shape about `pivot` with independent axis factors. Negative
/// factors mirror box-based variants via their `scale_x`/`scale_y` signs
/// instead of producing negative extents.
pub fn scale_shape(shape: &Shape, pivot: Point, sx: f64, sy: f64) -> Shape {
    shape.scaled(pivot, sx, sy)
}
