//! Axis flips.
//!
//! Mirrors every coordinate across the line through `center` perpendicular
//! to the axis. Variants with bezier outlines (rectangle, ellipse,
//! polygon) convert to an equivalent closed path first, because mirroring
//! reverses handle sidedness and only the path representation can keep
//! the handles honest. Open paths reverse their anchor order so traversal
//! direction stays consistent; closed paths do not.

use vexel_core::{Axis, Point};

use crate::model::{Anchor, PathShape, Shape};

/// Flips a shape across `axis` about `center`, returning a new shape.
///
/// Flipping twice with the same arguments reconstructs the original
/// geometry (possibly in path representation for box variants).
pub fn flip_shape(shape: &Shape, center: Point, axis: Axis) -> Shape {
    match shape {
        Shape::Brush(s) => {
            let mut out = s.clone();
            out.points = s.points.iter().map(|p| p.mirrored(center, axis)).collect();
            Shape::Brush(out)
        }
        Shape::Path(s) => Shape::Path(flip_path(s, center, axis)),
        Shape::Rect(s) => {
            if !s.warp.is_identity() {
                // The bezier conversion cannot carry warp offsets, so a
                // warped rectangle mirrors its box and warp in place.
                let mut out = s.clone();
                match axis {
                    Axis::X => {
                        out.bounds = s.bounds.mirrored_x(center);
                        out.warp = s.warp.mirrored_x();
                    }
                    Axis::Y => {
                        out.bounds = s.bounds.mirrored_y(center);
                        out.warp = s.warp.mirrored_y();
                    }
                }
                return Shape::Rect(out);
            }
            let path = PathShape::new(s.to_anchors(), true, s.stroke_width)
                .with_id(s.id.clone())
                .with_fill(s.fill);
            Shape::Path(flip_path(&path, center, axis))
        }
        Shape::Ellipse(s) => {
            let path = PathShape::new(s.to_anchors(), true, s.stroke_width)
                .with_id(s.id.clone())
                .with_fill(s.fill);
            Shape::Path(flip_path(&path, center, axis))
        }
        Shape::Polygon(s) => {
            let path = PathShape::new(s.to_anchors(), true, s.stroke_width)
                .with_id(s.id.clone())
                .with_fill(s.fill);
            Shape::Path(flip_path(&path, center, axis))
        }
        Shape::Image(s) => {
            // Geometry only: the caller re-encodes the backing raster,
            // keyed by asset_id; the mirror sign records the orientation.
            let mut out = s.clone();
            match axis {
                Axis::X => {
                    out.bounds = s.bounds.mirrored_x(center);
                    out.warp = s.warp.mirrored_x();
                }
                Axis::Y => {
                    out.bounds = s.bounds.mirrored_y(center);
                    out.warp = s.warp.mirrored_y();
                }
            }
            Shape::Image(out)
        }
        Shape::Frame(s) => {
            let mut out = s.clone();
            out.bounds = match axis {
                Axis::X => s.bounds.mirrored_x(center),
                Axis::Y => s.bounds.mirrored_y(center),
            };
            Shape::Frame(out)
        }
        Shape::Arc(s) => {
            let mut out = s.clone();
            out.start = s.start.mirrored(center, axis);
            out.mid = s.mid.mirrored(center, axis);
            out.end = s.end.mirrored(center, axis);
            // Mirroring reverses the arc's handedness; swapping the
            // endpoints on a horizontal flip restores the drawn sweep.
            if axis == Axis::X {
                std::mem::swap(&mut out.start, &mut out.end);
            }
            Shape::Arc(out)
        }
        Shape::Group(g) => {
            let mut out = g.clone();
            out.children = g
                .children
                .iter()
                .map(|c| flip_shape(c, center, axis))
                .collect();
            Shape::Group(out)
        }
    }
}

fn flip_path(path: &PathShape, center: Point, axis: Axis) -> PathShape {
    let mirrored: Vec<Anchor> = path
        .anchors
        .iter()
        .map(|a| a.map_points(|p| p.mirrored(center, axis)))
        .collect();

    let anchors = if path.is_closed || mirrored.len() < 2 {
        // Closed loops keep their order: each mirrored segment is already
        // the exact mirror of the original.
        mirrored
    } else {
        // Open paths reverse so traversal direction stays consistent;
        // reversing swaps every anchor's handle sidedness.
        mirrored.iter().rev().map(Anchor::reversed).collect()
    };

    PathShape {
        anchors,
        ..path.clone()
    }
}
