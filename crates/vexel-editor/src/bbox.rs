//! Per-variant bounding boxes.
//!
//! Curved variants are sampled through the curve sampler so box math and
//! hit testing agree on the same outline approximation. Rotated boxes take
//! the extents of their rotated corners; rotated ellipses use the closed
//! form instead of sampling.

use tracing::debug;

use vexel_core::{BBox, Point, EPSILON};

use crate::model::{PathShape, Shape, PATH_SAMPLE_STEPS};
use crate::sampler::{sample_arc, sample_path};

/// Axis-aligned bounding box of a single shape.
///
/// With `include_stroke`, the box grows by half the stroke width on every
/// side. A childless group yields a zero box, not "no geometry"; callers
/// that need to distinguish emptiness aggregate through
/// [`shapes_bounding_box`] instead.
pub fn shape_bounding_box(shape: &Shape, include_stroke: bool) -> BBox {
    let raw = match shape {
        Shape::Brush(s) => BBox::from_points(&s.points).unwrap_or(BBox::ZERO),
        Shape::Path(s) => return path_bounding_box(s, include_stroke),
        Shape::Rect(s) => BBox::from_points(&s.warped_corners()).unwrap_or(BBox::ZERO),
        Shape::Frame(s) => BBox::from_points(&s.bounds.rotated_corners()).unwrap_or(BBox::ZERO),
        Shape::Image(s) => BBox::from_points(&s.warped_corners()).unwrap_or(BBox::ZERO),
        Shape::Polygon(s) => BBox::from_points(&s.vertices()).unwrap_or(BBox::ZERO),
        Shape::Ellipse(s) => ellipse_bounding_box(
            s.bounds.center(),
            s.radius_x(),
            s.radius_y(),
            s.bounds.rotation,
        ),
        Shape::Arc(s) => {
            let pts = sample_arc(s.start, s.mid, s.end, PATH_SAMPLE_STEPS);
            BBox::from_points(&pts).unwrap_or(BBox::ZERO)
        }
        Shape::Group(g) => {
            return g
                .children
                .iter()
                .map(|c| shape_bounding_box(c, include_stroke))
                .reduce(|a, b| a.union(&b))
                .unwrap_or(BBox::ZERO);
        }
    };

    if include_stroke {
        raw.inflated(shape.stroke_width() / 2.0)
    } else {
        raw
    }
}

fn path_bounding_box(path: &PathShape, include_stroke: bool) -> BBox {
    let samples = sample_path(&path.anchors, PATH_SAMPLE_STEPS, path.is_closed);
    match BBox::from_points(&samples) {
        Some(b) if samples.len() > 1 => {
            if include_stroke {
                b.inflated(path.stroke_width / 2.0)
            } else {
                b
            }
        }
        // Single-anchor path: a zero-size box on the anchor, inflated by
        // the stroke so the degenerate path still has a grabbable extent.
        Some(b) => b.inflated(path.stroke_width / 2.0),
        None => BBox::ZERO,
    }
}

/// Closed-form box of a rotated ellipse.
fn ellipse_bounding_box(center: Point, rx: f64, ry: f64, rotation: f64) -> BBox {
    if rotation.abs() < EPSILON {
        return BBox::new(center.x - rx, center.y - ry, rx * 2.0, ry * 2.0);
    }
    let (sin, cos) = rotation.sin_cos();
    let width = 2.0 * ((rx * cos).powi(2) + (ry * sin).powi(2)).sqrt();
    let height = 2.0 * ((rx * sin).powi(2) + (ry * cos).powi(2)).sqrt();
    BBox::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
}

/// Union of every shape's box. `None` for empty input, and `None` when
/// every computed box is non-finite, which guards aggregates against
/// malformed geometry leaking NaN into the document.
pub fn shapes_bounding_box(shapes: &[Shape], include_stroke: bool) -> Option<BBox> {
    let mut acc: Option<BBox> = None;
    for shape in shapes {
        let b = shape_bounding_box(shape, include_stroke);
        if !b.is_finite() {
            debug!(id = shape.id(), "skipping non-finite bounding box");
            continue;
        }
        acc = Some(match acc {
            Some(prev) => prev.union(&b),
            None => b,
        });
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Anchor, BrushShape, EllipseShape, GroupShape, PathShape, PolygonShape, RectShape,
    };

    #[test]
    fn unrotated_rect_box_is_exact() {
        let rect = Shape::Rect(RectShape::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(shape_bounding_box(&rect, false), BBox::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn stroke_expands_by_half_width() {
        let mut r = RectShape::new(0.0, 0.0, 10.0, 10.0);
        r.stroke_width = 4.0;
        let b = shape_bounding_box(&Shape::Rect(r), true);
        assert_eq!(b, BBox::new(-2.0, -2.0, 14.0, 14.0));
    }

    #[test]
    fn rotated_rect_box_covers_corners() {
        let rect = RectShape::new(-5.0, -5.0, 10.0, 10.0)
            .with_rotation(std::f64::consts::FRAC_PI_4);
        let b = shape_bounding_box(&Shape::Rect(rect), false);
        let expected = 10.0 * std::f64::consts::SQRT_2;
        assert!((b.width - expected).abs() < 1e-9);
        assert!((b.height - expected).abs() < 1e-9);
    }

    #[test]
    fn rotated_ellipse_closed_form() {
        let e = EllipseShape::new(-50.0, -30.0, 100.0, 60.0)
            .with_rotation(std::f64::consts::FRAC_PI_4);
        let b = shape_bounding_box(&Shape::Ellipse(e), false);
        let (sin, cos) = std::f64::consts::FRAC_PI_4.sin_cos();
        let expected_w = 2.0 * ((50.0 * cos).powi(2) + (30.0 * sin).powi(2)).sqrt();
        let expected_h = 2.0 * ((50.0 * sin).powi(2) + (30.0 * cos).powi(2)).sqrt();
        assert!((b.width - expected_w).abs() < 1e-9);
        assert!((b.height - expected_h).abs() < 1e-9);
    }

    #[test]
    fn childless_group_is_zero_box() {
        let g = Shape::Group(GroupShape::new(vec![]));
        assert_eq!(shape_bounding_box(&g, false), BBox::ZERO);
    }

    #[test]
    fn group_unions_children() {
        let g = Shape::Group(GroupShape::new(vec![
            Shape::Rect(RectShape::new(0.0, 0.0, 10.0, 10.0)),
            Shape::Rect(RectShape::new(50.0, 50.0, 10.0, 10.0)),
        ]));
        assert_eq!(shape_bounding_box(&g, false), BBox::new(0.0, 0.0, 60.0, 60.0));
    }

    #[test]
    fn aggregate_empty_is_none_and_single_matches() {
        assert!(shapes_bounding_box(&[], false).is_none());
        let shape = Shape::Brush(BrushShape::new(
            vec![Point::new(0.0, 0.0), Point::new(5.0, 9.0)],
            2.0,
        ));
        assert_eq!(
            shapes_bounding_box(std::slice::from_ref(&shape), true),
            Some(shape_bounding_box(&shape, true))
        );
    }

    #[test]
    fn aggregate_skips_non_finite() {
        let bad = Shape::Brush(BrushShape::new(vec![Point::new(f64::NAN, 0.0)], 1.0));
        assert!(shapes_bounding_box(std::slice::from_ref(&bad), false).is_none());
    }

    #[test]
    fn single_anchor_path_inflates_by_stroke() {
        let path = PathShape::new(vec![Anchor::corner(Point::new(10.0, 10.0))], false, 6.0);
        let b = shape_bounding_box(&Shape::Path(path), false);
        assert_eq!(b, BBox::new(7.0, 7.0, 6.0, 6.0));
    }

    #[test]
    fn polygon_box_spans_vertices() {
        let p = PolygonShape::new(0.0, 0.0, 10.0, 10.0, 4);
        let b = shape_bounding_box(&Shape::Polygon(p), false);
        // A 4-gon inscribed in the box touches all four edge midpoints.
        assert!((b.width - 10.0).abs() < 1e-9);
        assert!((b.height - 10.0).abs() < 1e-9);
    }
}
