//! Quad-corner warp: free-form projective distortion of image shapes.
//!
//! The model stores per-corner offset vectors rather than absolute
//! corners, so warp composes with move/rotate/scale without special
//! cases. The homography solve maps `[0,width] x [0,height]` onto four
//! target corners; renderers feed it to their texture pipeline.

use nalgebra::{Matrix3, Vector3};
use tracing::debug;

use vexel_core::{Point, TransformError, EPSILON};

use crate::model::{QuadCorner, Shape};

/// Moves one warp corner of a shape by `delta`, leaving the other three
/// offsets untouched. Only rectangles and images carry warp state.
pub fn warp_corner(
    shape: &Shape,
    corner: QuadCorner,
    delta: Point,
) -> Result<Shape, TransformError> {
    match shape {
        Shape::Rect(s) => {
            let mut out = s.clone();
            let offset = s.warp.offset(corner).add(delta);
            out.warp = s.warp.with_offset(corner, offset);
            Ok(Shape::Rect(out))
        }
        Shape::Image(s) => {
            let mut out = s.clone();
            let offset = s.warp.offset(corner).add(delta);
            out.warp = s.warp.with_offset(corner, offset);
            Ok(Shape::Image(out))
        }
        other => Err(TransformError::InvalidHandle {
            handle: format!("warp:{:?}", corner),
            tool: other.tool().to_string(),
        }),
    }
}

/// The four warped corner positions of a warpable shape, in top-left,
/// top-right, bottom-right, bottom-left order.
pub fn warped_corners(shape: &Shape) -> Result<[Point; 4], TransformError> {
    match shape {
        Shape::Rect(s) => Ok(s.warped_corners()),
        Shape::Image(s) => Ok(s.warped_corners()),
        other => Err(TransformError::UnsupportedVariant {
            operation: "quad warp",
            tool: other.tool().to_string(),
        }),
    }
}

/// Solves the 8-parameter planar homography mapping the rectangle
/// `[0,width] x [0,height]` onto `corners` (top-left, top-right,
/// bottom-right, bottom-left).
///
/// The two perspective coefficients come from the edge-vector cross term.
/// When that system's determinant is within epsilon of zero the edge
/// pairs are near-parallel and the perspective term is numerically
/// unstable, so the solve falls back to affine-only (coefficients zero).
/// Returns `None` for zero width/height; callers leave the shape unwarped.
pub fn quad_projective_matrix(
    width: f64,
    height: f64,
    corners: &[Point; 4],
) -> Option<Matrix3<f64>> {
    if width.abs() < EPSILON || height.abs() < EPSILON {
        return None;
    }
    if corners.iter().any(|c| !c.is_finite()) {
        return None;
    }

    let [c0, c1, c2, c3] = *corners;

    // Unit-square solve first, then rescale the input axes to the box.
    let d1 = c1.sub(c2);
    let d2 = c3.sub(c2);
    let sum = Point::new(c0.x - c1.x + c2.x - c3.x, c0.y - c1.y + c2.y - c3.y);

    let (g, h) = if sum.length_sq() < EPSILON {
        (0.0, 0.0)
    } else {
        let det = d1.x * d2.y - d1.y * d2.x;
        if det.abs() < EPSILON {
            debug!("near-parallel warp edges, dropping perspective term");
            (0.0, 0.0)
        } else {
            (
                (sum.x * d2.y - sum.y * d2.x) / det,
                (d1.x * sum.y - d1.y * sum.x) / det,
            )
        }
    };

    let a = c1.x - c0.x + g * c1.x;
    let b = c3.x - c0.x + h * c3.x;
    let c = c0.x;
    let d = c1.y - c0.y + g * c1.y;
    let e = c3.y - c0.y + h * c3.y;
    let f = c0.y;

    #[rustfmt::skip]
    let m = Matrix3::new(
        a / width, b / height, c,
        d / width, e / height, f,
        g / width, h / height, 1.0,
    );
    Some(m)
}

/// Applies a projective matrix to a point, performing the perspective
/// divide. A vanishing denominator returns the undivided point, which
/// only happens for inputs far outside the source rectangle.
pub fn project_point(m: &Matrix3<f64>, p: Point) -> Point {
    let v = m * Vector3::new(p.x, p.y, 1.0);
    if v.z.abs() < EPSILON {
        return Point::new(v.x, v.y);
    }
    Point::new(v.x / v.z, v.y / v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageShape;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn identity_quad_is_identity_matrix() {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(0.0, 50.0),
        ];
        let m = quad_projective_matrix(100.0, 50.0, &corners).unwrap();
        assert!(close(project_point(&m, Point::new(0.0, 0.0)), corners[0]));
        assert!(close(project_point(&m, Point::new(50.0, 25.0)), Point::new(50.0, 25.0)));
        assert!(close(project_point(&m, Point::new(100.0, 50.0)), corners[2]));
    }

    #[test]
    fn corners_map_exactly_under_perspective() {
        let corners = [
            Point::new(10.0, 5.0),
            Point::new(90.0, -10.0),
            Point::new(120.0, 70.0),
            Point::new(-5.0, 60.0),
        ];
        let m = quad_projective_matrix(100.0, 50.0, &corners).unwrap();
        let sources = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(0.0, 50.0),
        ];
        for (src, target) in sources.iter().zip(corners.iter()) {
            assert!(close(project_point(&m, *src), *target));
        }
    }

    #[test]
    fn zero_extent_box_has_no_matrix() {
        let corners = [Point::ZERO; 4];
        assert!(quad_projective_matrix(0.0, 50.0, &corners).is_none());
        assert!(quad_projective_matrix(100.0, 0.0, &corners).is_none());
    }

    #[test]
    fn warp_corner_updates_single_offset() {
        let img = Shape::Image(ImageShape::new(0.0, 0.0, 100.0, 50.0, "asset-1"));
        let warped = warp_corner(&img, QuadCorner::BottomRight, Point::new(5.0, -3.0)).unwrap();
        let Shape::Image(s) = &warped else { panic!() };
        assert_eq!(s.warp.bottom_right, Point::new(5.0, -3.0));
        assert_eq!(s.warp.top_left, Point::ZERO);

        // Dragging accumulates.
        let again = warp_corner(&warped, QuadCorner::BottomRight, Point::new(1.0, 1.0)).unwrap();
        let Shape::Image(s) = again else { panic!() };
        assert_eq!(s.warp.bottom_right, Point::new(6.0, -2.0));
    }

    #[test]
    fn rect_warp_moves_one_corner() {
        let rect = Shape::Rect(crate::model::RectShape::new(0.0, 0.0, 10.0, 10.0));
        let warped = warp_corner(&rect, QuadCorner::TopLeft, Point::new(-2.0, 1.0)).unwrap();
        let corners = warped_corners(&warped).unwrap();
        assert_eq!(corners[0], Point::new(-2.0, 1.0));
        assert_eq!(corners[1], Point::new(10.0, 0.0));
    }

    #[test]
    fn warp_on_point_based_shape_is_invalid() {
        let brush = Shape::Brush(crate::model::BrushShape::new(vec![Point::ZERO], 1.0));
        assert!(warp_corner(&brush, QuadCorner::TopLeft, Point::ZERO).is_err());
        assert!(warped_corners(&brush).is_err());
    }
}
