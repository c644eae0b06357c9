//! Marquee and lasso selection tests.
//!
//! Marquee uses overlap semantics: a shape is picked up as soon as any of
//! it crosses the drag rectangle. Rotated box variants get a proper
//! separating-axis test against their rotated corners, since a naive AABB
//! check false-positives on rotated shapes. Lasso is stricter: every
//! outline sample must fall inside the polygon, and a group is only
//! selected when every descendant is.

use vexel_core::{BBox, Point};

use crate::hit_test::point_in_polygon;
use crate::model::Shape;

/// Whether `shape` overlaps the marquee rectangle.
///
/// Groups intersect when any descendant does; mask groups defer to their
/// clip child, whose geometry is authoritative.
pub fn shape_intersects_rect(shape: &Shape, rect: &BBox) -> bool {
    match shape {
        Shape::Group(g) => {
            if let Some(clip) = g.clip_child() {
                return shape_intersects_rect(clip, rect);
            }
            g.children.iter().any(|c| shape_intersects_rect(c, rect))
        }
        Shape::Rect(s) => convex_intersects_rect(&s.warped_corners(), rect),
        Shape::Frame(s) => convex_intersects_rect(&s.bounds.rotated_corners(), rect),
        Shape::Image(s) => convex_intersects_rect(&s.warped_corners(), rect),
        Shape::Ellipse(s) => convex_intersects_rect(&s.sample_outline(32), rect),
        Shape::Polygon(s) => convex_intersects_rect(&s.vertices(), rect),
        // Stroke shapes intersect when the sampled outline enters the
        // rectangle or crosses one of its edges.
        _ => polyline_intersects_rect(&shape.outline_points(), rect),
    }
}

/// Separating-axis test between a convex polygon and an axis-aligned
/// rectangle: checks the rectangle's two axes plus every polygon edge
/// normal. No separating axis means overlap.
fn convex_intersects_rect(polygon: &[Point], rect: &BBox) -> bool {
    if polygon.is_empty() {
        return false;
    }
    let rect_corners = rect.corners();

    let mut axes: Vec<Point> = vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
    for i in 0..polygon.len() {
        let edge = polygon[(i + 1) % polygon.len()].sub(polygon[i]);
        axes.push(Point::new(-edge.y, edge.x));
    }

    for axis in axes {
        let (min_a, max_a) = project(polygon, axis);
        let (min_b, max_b) = project(&rect_corners, axis);
        if max_a < min_b || max_b < min_a {
            return false;
        }
    }
    true
}

fn project(points: &[Point], axis: Point) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        let d = p.x * axis.x + p.y * axis.y;
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

fn polyline_intersects_rect(samples: &[Point], rect: &BBox) -> bool {
    if samples.iter().any(|p| rect.contains_point(*p)) {
        return true;
    }
    let corners = rect.corners();
    samples.windows(2).any(|w| {
        (0..4).any(|i| segments_intersect(w[0], w[1], corners[i], corners[(i + 1) % 4]))
    })
}

/// Proper segment intersection via orientation signs.
fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let orient = |p: Point, q: Point, r: Point| {
        let v = (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x);
        if v > 0.0 {
            1
        } else if v < 0.0 {
            -1
        } else {
            0
        }
    };
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    o1 != o2 && o3 != o4
}

/// Whether every bit of `shape` lies inside the lasso polygon.
///
/// Full-containment semantics: partial overlap is not enough. Groups
/// require all descendants contained (mask groups defer to their clip
/// child); a partially-contained group is excluded entirely.
pub fn is_shape_in_polygon(shape: &Shape, lasso: &[Point]) -> bool {
    if lasso.len() < 3 {
        return false;
    }
    match shape {
        Shape::Group(g) => {
            if let Some(clip) = g.clip_child() {
                return is_shape_in_polygon(clip, lasso);
            }
            !g.children.is_empty()
                && g.children.iter().all(|c| is_shape_in_polygon(c, lasso))
        }
        _ => {
            let outline = shape.outline_points();
            !outline.is_empty() && outline.iter().all(|p| point_in_polygon(*p, lasso))
        }
    }
}
