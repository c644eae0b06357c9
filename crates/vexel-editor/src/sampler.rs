//! Curve sampling: cubic beziers, multi-segment anchor paths, splitting,
//! and point-to-segment projection.
//!
//! Everything downstream of the shape model that needs a polyline (bounding
//! boxes, hit testing, lasso containment) goes through these functions, so
//! sample densities stay consistent across the engine.

use tracing::trace;

use vexel_core::{dist, lerp_point, Point, EPSILON};

use crate::model::Anchor;

/// Evaluates the cubic bezier `(p0, p1, p2, p3)` at `steps + 1` uniformly
/// spaced parameters, including both endpoints. `steps` is clamped to 1.
pub fn sample_cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| cubic_bezier_point(p0, p1, p2, p3, i as f64 / steps as f64))
        .collect()
}

/// The standard cubic bezier position formula.
pub fn cubic_bezier_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    Point::new(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

/// First derivative of the cubic bezier at `t`.
pub fn cubic_bezier_tangent(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        3.0 * u * u * (p1.x - p0.x) + 6.0 * u * t * (p2.x - p1.x) + 3.0 * t * t * (p3.x - p2.x),
        3.0 * u * u * (p1.y - p0.y) + 6.0 * u * t * (p2.y - p1.y) + 3.0 * t * t * (p3.y - p2.y),
    )
}

/// Samples a whole anchor path. Each consecutive pair contributes the
/// segment `(a.point, a.handle_out, b.handle_in, b.point)`; the duplicated
/// joint point between segments is dropped. When `is_closed`, a closing
/// segment from the last anchor back to the first is appended. Fewer than
/// two anchors returns the raw anchor points unchanged.
pub fn sample_path(anchors: &[Anchor], steps_per_segment: usize, is_closed: bool) -> Vec<Point> {
    if anchors.len() < 2 {
        return anchors.iter().map(|a| a.point).collect();
    }

    let mut out = Vec::with_capacity(anchors.len() * steps_per_segment.max(1) + 1);
    for pair in anchors.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let segment =
            sample_cubic_bezier(a.point, a.handle_out, b.handle_in, b.point, steps_per_segment);
        let skip = usize::from(!out.is_empty());
        out.extend_from_slice(&segment[skip..]);
    }

    if is_closed {
        let (last, first) = (&anchors[anchors.len() - 1], &anchors[0]);
        let segment = sample_cubic_bezier(
            last.point,
            last.handle_out,
            first.handle_in,
            first.point,
            steps_per_segment,
        );
        out.extend_from_slice(&segment[1..]);
    }

    out
}

/// Result of a de Casteljau subdivision at parameter `t`: the new on-curve
/// point plus the four handle positions that let two sub-curves reproduce
/// the original exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSplit {
    /// The on-curve point at `t`.
    pub point: Point,
    /// Replacement out-handle for the start anchor.
    pub start_handle_out: Point,
    /// In-handle of the new anchor.
    pub handle_in: Point,
    /// Out-handle of the new anchor.
    pub handle_out: Point,
    /// Replacement in-handle for the end anchor.
    pub end_handle_in: Point,
}

/// De Casteljau subdivision of a cubic bezier at `t`.
pub fn split_bezier_curve(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> CurveSplit {
    let p01 = lerp_point(p0, p1, t);
    let p12 = lerp_point(p1, p2, t);
    let p23 = lerp_point(p2, p3, t);
    let p012 = lerp_point(p01, p12, t);
    let p123 = lerp_point(p12, p23, t);
    let p0123 = lerp_point(p012, p123, t);

    CurveSplit {
        point: p0123,
        start_handle_out: p01,
        handle_in: p012,
        handle_out: p123,
        end_handle_in: p23,
    }
}

/// Fraction of the endpoint-to-endpoint distance used for the handles of a
/// freshly inserted anchor.
const INSERT_HANDLE_SCALE: f64 = 0.15;

/// Builds a new anchor on the curve between `start` and `end` at `t`.
///
/// The anchor sits on the curve with symmetric handles along the local
/// tangent, scaled to 15% of the endpoint distance. A zero-length tangent
/// (fully degenerate segment) falls back to a collapsed corner anchor.
pub fn insert_anchor_on_curve(start: &Anchor, end: &Anchor, t: f64) -> Anchor {
    let (p0, p1, p2, p3) = (start.point, start.handle_out, end.handle_in, end.point);
    let point = cubic_bezier_point(p0, p1, p2, p3, t);
    let tangent = cubic_bezier_tangent(p0, p1, p2, p3, t);

    let len = tangent.length_sq().sqrt();
    if len < EPSILON {
        trace!("zero-length tangent at t={}, inserting corner anchor", t);
        return Anchor::corner(point);
    }

    let handle_len = INSERT_HANDLE_SCALE * dist(p0, p3);
    let dir = Point::new(tangent.x / len, tangent.y / len);
    Anchor::new(
        point,
        Point::new(point.x - dir.x * handle_len, point.y - dir.y * handle_len),
        Point::new(point.x + dir.x * handle_len, point.y + dir.y * handle_len),
    )
}

/// Squared distance from `p` to the closest location on segment `[a, b]`,
/// plus the normalized position `t` in `[0, 1]` of that location. A
/// zero-length segment yields the distance to the single point with
/// `t = 0`.
pub fn sq_dist_to_segment(p: Point, a: Point, b: Point) -> (f64, f64) {
    let seg = b.sub(a);
    let len_sq = seg.length_sq();
    if len_sq < EPSILON * EPSILON {
        return (p.sub(a).length_sq(), 0.0);
    }

    let t = ((p.x - a.x) * seg.x + (p.y - a.y) * seg.y) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let closest = lerp_point(a, b, t);
    (p.sub(closest).length_sq(), t)
}

/// Samples the circular arc through three points.
///
/// Uses the circumcircle of `(start, mid, end)` and sweeps from `start` to
/// `end` in whichever direction passes through `mid`. Collinear input
/// degrades to the straight segment `[start, end]`.
pub fn sample_arc(start: Point, mid: Point, end: Point, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    let d = 2.0
        * (start.x * (mid.y - end.y) + mid.x * (end.y - start.y) + end.x * (start.y - mid.y));
    if d.abs() < EPSILON {
        trace!("collinear arc points, degrading to straight segment");
        return vec![start, end];
    }

    let sq = |p: Point| p.x * p.x + p.y * p.y;
    let center = Point::new(
        (sq(start) * (mid.y - end.y) + sq(mid) * (end.y - start.y) + sq(end) * (start.y - mid.y))
            / d,
        (sq(start) * (end.x - mid.x) + sq(mid) * (start.x - end.x) + sq(end) * (mid.x - start.x))
            / d,
    );
    let radius = dist(center, start);

    let a0 = (start.y - center.y).atan2(start.x - center.x);
    let a1 = (mid.y - center.y).atan2(mid.x - center.x);
    let a2 = (end.y - center.y).atan2(end.x - center.x);

    // Counter-clockwise sweep from start to end; if the through-point is
    // not on that sweep, go the other way around.
    let ccw = |from: f64, to: f64| {
        let mut s = to - from;
        while s < 0.0 {
            s += std::f64::consts::TAU;
        }
        s
    };
    let sweep_ccw = ccw(a0, a2);
    let sweep = if ccw(a0, a1) <= sweep_ccw {
        sweep_ccw
    } else {
        sweep_ccw - std::f64::consts::TAU
    };

    (0..=steps)
        .map(|i| {
            let angle = a0 + sweep * i as f64 / steps as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
