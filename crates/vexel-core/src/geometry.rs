//! Scalar geometry primitives shared by the whole engine.

use serde::{Deserialize, Serialize};

/// Tolerance for floating point comparisons against zero.
///
/// Accumulated rounding error from chained transforms makes exact
/// comparisons flap, so every zero check in the engine goes through this.
pub const EPSILON: f64 = 1e-9;

/// Mirror axis for flip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Mirror x coordinates across a vertical line (horizontal flip).
    X,
    /// Mirror y coordinates across a horizontal line (vertical flip).
    Y,
}

/// A 2D point with X and Y coordinates. Value type, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn add(&self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn scaled(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    /// Squared length of this point treated as a vector from the origin.
    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Mirrors the coordinate on `axis` across the line through `center`
    /// perpendicular to that axis.
    pub fn mirrored(&self, center: Point, axis: Axis) -> Point {
        match axis {
            Axis::X => Point::new(2.0 * center.x - self.x, self.y),
            Axis::Y => Point::new(self.x, 2.0 * center.y - self.y),
        }
    }
}

/// Rotates `p` about `pivot` by `angle` radians. Positive angles rotate
/// counter-clockwise in the shape coordinate convention.
pub fn rotate_point(p: Point, pivot: Point, angle: f64) -> Point {
    if angle.abs() < EPSILON {
        return p;
    }
    let s = angle.sin();
    let c = angle.cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point {
        x: pivot.x + dx * c - dy * s,
        y: pivot.y + dx * s + dy * c,
    }
}

/// Linear interpolation between `a` and `b`. `t` is unconstrained, so
/// callers may extrapolate past either endpoint.
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Euclidean distance between two points.
pub fn dist(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}
