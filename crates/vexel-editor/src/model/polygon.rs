//! Regular polygons inscribed in their bounding box.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use vexel_core::{rotate_point, Point, EPSILON};

use super::{Anchor, BoxBounds, EditorShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub id: String,
    #[serde(flatten)]
    pub bounds: BoxBounds,
    /// Number of sides, clamped to at least 3.
    pub sides: u32,
    pub fill: bool,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl PolygonShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64, sides: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bounds: BoxBounds::new(x, y, width, height),
            sides: sides.max(3),
            fill: true,
            stroke_width: 1.0,
            locked: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.bounds.rotation = rotation;
        self
    }

    /// Vertices of the regular polygon inscribed in the box, first vertex
    /// at twelve o'clock, rotated with the shape. Stays on the stack for
    /// the common side counts.
    pub fn vertices(&self) -> SmallVec<[Point; 8]> {
        let n = self.sides.max(3) as usize;
        let c = self.bounds.center();
        let (rx, ry) = (self.bounds.width / 2.0, self.bounds.height / 2.0);
        (0..n)
            .map(|i| {
                let t = -std::f64::consts::FRAC_PI_2 + i as f64 / n as f64 * std::f64::consts::TAU;
                let p = Point::new(c.x + rx * t.cos(), c.y + ry * t.sin());
                if self.bounds.rotation.abs() < EPSILON {
                    p
                } else {
                    rotate_point(p, c, self.bounds.rotation)
                }
            })
            .collect()
    }

    /// The polygon outline as a closed corner-anchor loop.
    pub fn to_anchors(&self) -> Vec<Anchor> {
        self.vertices().iter().map(|p| Anchor::corner(*p)).collect()
    }
}

impl EditorShape for PolygonShape {
    fn center(&self) -> Point {
        self.bounds.center()
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            bounds: self.bounds.translated(dx, dy),
            ..self.clone()
        }
    }

    fn rotated(&self, pivot: Point, angle: f64) -> Self {
        Self {
            bounds: self.bounds.rotated(pivot, angle),
            ..self.clone()
        }
    }

    fn scaled(&self, pivot: Point, sx: f64, sy: f64) -> Self {
        Self {
            bounds: self.bounds.scaled(pivot, sx, sy),
            ..self.clone()
        }
    }
}
