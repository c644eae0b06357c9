//! Circular arcs defined by exactly three points: start, through, end.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::{rotate_point, BBox, Point};

use super::{scale_about, EditorShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub id: String,
    pub start: Point,
    /// The through-point the arc must pass through.
    pub mid: Point,
    pub end: Point,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl ArcShape {
    pub fn new(start: Point, mid: Point, end: Point, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start,
            mid,
            end,
            stroke_width,
            locked: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn points(&self) -> [Point; 3] {
        [self.start, self.mid, self.end]
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            start: f(self.start),
            mid: f(self.mid),
            end: f(self.end),
            ..self.clone()
        }
    }
}

impl EditorShape for ArcShape {
    fn center(&self) -> Point {
        BBox::from_points(&self.points())
            .map(|b| b.center())
            .unwrap_or(Point::ZERO)
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|p| Point::new(p.x + dx, p.y + dy))
    }

    fn rotated(&self, pivot: Point, angle: f64) -> Self {
        self.map_points(|p| rotate_point(p, pivot, angle))
    }

    fn scaled(&self, pivot: Point, sx: f64, sy: f64) -> Self {
        self.map_points(|p| scale_about(p, pivot, sx, sy))
    }
}
