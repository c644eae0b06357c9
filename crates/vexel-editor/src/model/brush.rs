//! Free-form brush strokes: an ordered point sequence with no handles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::{rotate_point, BBox, Point};

use super::{scale_about, EditorShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushShape {
    pub id: String,
    pub points: Vec<Point>,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl BrushShape {
    pub fn new(points: Vec<Point>, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            points,
            stroke_width,
            locked: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            points: self.points.iter().map(|p| f(*p)).collect(),
            ..self.clone()
        }
    }
}

impl EditorShape for BrushShape {
    fn center(&self) -> Point {
        BBox::from_points(&self.points)
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
