//! Anchored bezier paths: the pen and line tools' representation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::{rotate_point, BBox, Point};

use super::{scale_about, Anchor, EditorShape, PATH_SAMPLE_STEPS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub id: String,
    pub anchors: Vec<Anchor>,
    pub is_closed: bool,
    pub fill: bool,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl PathShape {
    pub fn new(anchors: Vec<Anchor>, is_closed: bool, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            anchors,
            is_closed,
            fill: false,
            stroke_width,
            locked: false,
        }
    }

    /// A straight polyline through the given points (all corner anchors).
    pub fn polyline(points: &[Point], stroke_width: f64) -> Self {
        Self::new(points.iter().map(|p| Anchor::corner(*p)).collect(), false, stroke_width)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Sampled outline at the engine's standard density.
    pub fn sampled(&self) -> Vec<Point> {
        crate::sampler::sample_path(&self.anchors, PATH_SAMPLE_STEPS, self.is_closed)
    }

    fn map_anchors(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            anchors: self.anchors.iter().map(|a| a.map_points(&f)).collect(),
            ..self.clone()
        }
    }
}

impl EditorShape for PathShape {
    fn center(&self) -> Point {
        let points: Vec<Point> = self.anchors.iter().map(|a| a.point).collect();
        BBox::from_points(&points)
            .map(|b| b.center())
            .unwrap_or(Point::ZERO)
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        self.map_anchors(|p| Point::new(p.x + dx, p.y + dy))
    }

    fn rotated(&self, pivot: Point, angle: f64) -> Self {
        self.map_anchors(|p| rotate_point(p, pivot, angle))
    }

    fn scaled(&self, pivot: Point, sx: f64, sy: f64) -> Self {
        self.map_anchors(|p| scale_about(p, pivot, sx, sy))
    }
}
