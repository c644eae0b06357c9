//! Frames: plain box containers used to delimit canvas regions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::Point;

use super::{BoxBounds, EditorShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameShape {
    pub id: String,
    #[serde(flatten)]
    pub bounds: BoxBounds,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl FrameShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bounds: BoxBounds::new(x, y, width, height),
            stroke_width: 1.0,
            locked: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl EditorShape for FrameShape {
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
