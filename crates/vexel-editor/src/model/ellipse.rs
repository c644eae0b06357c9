//! Ellipses inscribed in their bounding box.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::{rotate_point, Point, EPSILON};

use super::rect::KAPPA;
use super::{Anchor, BoxBounds, EditorShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseShape {
    pub id: String,
    #[serde(flatten)]
    pub bounds: BoxBounds,
    pub fill: bool,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl EllipseShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bounds: BoxBounds::new(x, y, width, height),
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

    pub fn radius_x(&self) -> f64 {
        self.bounds.width / 2.0
    }

    pub fn radius_y(&self) -> f64 {
        self.bounds.height / 2.0
    }

    /// Uniformly spaced points around the (rotated) ellipse outline.
    pub fn sample_outline(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(3);
        let c = self.bounds.center();
        let (rx, ry) = (self.radius_x(), self.radius_y());
        (0..steps)
            .map(|i| {
                let t = i as f64 / steps as f64 * std::f64::consts::TAU;
                let p = Point::new(c.x + rx * t.cos(), c.y + ry * t.sin());
                rotate_point(p, c, self.bounds.rotation)
            })
            .collect()
    }

    /// Standard four-anchor bezier approximation of the ellipse, rotated
    /// into place. Handles use the kappa constant for 90 degree arcs.
    pub fn to_anchors(&self) -> Vec<Anchor> {
        let c = self.bounds.center();
        let (rx, ry) = (self.radius_x(), self.radius_y());
        let (kx, ky) = (KAPPA * rx, KAPPA * ry);

        let anchors = vec![
            // Top, right, bottom, left; handles run along the tangent.
            Anchor::new(
                Point::new(c.x, c.y - ry),
                Point::new(c.x - kx, c.y - ry),
                Point::new(c.x + kx, c.y - ry),
            ),
            Anchor::new(
                Point::new(c.x + rx, c.y),
                Point::new(c.x + rx, c.y - ky),
                Point::new(c.x + rx, c.y + ky),
            ),
            Anchor::new(
                Point::new(c.x, c.y + ry),
                Point::new(c.x + kx, c.y + ry),
                Point::new(c.x - kx, c.y + ry),
            ),
            Anchor::new(
                Point::new(c.x - rx, c.y),
                Point::new(c.x - rx, c.y + ky),
                Point::new(c.x - rx, c.y - ky),
            ),
        ];

        if self.bounds.rotation.abs() < EPSILON {
            return anchors;
        }
        anchors
            .iter()
            .map(|a| a.map_points(|p| rotate_point(p, c, self.bounds.rotation)))
            .collect()
    }
}

impl EditorShape for EllipseShape {
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
