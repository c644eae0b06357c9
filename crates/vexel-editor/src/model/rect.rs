//! Rectangles, optionally with rounded corners.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::{rotate_point, Point, EPSILON};

use super::{Anchor, BoxBounds, EditorShape, QuadWarp};

/// Circle-to-bezier approximation constant for 90 degree arcs.
pub(crate) const KAPPA: f64 = 0.552_284_749_830_793_6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub id: String,
    #[serde(flatten)]
    pub bounds: BoxBounds,
    pub corner_radius: f64,
    #[serde(default)]
    pub warp: QuadWarp,
    pub fill: bool,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl RectShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bounds: BoxBounds::new(x, y, width, height),
            corner_radius: 0.0,
            warp: QuadWarp::default(),
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

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// The four corner positions with rotation and warp offsets applied,
    /// in top-left, top-right, bottom-right, bottom-left order.
    pub fn warped_corners(&self) -> [Point; 4] {
        let base = self.bounds.rotated_corners();
        [
            base[0].add(self.warp.top_left),
            base[1].add(self.warp.top_right),
            base[2].add(self.warp.bottom_right),
            base[3].add(self.warp.bottom_left),
        ]
    }

    /// Corner radius clamped so opposing arcs never overlap.
    pub fn effective_corner_radius(&self) -> f64 {
        self.corner_radius
            .min(self.bounds.width / 2.0)
            .min(self.bounds.height / 2.0)
            .max(0.0)
    }

    /// The rectangle outline as a closed anchor loop, used when the shape
    /// has to become a free path (e.g. flipping). Square corners collapse
    /// to corner anchors; rounded corners get two anchors each with
    /// kappa-scaled tangent handles.
    pub fn to_anchors(&self) -> Vec<Anchor> {
        let b = &self.bounds;
        let r = self.effective_corner_radius();
        let anchors = if r < EPSILON {
            b.corners().iter().map(|p| Anchor::corner(*p)).collect()
        } else {
            let k = KAPPA * r;
            let (x0, y0, x1, y1) = (b.x, b.y, b.max_x(), b.max_y());
            vec![
                // Two anchors per corner, entering and leaving the arc.
                Anchor::new(
                    Point::new(x0 + r, y0),
                    Point::new(x0 + r - k, y0),
                    Point::new(x0 + r, y0),
                ),
                Anchor::new(
                    Point::new(x1 - r, y0),
                    Point::new(x1 - r, y0),
                    Point::new(x1 - r + k, y0),
                ),
                Anchor::new(
                    Point::new(x1, y0 + r),
                    Point::new(x1, y0 + r - k),
                    Point::new(x1, y0 + r),
                ),
                Anchor::new(
                    Point::new(x1, y1 - r),
                    Point::new(x1, y1 - r),
                    Point::new(x1, y1 - r + k),
                ),
                Anchor::new(
                    Point::new(x1 - r, y1),
                    Point::new(x1 - r + k, y1),
                    Point::new(x1 - r, y1),
                ),
                Anchor::new(
                    Point::new(x0 + r, y1),
                    Point::new(x0 + r, y1),
                    Point::new(x0 + r - k, y1),
                ),
                Anchor::new(
                    Point::new(x0, y1 - r),
                    Point::new(x0, y1 - r + k),
                    Point::new(x0, y1 - r),
                ),
                Anchor::new(
                    Point::new(x0, y0 + r),
                    Point::new(x0, y0 + r),
                    Point::new(x0, y0 + r - k),
                ),
            ]
        };

        if b.rotation.abs() < EPSILON {
            return anchors;
        }
        let c = b.center();
        anchors
            .iter()
            .map(|a| a.map_points(|p| rotate_point(p, c, b.rotation)))
            .collect()
    }
}

impl EditorShape for RectShape {
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
        // Offsets are relative vectors, so they scale without re-anchoring.
        let scale_offset = |p: Point| Point::new(p.x * sx.abs(), p.y * sy.abs());
        Self {
            bounds: self.bounds.scaled(pivot, sx, sy),
            corner_radius: self.corner_radius * sx.abs().min(sy.abs()),
            warp: QuadWarp {
                top_left: scale_offset(self.warp.top_left),
                top_right: scale_offset(self.warp.top_right),
                bottom_right: scale_offset(self.warp.bottom_right),
                bottom_left: scale_offset(self.warp.bottom_left),
            },
            ..self.clone()
        }
    }
}
