//! Image-backed shapes with optional quad-corner warp.
//!
//! The warp is stored as four per-corner *offset* vectors relative to each
//! corner's un-warped, post-rotation position. Offsets compose cleanly
//! with move/rotate/scale: the box transforms as usual and the offsets
//! ride along. The engine only computes geometry; re-encoding the backing
//! raster after a flip or warp is the caller's job, keyed by `asset_id`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::{Point, EPSILON};

use super::{BoxBounds, EditorShape, QuadCorner};

/// Per-corner warp offsets. All zero means the shape is unwarped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuadWarp {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl QuadWarp {
    pub fn is_identity(&self) -> bool {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .iter()
        .all(|p| p.length_sq() < EPSILON * EPSILON)
    }

    pub fn offset(&self, corner: QuadCorner) -> Point {
        match corner {
            QuadCorner::TopLeft => self.top_left,
            QuadCorner::TopRight => self.top_right,
            QuadCorner::BottomRight => self.bottom_right,
            QuadCorner::BottomLeft => self.bottom_left,
        }
    }

    pub fn with_offset(mut self, corner: QuadCorner, offset: Point) -> Self {
        match corner {
            QuadCorner::TopLeft => self.top_left = offset,
            QuadCorner::TopRight => self.top_right = offset,
            QuadCorner::BottomRight => self.bottom_right = offset,
            QuadCorner::BottomLeft => self.bottom_left = offset,
        }
        self
    }

    /// Mirrors the offsets for a horizontal flip: left/right corners swap
    /// and the x components negate.
    pub fn mirrored_x(&self) -> Self {
        let flip = |p: Point| Point::new(-p.x, p.y);
        Self {
            top_left: flip(self.top_right),
            top_right: flip(self.top_left),
            bottom_right: flip(self.bottom_left),
            bottom_left: flip(self.bottom_right),
        }
    }

    /// Vertical counterpart of [`mirrored_x`](Self::mirrored_x).
    pub fn mirrored_y(&self) -> Self {
        let flip = |p: Point| Point::new(p.x, -p.y);
        Self {
            top_left: flip(self.bottom_left),
            top_right: flip(self.bottom_right),
            bottom_right: flip(self.top_right),
            bottom_left: flip(self.top_left),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageShape {
    pub id: String,
    #[serde(flatten)]
    pub bounds: BoxBounds,
    pub corner_radius: f64,
    /// Reference key the external raster store resolves to pixel data.
    pub asset_id: String,
    #[serde(default)]
    pub warp: QuadWarp,
    pub stroke_width: f64,
    #[serde(default)]
    pub locked: bool,
}

impl ImageShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64, asset_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bounds: BoxBounds::new(x, y, width, height),
            corner_radius: 0.0,
            asset_id: asset_id.into(),
            warp: QuadWarp::default(),
            stroke_width: 0.0,
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
}

impl EditorShape for ImageShape {
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
        let scale_offset =
            |p: Point| Point::new(p.x * sx.abs(), p.y * sy.abs());
        Self {
            bounds: self.bounds.scaled(pivot, sx, sy),
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
