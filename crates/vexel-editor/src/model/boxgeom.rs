//! Shared geometry for box-based variants.
//!
//! Rectangle, ellipse, polygon, image and frame all describe themselves as
//! an axis-aligned box plus a rotation, so the box/rotation bookkeeping
//! lives here once. Width and height never go negative: a scale that would
//! produce a negative extent re-anchors `x`/`y` and records the mirror in
//! the `scale_x`/`scale_y` signs instead.

use serde::{Deserialize, Serialize};

use vexel_core::{rotate_point, Point, EPSILON};

/// Box extents plus rotation and mirror/skew bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in radians about the box center.
    pub rotation: f64,
    /// Mirror sign on the x axis, `-1.0` when the shape has been flipped.
    pub scale_x: f64,
    /// Mirror sign on the y axis.
    pub scale_y: f64,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl BoxBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        // Normalize negative extents up-front so producers can hand in raw
        // drag rectangles.
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Corners of the unrotated box in top-left, top-right, bottom-right,
    /// bottom-left order.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.max_x(), self.y),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.x, self.max_y()),
        ]
    }

    /// Corners after applying the box rotation about its center.
    pub fn rotated_corners(&self) -> [Point; 4] {
        let c = self.center();
        let corners = self.corners();
        if self.rotation.abs() < EPSILON {
            return corners;
        }
        corners.map(|p| rotate_point(p, c, self.rotation))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Rotates the box about an external pivot: the center orbits the
    /// pivot and the rotation accumulates, preserving the box-with-angle
    /// representation rather than rotating individual corners.
    pub fn rotated(&self, pivot: Point, angle: f64) -> Self {
        let new_center = rotate_point(self.center(), pivot, angle);
        Self {
            x: new_center.x - self.width / 2.0,
            y: new_center.y - self.height / 2.0,
            rotation: self.rotation + angle,
            ..*self
        }
    }

    /// Scales the box about a pivot. Negative factors mirror: the extent
    /// stays non-negative, `x`/`y` re-anchor, and the sign lands in
    /// `scale_x`/`scale_y`.
    pub fn scaled(&self, pivot: Point, sx: f64, sy: f64) -> Self {
        let mut x = pivot.x + (self.x - pivot.x) * sx;
        let mut y = pivot.y + (self.y - pivot.y) * sy;
        let mut width = self.width * sx;
        let mut height = self.height * sy;
        let mut scale_x = self.scale_x;
        let mut scale_y = self.scale_y;

        if width < 0.0 {
            x += width;
            width = -width;
            scale_x = -scale_x;
        }
        if height < 0.0 {
            y += height;
            height = -height;
            scale_y = -scale_y;
        }

        Self {
            x,
            y,
            width,
            height,
            scale_x,
            scale_y,
            ..*self
        }
    }

    /// Mirrors the box across the line through `center` perpendicular to
    /// the x axis, flipping the mirror sign and negating the rotation.
    pub fn mirrored_x(&self, center: Point) -> Self {
        let new_x = 2.0 * center.x - self.x - self.width;
        Self {
            x: new_x,
            rotation: -self.rotation,
            scale_x: -self.scale_x,
            ..*self
        }
    }

    /// Vertical counterpart of [`mirrored_x`](Self::mirrored_x).
    pub fn mirrored_y(&self, center: Point) -> Self {
        let new_y = 2.0 * center.y - self.y - self.height;
        Self {
            y: new_y,
            rotation: -self.rotation,
            scale_y: -self.scale_y,
            ..*self
        }
    }
}
