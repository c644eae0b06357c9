//! Handle-based resizing.
//!
//! The algorithm works in the shape's local (un-rotated) frame:
//!
//! 1. un-rotate the pointer positions about the rotation pivot,
//! 2. pick the anchor point opposite the dragged handle,
//! 3. turn pointer deltas into new extents (degenerate axes set their
//!    extent directly instead of dividing by zero),
//! 4. derive the locked axis from the dominant one when aspect is kept,
//! 5. scale about the anchor, which mirrors naturally when the pointer is
//!    dragged through the opposite edge,
//! 6. re-rotate and cancel any drift so the anchor's world position is
//!    unchanged. Anchor invariance is the correctness contract here.

use tracing::debug;

use vexel_core::{rotate_point, BBox, Point, TransformError, EPSILON};

use crate::bbox::shape_bounding_box;
use crate::model::{EditorShape, Handle, ResizeHandle, Shape};

/// Resizes `shape` by dragging `handle` from `init` to `cur`.
///
/// `rotation_pivot` overrides the point the pointer positions are
/// un-rotated about (defaults to the shape's center; multi-shape resizes
/// pass the shared selection center). Handles other than the eight compass
/// positions are invalid here.
pub fn resize_shape(
    shape: &Shape,
    handle: Handle,
    cur: Point,
    init: Point,
    keep_aspect: bool,
    rotation_pivot: Option<Point>,
) -> Result<Shape, TransformError> {
    let Handle::Resize(h) = handle else {
        return Err(TransformError::InvalidHandle {
            handle: handle.to_string(),
            tool: shape.tool().to_string(),
        });
    };

    let local_box = local_bounding_box(shape);
    let center = local_box.center();
    let rotation = shape.rotation();
    let pivot = rotation_pivot.unwrap_or(center);

    // Work axis-aligned: bring the pointer into the shape's local frame.
    let (cur, init) = if rotation.abs() < EPSILON {
        (cur, init)
    } else {
        (
            rotate_point(cur, pivot, -rotation),
            rotate_point(init, pivot, -rotation),
        )
    };

    let anchor = anchor_for_handle(h, &local_box, init);

    let w = local_box.width;
    let hgt = local_box.height;
    let degenerate_x = h.affects_x() && w < EPSILON;
    let degenerate_y = h.affects_y() && hgt < EPSILON;

    let mut new_w = if h.affects_x() && !degenerate_x {
        scaled_extent(w, anchor.x, init.x, cur.x)
    } else {
        w
    };
    let mut new_h = if h.affects_y() && !degenerate_y {
        scaled_extent(hgt, anchor.y, init.y, cur.y)
    } else {
        hgt
    };

    if keep_aspect {
        apply_aspect_lock(h, w, hgt, &mut new_w, &mut new_h);
    }

    let sx = if w > EPSILON { new_w / w } else { 1.0 };
    let sy = if hgt > EPSILON { new_h / hgt } else { 1.0 };

    // Scaling about the anchor keeps it fixed and produces a mirror
    // (negative factor) when the pointer crosses it.
    let mut result = shape.scaled(anchor, sx, sy);

    if degenerate_x || degenerate_y {
        debug!(
            id = shape.id(),
            degenerate_x, degenerate_y, "resizing degenerate axis directly"
        );
        result = set_degenerate_extents(result, anchor, cur, degenerate_x, degenerate_y);
    }

    if rotation.abs() >= EPSILON {
        // The shape rotates about its own (possibly shifted) center, so
        // compare the anchor's world position before and after and cancel
        // the drift.
        let new_center = local_bounding_box(&result).center();
        let before = rotate_point(anchor, center, rotation);
        let after = rotate_point(anchor, new_center, rotation);
        result = result.translated(before.x - after.x, before.y - after.y);
    }

    Ok(result)
}

/// The shape's extents in its own un-rotated frame. Box variants read
/// their fields directly; point-based variants (rotation always baked)
/// take their world box.
fn local_bounding_box(shape: &Shape) -> BBox {
    match shape {
        Shape::Rect(s) => box_of(&s.bounds),
        Shape::Ellipse(s) => box_of(&s.bounds),
        Shape::Polygon(s) => box_of(&s.bounds),
        Shape::Image(s) => box_of(&s.bounds),
        Shape::Frame(s) => box_of(&s.bounds),
        _ => shape_bounding_box(shape, false),
    }
}

fn box_of(b: &crate::model::BoxBounds) -> BBox {
    BBox::new(b.x, b.y, b.width, b.height)
}

/// Picks the fixed point opposite the dragged handle.
///
/// Corner handles anchor at the diagonally opposite corner. Edge handles
/// anchor at the midpoint of the opposite edge, chosen on whichever side
/// of center the initial pointer was, which is what lets a drag pass
/// "through" the shape and mirror it.
fn anchor_for_handle(h: ResizeHandle, local_box: &BBox, init: Point) -> Point {
    let center = local_box.center();
    let far_x = if init.x <= center.x {
        local_box.max_x()
    } else {
        local_box.min_x()
    };
    let far_y = if init.y <= center.y {
        local_box.max_y()
    } else {
        local_box.min_y()
    };

    let x = match h {
        ResizeHandle::TopLeft | ResizeHandle::Left | ResizeHandle::BottomLeft => local_box.max_x(),
        ResizeHandle::TopRight | ResizeHandle::Right | ResizeHandle::BottomRight => {
            local_box.min_x()
        }
        ResizeHandle::Top | ResizeHandle::Bottom => center.x,
    };
    let y = match h {
        ResizeHandle::TopLeft | ResizeHandle::Top | ResizeHandle::TopRight => local_box.max_y(),
        ResizeHandle::BottomLeft | ResizeHandle::Bottom | ResizeHandle::BottomRight => {
            local_box.min_y()
        }
        ResizeHandle::Left | ResizeHandle::Right => center.y,
    };

    // Edge handles defer to the side-of-center rule on their drag axis.
    match h {
        ResizeHandle::Left | ResizeHandle::Right => Point::new(far_x, y),
        ResizeHandle::Top | ResizeHandle::Bottom => Point::new(x, far_y),
        _ => Point::new(x, y),
    }
}

/// New extent from pointer deltas measured against the anchor. A signed
/// result past the anchor encodes a mirror.
fn scaled_extent(extent: f64, anchor: f64, init: f64, cur: f64) -> f64 {
    let denom = init - anchor;
    if denom.abs() < EPSILON {
        // Pointer grabbed exactly on the anchor; a ratio is meaningless.
        extent
    } else {
        extent * (cur - anchor) / denom
    }
}

/// Locks the minor axis to the dominant one, preserving each axis's own
/// mirror sign.
fn apply_aspect_lock(h: ResizeHandle, w: f64, hgt: f64, new_w: &mut f64, new_h: &mut f64) {
    if w < EPSILON || hgt < EPSILON {
        return;
    }
    let sx = *new_w / w;
    let sy = *new_h / hgt;
    if h.affects_x() && h.affects_y() {
        if sx.abs() >= sy.abs() {
            *new_h = hgt * sx.abs() * if sy < 0.0 { -1.0 } else { 1.0 };
        } else {
            *new_w = w * sy.abs() * if sx < 0.0 { -1.0 } else { 1.0 };
        }
    } else if h.affects_x() {
        *new_h = hgt * sx.abs();
    } else {
        *new_w = w * sy.abs();
    }
}

/// Sets zero-extent axes directly from the pointer position. Only box
/// variants can gain extent this way; point-based shapes keep the axis.
fn set_degenerate_extents(
    shape: Shape,
    anchor: Point,
    cur: Point,
    degenerate_x: bool,
    degenerate_y: bool,
) -> Shape {
    let fix = |b: &mut crate::model::BoxBounds| {
        if degenerate_x {
            let span = cur.x - anchor.x;
            b.x = anchor.x.min(cur.x);
            b.width = span.abs();
            if span < 0.0 {
                b.scale_x = -b.scale_x;
            }
        }
        if degenerate_y {
            let span = cur.y - anchor.y;
            b.y = anchor.y.min(cur.y);
            b.height = span.abs();
            if span < 0.0 {
                b.scale_y = -b.scale_y;
            }
        }
    };

    match shape {
        Shape::Rect(mut s) => {
            fix(&mut s.bounds);
            Shape::Rect(s)
        }
        Shape::Ellipse(mut s) => {
            fix(&mut s.bounds);
            Shape::Ellipse(s)
        }
        Shape::Polygon(mut s) => {
            fix(&mut s.bounds);
            Shape::Polygon(s)
        }
        Shape::Image(mut s) => {
            fix(&mut s.bounds);
            Shape::Image(s)
        }
        Shape::Frame(mut s) => {
            fix(&mut s.bounds);
            Shape::Frame(s)
        }
        other => other,
    }
}
