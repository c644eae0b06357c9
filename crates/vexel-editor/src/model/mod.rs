//! The shape model: a tagged union over every drawable variant.
//!
//! Each variant is its own struct in its own module, mirroring how the
//! variants differ in geometry: point lists (brush), anchored bezier paths
//! (pen/line), box-based shapes (rectangle, ellipse, polygon, image,
//! frame), three-point arcs, and owning groups. `Shape` wraps them all and
//! dispatches the shared accessors with exhaustive matches, so adding a
//! variant breaks every site that needs updating.
//!
//! All transform methods are pure: they take `&self` and return a new
//! value. The owning document replaces its old shape with the result.

use serde::{Deserialize, Serialize};

use vexel_core::{GeometryError, Point};

mod arc;
mod boxgeom;
mod brush;
mod ellipse;
mod frame;
mod group;
mod handle;
mod image;
mod path;
mod polygon;
mod rect;

pub use arc::ArcShape;
pub use boxgeom::BoxBounds;
pub use brush::BrushShape;
pub use ellipse::EllipseShape;
pub use frame::FrameShape;
pub use group::GroupShape;
pub use handle::{ArcPoint, Handle, QuadCorner, ResizeHandle};
pub use image::{ImageShape, QuadWarp};
pub use path::PathShape;
pub use polygon::PolygonShape;
pub use rect::RectShape;

/// Sample density used when a curved outline has to be approximated by a
/// polyline (bounding boxes, hit testing, lasso containment).
pub const PATH_SAMPLE_STEPS: usize = 20;

/// A bezier control point with independent in/out tangent handles.
///
/// Handles equal to `point` denote a collapsed (corner) anchor, which
/// behaves as a straight-line joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub point: Point,
    pub handle_in: Point,
    pub handle_out: Point,
}

impl Anchor {
    pub fn new(point: Point, handle_in: Point, handle_out: Point) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }

    /// A corner anchor with both handles collapsed onto the point.
    pub fn corner(point: Point) -> Self {
        Self {
            point,
            handle_in: point,
            handle_out: point,
        }
    }

    pub fn is_corner(&self) -> bool {
        self.handle_in == self.point && self.handle_out == self.point
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let d = Point::new(dx, dy);
        Self {
            point: self.point.add(d),
            handle_in: self.handle_in.add(d),
            handle_out: self.handle_out.add(d),
        }
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            point: f(self.point),
            handle_in: f(self.handle_in),
            handle_out: f(self.handle_out),
        }
    }

    /// Swaps the in/out handles, reversing the anchor's sidedness.
    pub fn reversed(&self) -> Self {
        Self {
            point: self.point,
            handle_in: self.handle_out,
            handle_out: self.handle_in,
        }
    }
}

/// Scales a point away from `pivot` by independent axis factors.
pub(crate) fn scale_about(p: Point, pivot: Point, sx: f64, sy: f64) -> Point {
    Point::new(
        pivot.x + (p.x - pivot.x) * sx,
        pivot.y + (p.y - pivot.y) * sy,
    )
}

/// The tool tag discriminating shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Brush,
    Path,
    Rect,
    Ellipse,
    Polygon,
    Image,
    Frame,
    Arc,
    Group,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tool::Brush => "brush",
            Tool::Path => "path",
            Tool::Rect => "rect",
            Tool::Ellipse => "ellipse",
            Tool::Polygon => "polygon",
            Tool::Image => "image",
            Tool::Frame => "frame",
            Tool::Arc => "arc",
            Tool::Group => "group",
        };
        write!(f, "{}", name)
    }
}

/// Common behavior every variant implements with value semantics.
pub trait EditorShape {
    /// Geometric center of the shape's unrotated extents.
    fn center(&self) -> Point;
    fn translated(&self, dx: f64, dy: f64) -> Self
    where
        Self: Sized;
    fn rotated(&self, pivot: Point, angle: f64) -> Self
    where
        Self: Sized;
    fn scaled(&self, pivot: Point, sx: f64, sy: f64) -> Self
    where
        Self: Sized;
}

/// A drawable shape: the engine's central tagged union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum Shape {
    Brush(BrushShape),
    Path(PathShape),
    Rect(RectShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
    Image(ImageShape),
    Frame(FrameShape),
    Arc(ArcShape),
    Group(GroupShape),
}

impl Shape {
    pub fn tool(&self) -> Tool {
        match self {
            Shape::Brush(_) => Tool::Brush,
            Shape::Path(_) => Tool::Path,
            Shape::Rect(_) => Tool::Rect,
            Shape::Ellipse(_) => Tool::Ellipse,
            Shape::Polygon(_) => Tool::Polygon,
            Shape::Image(_) => Tool::Image,
            Shape::Frame(_) => Tool::Frame,
            Shape::Arc(_) => Tool::Arc,
            Shape::Group(_) => Tool::Group,
        }
    }

    /// The caller-supplied document id. Opaque to the engine and preserved
    /// by every transform.
    pub fn id(&self) -> &str {
        match self {
            Shape::Brush(s) => &s.id,
            Shape::Path(s) => &s.id,
            Shape::Rect(s) => &s.id,
            Shape::Ellipse(s) => &s.id,
            Shape::Polygon(s) => &s.id,
            Shape::Image(s) => &s.id,
            Shape::Frame(s) => &s.id,
            Shape::Arc(s) => &s.id,
            Shape::Group(s) => &s.id,
        }
    }

    pub fn stroke_width(&self) -> f64 {
        match self {
            Shape::Brush(s) => s.stroke_width,
            Shape::Path(s) => s.stroke_width,
            Shape::Rect(s) => s.stroke_width,
            Shape::Ellipse(s) => s.stroke_width,
            Shape::Polygon(s) => s.stroke_width,
            Shape::Image(s) => s.stroke_width,
            Shape::Frame(s) => s.stroke_width,
            Shape::Arc(s) => s.stroke_width,
            Shape::Group(_) => 0.0,
        }
    }

    pub fn locked(&self) -> bool {
        match self {
            Shape::Brush(s) => s.locked,
            Shape::Path(s) => s.locked,
            Shape::Rect(s) => s.locked,
            Shape::Ellipse(s) => s.locked,
            Shape::Polygon(s) => s.locked,
            Shape::Image(s) => s.locked,
            Shape::Frame(s) => s.locked,
            Shape::Arc(s) => s.locked,
            Shape::Group(s) => s.locked,
        }
    }

    /// Rotation angle in radians. Point-based variants bake rotation into
    /// their coordinates and always report zero.
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Brush(_) | Shape::Path(_) | Shape::Arc(_) | Shape::Group(_) => 0.0,
            Shape::Rect(s) => s.bounds.rotation,
            Shape::Ellipse(s) => s.bounds.rotation,
            Shape::Polygon(s) => s.bounds.rotation,
            Shape::Image(s) => s.bounds.rotation,
            Shape::Frame(s) => s.bounds.rotation,
        }
    }

    /// Whether hit testing should treat the interior as solid.
    pub fn is_filled(&self) -> bool {
        match self {
            Shape::Brush(_) => false,
            Shape::Path(s) => s.fill && s.is_closed,
            Shape::Rect(s) => s.fill,
            Shape::Ellipse(s) => s.fill,
            Shape::Polygon(s) => s.fill,
            Shape::Image(_) | Shape::Frame(_) => true,
            Shape::Arc(_) => false,
            Shape::Group(_) => false,
        }
    }

    /// Checks minimum point counts and coordinate finiteness before the
    /// shape enters a document. The engine itself degrades gracefully on
    /// degenerate geometry; this is the ingest-time guard that keeps NaN
    /// from spreading through transforms.
    pub fn validate(&self) -> Result<(), GeometryError> {
        fn finite(points: &[Point], context: &'static str) -> Result<(), GeometryError> {
            if points.iter().all(Point::is_finite) {
                Ok(())
            } else {
                Err(GeometryError::NonFiniteGeometry { context })
            }
        }
        fn finite_box(b: &BoxBounds, context: &'static str) -> Result<(), GeometryError> {
            let fields = [b.x, b.y, b.width, b.height, b.rotation];
            if fields.iter().all(|v| v.is_finite()) {
                Ok(())
            } else {
                Err(GeometryError::NonFiniteGeometry { context })
            }
        }

        match self {
            Shape::Brush(s) => {
                if s.points.is_empty() {
                    return Err(GeometryError::NotEnoughPoints { needed: 1, got: 0 });
                }
                finite(&s.points, "brush")
            }
            Shape::Path(s) => {
                if s.anchors.is_empty() {
                    return Err(GeometryError::NotEnoughPoints { needed: 1, got: 0 });
                }
                for a in &s.anchors {
                    finite(&[a.point, a.handle_in, a.handle_out], "path")?;
                }
                Ok(())
            }
            Shape::Rect(s) => finite_box(&s.bounds, "rect"),
            Shape::Ellipse(s) => finite_box(&s.bounds, "ellipse"),
            Shape::Polygon(s) => finite_box(&s.bounds, "polygon"),
            Shape::Image(s) => finite_box(&s.bounds, "image"),
            Shape::Frame(s) => finite_box(&s.bounds, "frame"),
            Shape::Arc(s) => finite(&[s.start, s.mid, s.end], "arc"),
            Shape::Group(g) => g.children.iter().try_for_each(Shape::validate),
        }
    }

    /// A polyline approximation of the shape's outline, used by marquee
    /// and lasso tests. Group outlines concatenate their children; a mask
    /// group reports only its clip child, whose geometry is authoritative.
    pub fn outline_points(&self) -> Vec<Point> {
        match self {
            Shape::Brush(s) => s.points.clone(),
            Shape::Path(s) => {
                crate::sampler::sample_path(&s.anchors, PATH_SAMPLE_STEPS, s.is_closed)
            }
            Shape::Rect(s) => s.warped_corners().to_vec(),
            Shape::Ellipse(s) => s.sample_outline(32),
            Shape::Polygon(s) => s.vertices().into_vec(),
            Shape::Image(s) => s.warped_corners().to_vec(),
            Shape::Frame(s) => s.bounds.rotated_corners().to_vec(),
            Shape::Arc(s) => crate::sampler::sample_arc(s.start, s.mid, s.end, PATH_SAMPLE_STEPS),
            Shape::Group(g) => {
                if g.is_mask {
                    g.clip_child().map(Shape::outline_points).unwrap_or_default()
                } else {
                    g.children.iter().flat_map(Shape::outline_points).collect()
                }
            }
        }
    }
}

impl EditorShape for Shape {
    fn center(&self) -> Point {
        match self {
            Shape::Brush(s) => s.center(),
            Shape::Path(s) => s.center(),
            Shape::Rect(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
            Shape::Polygon(s) => s.center(),
            Shape::Image(s) => s.center(),
            Shape::Frame(s) => s.center(),
            Shape::Arc(s) => s.center(),
            Shape::Group(s) => s.center(),
        }
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        match self {
            Shape::Brush(s) => Shape::Brush(s.translated(dx, dy)),
            Shape::Path(s) => Shape::Path(s.translated(dx, dy)),
            Shape::Rect(s) => Shape::Rect(s.translated(dx, dy)),
            Shape::Ellipse(s) => Shape::Ellipse(s.translated(dx, dy)),
            Shape::Polygon(s) => Shape::Polygon(s.translated(dx, dy)),
            Shape::Image(s) => Shape::Image(s.translated(dx, dy)),
            Shape::Frame(s) => Shape::Frame(s.translated(dx, dy)),
            Shape::Arc(s) => Shape::Arc(s.translated(dx, dy)),
            Shape::Group(s) => Shape::Group(s.translated(dx, dy)),
        }
    }

    fn rotated(&self, pivot: Point, angle: f64) -> Self {
        match self {
            Shape::Brush(s) => Shape::Brush(s.rotated(pivot, angle)),
            Shape::Path(s) => Shape::Path(s.rotated(pivot, angle)),
            Shape::Rect(s) => Shape::Rect(s.rotated(pivot, angle)),
            Shape::Ellipse(s) => Shape::Ellipse(s.rotated(pivot, angle)),
            Shape::Polygon(s) => Shape::Polygon(s.rotated(pivot, angle)),
            Shape::Image(s) => Shape::Image(s.rotated(pivot, angle)),
            Shape::Frame(s) => Shape::Frame(s.rotated(pivot, angle)),
            Shape::Arc(s) => Shape::Arc(s.rotated(pivot, angle)),
            Shape::Group(s) => Shape::Group(s.rotated(pivot, angle)),
        }
    }

    fn scaled(&self, pivot: Point, sx: f64, sy: f64) -> Self {
        match self {
            Shape::Brush(s) => Shape::Brush(s.scaled(pivot, sx, sy)),
            Shape::Path(s) => Shape::Path(s.scaled(pivot, sx, sy)),
            Shape::Rect(s) => Shape::Rect(s.scaled(pivot, sx, sy)),
            Shape::Ellipse(s) => Shape::Ellipse(s.scaled(pivot, sx, sy)),
            Shape::Polygon(s) => Shape::Polygon(s.scaled(pivot, sx, sy)),
            Shape::Image(s) => Shape::Image(s.scaled(pivot, sx, sy)),
            Shape::Frame(s) => Shape::Frame(s.scaled(pivot, sx, sy)),
            Shape::Arc(s) => Shape::Arc(s.scaled(pivot, sx, sy)),
            Shape::Group(s) => Shape::Group(s.scaled(pivot, sx, sy)),
        }
    }
}
