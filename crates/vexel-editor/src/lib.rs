//! # Vexel Editor Engine
//!
//! The geometric transform and hit-testing engine behind the Vexel editor.
//! Everything here is pure math over immutable shape values: a shape (or
//! shape tree) plus a geometric operation goes in, a new independent shape
//! value (or a boolean) comes out. No component keeps state between calls,
//! so callers on any thread may use the engine without locks.
//!
//! ## Core Components
//!
//! - **Shape model**: a tagged union over brush strokes, bezier paths,
//!   boxes (rectangle, ellipse, polygon, image, frame), three-point arcs,
//!   and recursively owned groups.
//! - **Curve sampler**: cubic bezier evaluation, multi-segment path
//!   sampling, de Casteljau splitting, point-to-segment projection.
//! - **Bounding boxes**: per-variant axis-aligned extents with optional
//!   stroke inclusion, rotated-box and rotated-ellipse closed forms, and
//!   recursive union over groups.
//! - **Transform engine**: move, rotate, scale, handle-based resize (with
//!   anchor invariance and mirror tracking), axis flip, and projective
//!   quad-corner warp.
//! - **Hit testing & selection**: per-variant point tests, deepest-hit
//!   tree search, marquee overlap, and lasso full containment.
//!
//! Rendering, persistence, undo history and event wiring live outside this
//! crate; the engine only hands back new values for the document store to
//! adopt.

pub mod bbox;
pub mod model;
pub mod sampler;
pub mod selection;
pub mod transform;

pub use model::{
    Anchor, ArcShape, BrushShape, EditorShape, EllipseShape, FrameShape, GroupShape, Handle,
    ImageShape, PathShape, PolygonShape, QuadCorner, QuadWarp, RectShape, ResizeHandle, Shape,
    Tool,
};

pub use bbox::{shape_bounding_box, shapes_bounding_box};
pub use hit_test::{deepest_shape_at_point, is_point_hitting_shape, point_in_polygon};
pub use sampler::{
    insert_anchor_on_curve, sample_arc, sample_cubic_bezier, sample_path, split_bezier_curve,
    sq_dist_to_segment,
};
pub use selection::{is_shape_in_polygon, shape_intersects_rect};
pub use transform::{
    flip_shape, project_point, quad_projective_matrix, resize_shape, rotate_shape, scale_shape,
    translate_shape, warp_corner, warped_corners,
};

pub use vexel_core::{Axis, BBox, GeometryError, Point, TransformError};
