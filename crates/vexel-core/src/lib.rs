//! # Vexel Core
//!
//! Foundation types for the Vexel editor.
//! Provides the scalar geometry primitives (points, rotation, interpolation),
//! axis-aligned bounding boxes, and the typed errors shared by every layer
//! of the engine.

pub mod bbox;
pub mod error;
pub mod geometry;

pub use bbox::BBox;
pub use error::{GeometryError, TransformError};
pub use geometry::{dist, lerp_point, rotate_point, Axis, Point, EPSILON};
