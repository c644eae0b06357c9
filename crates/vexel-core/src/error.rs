//! Error types for the geometry engine.
//!
//! The engine favors defensive degeneration over errors: degenerate
//! geometry (zero-length tangents, zero-size boxes, singular warp systems)
//! produces well-defined fallback values. The errors here cover the
//! remaining programmer-error seams, chiefly handing an operation a handle
//! identifier that is invalid for the shape variant it was called on.

use thiserror::Error;

/// Errors from geometry construction and sampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An operation needed more input points than were supplied.
    #[error("not enough points: needed {needed}, got {got}")]
    NotEnoughPoints {
        /// Minimum number of points the operation requires.
        needed: usize,
        /// Number of points actually supplied.
        got: usize,
    },

    /// Input geometry contained NaN or infinite coordinates.
    #[error("non-finite geometry in {context}")]
    NonFiniteGeometry {
        /// The operation that rejected the input.
        context: &'static str,
    },
}

/// Errors from the transform engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A handle identifier was used with a shape variant it does not apply
    /// to (e.g. a warp corner on a brush stroke).
    #[error("handle {handle} is not valid for {tool} shapes")]
    InvalidHandle {
        /// Display name of the offending handle.
        handle: String,
        /// Display name of the shape variant.
        tool: String,
    },

    /// The operation is not defined for this shape variant.
    #[error("{operation} is not supported for {tool} shapes")]
    UnsupportedVariant {
        /// The operation that was attempted.
        operation: &'static str,
        /// Display name of the shape variant.
        tool: String,
    },
}
