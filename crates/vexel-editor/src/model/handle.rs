//! Drag handle identifiers.
//!
//! The fixed enumeration the UI layer hands to resize/warp operations:
//! eight compass resize positions plus the rotate, border-radius, arc,
//! skew and warp-corner affordances.

use serde::{Deserialize, Serialize};

/// One of the eight resize affordances around a shape's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::Top,
        ResizeHandle::TopRight,
        ResizeHandle::Right,
        ResizeHandle::BottomRight,
        ResizeHandle::Bottom,
        ResizeHandle::BottomLeft,
        ResizeHandle::Left,
    ];

    /// Whether dragging this handle changes the horizontal extent.
    pub fn affects_x(&self) -> bool {
        !matches!(self, ResizeHandle::Top | ResizeHandle::Bottom)
    }

    /// Whether dragging this handle changes the vertical extent.
    pub fn affects_y(&self) -> bool {
        !matches!(self, ResizeHandle::Left | ResizeHandle::Right)
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeHandle::TopLeft
                | ResizeHandle::TopRight
                | ResizeHandle::BottomRight
                | ResizeHandle::BottomLeft
        )
    }
}

impl std::fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResizeHandle::TopLeft => "top-left",
            ResizeHandle::Top => "top",
            ResizeHandle::TopRight => "top-right",
            ResizeHandle::Right => "right",
            ResizeHandle::BottomRight => "bottom-right",
            ResizeHandle::Bottom => "bottom",
            ResizeHandle::BottomLeft => "bottom-left",
            ResizeHandle::Left => "left",
        };
        write!(f, "{}", name)
    }
}

/// One corner of a quad-warp distortion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuadCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// One of the three defining points of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcPoint {
    Start,
    Mid,
    End,
}

/// Any drag affordance the UI can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handle {
    Resize(ResizeHandle),
    Rotate,
    BorderRadius,
    Arc(ArcPoint),
    Skew,
    WarpCorner(QuadCorner),
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handle::Resize(h) => write!(f, "resize:{}", h),
            Handle::Rotate => write!(f, "rotate"),
            Handle::BorderRadius => write!(f, "border-radius"),
            Handle::Arc(p) => write!(f, "arc:{:?}", p),
            Handle::Skew => write!(f, "skew"),
            Handle::WarpCorner(c) => write!(f, "warp:{:?}", c),
        }
    }
}
