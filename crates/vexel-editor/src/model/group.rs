//! Groups: ordered, exclusively-owned shape trees.
//!
//! A group owns its children by value; no shape appears in two groups and
//! children carry no back-reference, so traversal is always top-down. A
//! mask group treats its last child as the clip shape: the clip child's
//! geometry is authoritative and every traversal routine treats the group
//! as an atomic unit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vexel_core::Point;

use super::{EditorShape, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupShape {
    pub id: String,
    pub children: Vec<Shape>,
    /// Last child is the clip shape; earlier children are clipped content.
    #[serde(default)]
    pub is_mask: bool,
    /// Collapsed groups are selected as a unit rather than descended into.
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub locked: bool,
}

impl GroupShape {
    pub fn new(children: Vec<Shape>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            children,
            is_mask: false,
            collapsed: false,
            locked: false,
        }
    }

    pub fn mask(children: Vec<Shape>) -> Self {
        Self {
            is_mask: true,
            ..Self::new(children)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// The clip shape of a mask group, if any.
    pub fn clip_child(&self) -> Option<&Shape> {
        if self.is_mask {
            self.children.last()
        } else {
            None
        }
    }

    fn map_children(&self, f: impl Fn(&Shape) -> Shape) -> Self {
        Self {
            children: self.children.iter().map(f).collect(),
            ..self.clone()
        }
    }
}

impl EditorShape for GroupShape {
    fn center(&self) -> Point {
        crate::bbox::shapes_bounding_box(&self.children, false)
            .map(|b| b.center())
            .unwrap_or(Point::ZERO)
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        self.map_children(|c| c.translated(dx, dy))
    }

    /// Children rotate independently about the same external pivot, not
    /// their own centers.
    fn rotated(&self, pivot: Point, angle: f64) -> Self {
        self.map_children(|c| c.rotated(pivot, angle))
    }

    fn scaled(&self, pivot: Point, sx: f64, sy: f64) -> Self {
        self.map_children(|c| c.scaled(pivot, sx, sy))
    }
}
