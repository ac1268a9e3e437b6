use std::fmt;

use serde::Serialize;

use crate::domain::{Polygon, PolygonSet};

/// Shape name derived from a polygon's vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Triangle,
    Quadrilateral,
    Pentagon,
    Hexagon,
    /// Any other count, including degenerate ones below three.
    Polygon,
}

impl ShapeKind {
    pub fn from_vertex_count(count: usize) -> ShapeKind {
        match count {
            3 => ShapeKind::Triangle,
            4 => ShapeKind::Quadrilateral,
            5 => ShapeKind::Pentagon,
            6 => ShapeKind::Hexagon,
            _ => ShapeKind::Polygon,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Quadrilateral => "Quadrilateral",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_polygon(polygon: &Polygon) -> ShapeKind {
    ShapeKind::from_vertex_count(polygon.vertex_count())
}

/// One label per polygon, in set order. Never fails.
pub fn classify(set: &PolygonSet) -> Vec<&'static str> {
    set.iter().map(|p| classify_polygon(p).label()).collect()
}
