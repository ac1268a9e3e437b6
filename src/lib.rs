//! polymeter - perimeters and shape names for sets of 2D polygons

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod report;

pub use domain::{Point, Polygon, PolygonSet};
pub use error::PolygonError;
pub use geometry::{ShapeKind, classify, perimeter, perimeter_results, perimeters};
