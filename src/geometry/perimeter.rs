//! Closed-boundary perimeter of polygons.
//!
//! The perimeter is a single left-to-right fold over the vertices. The
//! accumulator starts at the polygon's *last* point, so the first step measures
//! the closing edge and no separate wrap-around case is needed.

use crate::domain::{Point, Polygon, PolygonSet};
use crate::error::PolygonError;

/// Carried state of the fold: the previously visited point and the length so far.
#[derive(Debug, Clone, Copy)]
struct Walk {
    last: Point,
    sum: f64,
}

impl Walk {
    fn step(self, next: &Point) -> Self {
        Self {
            last: *next,
            sum: self.sum + self.last.distance(next),
        }
    }
}

/// Perimeter of one polygon.
///
/// Edges are summed in vertex order, starting with the edge from the last
/// vertex to the first.
///
/// # Errors
/// * `PolygonError::InvalidPolygon` - fewer than three vertices
pub fn perimeter(polygon: &Polygon) -> Result<f64, PolygonError> {
    polygon.validate()?;

    let points = polygon.points();
    let Some(&last) = points.last() else {
        return Err(PolygonError::InvalidPolygon { vertices: 0 });
    };

    let walk = points
        .iter()
        .fold(Walk { last, sum: 0.0 }, |walk, p| walk.step(p));

    Ok(walk.sum)
}

/// Perimeters of every polygon in the set, in set order.
///
/// Stops at the first invalid polygon; the error carries its index.
pub fn perimeters(set: &PolygonSet) -> Result<Vec<f64>, PolygonError> {
    set.iter()
        .enumerate()
        .map(|(index, polygon)| perimeter(polygon).map_err(|e| e.at(index)))
        .collect()
}

/// One result per polygon, in set order. Invalid polygons yield an error in
/// their slot instead of aborting the batch.
pub fn perimeter_results(set: &PolygonSet) -> Vec<Result<f64, PolygonError>> {
    set.iter()
        .enumerate()
        .map(|(index, polygon)| perimeter(polygon).map_err(|e| e.at(index)))
        .collect()
}
