//! Display formatting of computed results.
//!
//! The calculators return raw values; rounding and list rendering happen here.

use serde::Serialize;

use crate::domain::PolygonSet;
use crate::error::PolygonError;
use crate::geometry::{ShapeKind, classify_polygon, perimeters};

/// Per-polygon entry of the JSON report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PolygonReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vertices: usize,
    pub kind: ShapeKind,
    pub perimeter: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub polygons: Vec<PolygonReport>,
}

impl Report {
    /// Build a report for `set`, pairing each polygon with `names[i]` when present.
    pub fn build(set: &PolygonSet, names: &[Option<String>]) -> Result<Self, PolygonError> {
        let values = perimeters(set)?;

        let polygons = set
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (polygon, perimeter))| PolygonReport {
                index,
                name: names.get(index).cloned().flatten(),
                vertices: polygon.vertex_count(),
                kind: classify_polygon(polygon),
                perimeter,
            })
            .collect();

        Ok(Self { polygons })
    }

    pub fn perimeters(&self) -> Vec<f64> {
        self.polygons.iter().map(|p| p.perimeter).collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.polygons.iter().map(|p| p.kind.label()).collect()
    }

    /// The two display lines: perimeters, then shape names.
    pub fn lines(&self, precision: u8) -> Vec<String> {
        vec![
            format!(
                "Polygon perimeters: {}",
                format_list(&format_perimeters(&self.perimeters(), precision))
            ),
            format!("Polygon types: {}", format_list(&self.labels())),
        ]
    }
}

/// Round each value to `precision` decimal places.
pub fn format_perimeters(values: &[f64], precision: u8) -> Vec<String> {
    values
        .iter()
        .map(|v| format!("{:.*}", usize::from(precision), v))
        .collect()
}

/// Render items as `[a, b, c]`.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
