use crate::domain::Point;
use crate::error::{MIN_VERTICES, PolygonError};

/// An implicitly closed polygon: an edge joins the last point back to the first.
///
/// Points are fixed at construction. Fewer than three points are allowed here
/// so callers can still classify such input; `try_new` and the perimeter
/// calculation reject them.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a polygon, rejecting fewer than three points.
    pub fn try_new(points: Vec<Point>) -> Result<Self, PolygonError> {
        let polygon = Self::new(points);
        polygon.validate()?;
        Ok(polygon)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_valid(&self) -> bool {
        self.points.len() >= MIN_VERTICES
    }

    pub fn validate(&self) -> Result<(), PolygonError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PolygonError::InvalidPolygon {
                vertices: self.points.len(),
            })
        }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<(f64, f64)>> for Polygon {
    fn from(points: Vec<(f64, f64)>) -> Self {
        points.into_iter().map(Point::from).collect()
    }
}

/// Takes the ring's coordinates; a repeated closing coordinate is dropped
/// since the boundary is already implicitly closed.
impl From<&geo::LineString<f64>> for Polygon {
    fn from(ring: &geo::LineString<f64>) -> Self {
        let mut coords = ring.0.as_slice();
        if coords.len() > 1 && ring.is_closed() {
            coords = &coords[..coords.len() - 1];
        }
        coords.iter().map(|&c| Point::from(c)).collect()
    }
}

impl From<&geo::Polygon<f64>> for Polygon {
    fn from(polygon: &geo::Polygon<f64>) -> Self {
        Self::from(polygon.exterior())
    }
}

/// An ordered collection of polygons. Results computed over a set line up
/// with it position by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl FromIterator<Polygon> for PolygonSet {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
