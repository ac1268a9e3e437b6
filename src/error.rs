use thiserror::Error;

/// Minimum number of vertices for a closed boundary.
pub const MIN_VERTICES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("invalid polygon: {vertices} vertices, at least 3 required")]
    InvalidPolygon { vertices: usize },

    #[error("invalid polygon at index {index}: {vertices} vertices, at least 3 required")]
    InvalidPolygonAt { index: usize, vertices: usize },
}

impl PolygonError {
    /// Attach the polygon's position within its set.
    pub fn at(self, index: usize) -> Self {
        match self {
            PolygonError::InvalidPolygon { vertices }
            | PolygonError::InvalidPolygonAt { vertices, .. } => {
                PolygonError::InvalidPolygonAt { index, vertices }
            }
        }
    }

    pub fn vertices(&self) -> usize {
        match self {
            PolygonError::InvalidPolygon { vertices }
            | PolygonError::InvalidPolygonAt { vertices, .. } => *vertices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_records_index() {
        let err = PolygonError::InvalidPolygon { vertices: 2 }.at(4);
        assert_eq!(
            err,
            PolygonError::InvalidPolygonAt {
                index: 4,
                vertices: 2
            }
        );
        assert_eq!(err.vertices(), 2);
        assert!(err.to_string().contains("index 4"));
    }
}
