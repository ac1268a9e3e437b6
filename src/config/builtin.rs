//! The five example polygons shown when no polygons are configured.

use super::PolygonConfig;
use crate::domain::Point;

fn entry(name: &str, points: &[(f64, f64)]) -> PolygonConfig {
    PolygonConfig {
        name: Some(name.to_string()),
        points: points.iter().copied().map(Point::from).collect(),
    }
}

pub fn polygons() -> Vec<PolygonConfig> {
    vec![
        entry(
            "square",
            &[(50.0, 50.0), (150.0, 50.0), (150.0, 150.0), (50.0, 150.0)],
        ),
        entry(
            "rectangle",
            &[(200.0, 50.0), (400.0, 50.0), (400.0, 100.0), (200.0, 100.0)],
        ),
        entry("triangle", &[(300.0, 250.0), (350.0, 150.0), (400.0, 250.0)]),
        entry(
            "pentagon",
            &[
                (200.0, 250.0),
                (250.0, 300.0),
                (250.0, 350.0),
                (150.0, 350.0),
                (150.0, 300.0),
            ],
        ),
        entry(
            "hexagon",
            &[
                (320.0, 270.0),
                (370.0, 320.0),
                (370.0, 370.0),
                (320.0, 420.0),
                (270.0, 370.0),
                (270.0, 320.0),
            ],
        ),
    ]
}
