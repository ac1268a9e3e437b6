use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Canvas;
use crate::domain::PolygonSet;

const TEXT_X: u32 = 10;
const TEXT_Y: u32 = 500;
const TEXT_SPACING: u32 = 30;

/// Render the polygons as filled shapes with `lines` of text underneath.
///
/// Coordinates are used as-is; SVG's y axis points down, like screen space.
pub fn polygons_to_svg(set: &PolygonSet, lines: &[String], canvas: &Canvas) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    ));
    svg.push('\n');

    for polygon in set {
        let points = polygon
            .points()
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"blue\" stroke=\"black\"/>\n",
            points
        ));
    }

    for (i, line) in lines.iter().enumerate() {
        let y = TEXT_Y + TEXT_SPACING * i as u32;
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"14\">{}</text>\n",
            TEXT_X,
            y,
            escape_text(line)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the SVG rendering to `path`.
pub fn write_svg(path: &Path, set: &PolygonSet, lines: &[String], canvas: &Canvas) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create SVG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(polygons_to_svg(set, lines, canvas).as_bytes())?;
    writer.flush()?;

    Ok(())
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Polygon;
    use std::fs;
    use tempfile::tempdir;

    fn triangle_set() -> PolygonSet {
        PolygonSet::new(vec![Polygon::from(vec![
            (300.0, 250.0),
            (350.0, 150.0),
            (400.5, 250.0),
        ])])
    }

    #[test]
    fn test_svg_contains_polygon_and_text() {
        let lines = vec!["Polygon types: [Triangle]".to_string()];
        let svg = polygons_to_svg(&triangle_set(), &lines, &Canvas::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="800" height="600""#));
        assert!(svg.contains(r#"points="300,250 350,150 400.5,250""#));
        assert!(svg.contains(r#"<text x="10" y="500""#));
        assert!(svg.contains("Polygon types: [Triangle]"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_lines_are_stacked() {
        let lines = vec!["one".to_string(), "two".to_string()];
        let svg = polygons_to_svg(&PolygonSet::default(), &lines, &Canvas::default());
        assert!(svg.contains(r#"y="500""#));
        assert!(svg.contains(r#"y="530""#));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_one_element_per_line() {
        let lines = vec!["Polygon types: [Triangle]".to_string()];
        let svg = polygons_to_svg(&triangle_set(), &lines, &Canvas::default());
        let rows: Vec<&str> = svg.lines().collect();

        assert_eq!(rows.len(), 4);
        assert!(rows[1].trim_start().starts_with("<polygon"));
        assert!(rows[2].trim_start().starts_with("<text"));
        assert_eq!(rows[3], "</svg>");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_write_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.svg");

        write_svg(&path, &triangle_set(), &[], &Canvas::default()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<polygon"));
    }
}
