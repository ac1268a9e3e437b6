use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{Point, Polygon, PolygonSet};

pub mod builtin;

fn default_precision() -> u8 {
    1
}
fn default_verbose() -> bool {
    false
}
fn default_canvas_width() -> u32 {
    800
}
fn default_canvas_height() -> u32 {
    600
}

/// Size of the rendered picture in pixels.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Canvas {
    #[serde(default = "default_canvas_width")]
    pub width: u32,
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// A `[[polygons]]` table.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PolygonConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub points: Vec<Point>,
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_precision")]
    /// Decimal places for displayed perimeters.
    pub precision: u8,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default)]
    pub polygons: Vec<PolygonConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            verbose: default_verbose(),
            canvas: Canvas::default(),
            polygons: Vec::new(),
        }
    }
}

/// Outcome of the automatic config search.
///
/// Nothing is logged during the search; the caller reports `skipped` once
/// logging is set up.
#[derive(Debug, Default)]
pub struct ConfigSearch {
    pub config: Option<FileConfig>,
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

impl FileConfig {
    /// Search the usual locations and return the first config that parses.
    pub fn load() -> ConfigSearch {
        Self::load_first(&get_config_paths())
    }

    /// Try `paths` in order. Unreadable or malformed files are recorded and skipped.
    pub fn load_first(paths: &[PathBuf]) -> ConfigSearch {
        let mut search = ConfigSearch::default();

        for path in paths {
            if !path.exists() {
                continue;
            }
            let parsed = std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|contents| {
                    toml::from_str::<FileConfig>(&contents).map_err(|e| e.to_string())
                });
            match parsed {
                Ok(config) => {
                    search.config = Some(config);
                    search.source = Some(path.clone());
                    return search;
                }
                Err(reason) => search.skipped.push((path.clone(), reason)),
            }
        }
        search
    }

    /// Load an explicitly requested config file. Missing or malformed files are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Configured polygons, or the built-in examples when none are given.
    pub fn polygon_entries(&self) -> Vec<PolygonConfig> {
        if self.polygons.is_empty() {
            builtin::polygons()
        } else {
            self.polygons.clone()
        }
    }
}

/// Split entries into the set handed to the calculators and their display names.
pub fn to_polygon_set(entries: &[PolygonConfig]) -> (PolygonSet, Vec<Option<String>>) {
    let set = entries
        .iter()
        .map(|e| Polygon::new(e.points.clone()))
        .collect();
    let names = entries.iter().map(|e| e.name.clone()).collect();
    (set, names)
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polymeter.toml"));
    paths.push(PathBuf::from(".polymeter.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polymeter").join("config.toml"));
        paths.push(config_dir.join("polymeter.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polymeter.toml"));
        paths.push(home.join(".config").join("polymeter").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.precision, 1);
        assert!(!config.verbose);
        assert_eq!(config.canvas, Canvas::default());
        assert_eq!(config.polygon_entries().len(), 5);
    }

    #[test]
    fn test_parse_polygons() {
        let config: FileConfig = toml::from_str(
            r#"
precision = 3

[canvas]
width = 400

[[polygons]]
name = "wedge"
points = [[0, 0], [4, 0], [0, 3]]

[[polygons]]
points = [[0.5, 0.5], [1.5, 0.5], [1.5, 1.5], [0.5, 1.5]]
"#,
        )
        .unwrap();

        assert_eq!(config.precision, 3);
        assert_eq!(config.canvas.width, 400);
        assert_eq!(config.canvas.height, 600);

        let entries = config.polygon_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name.as_deref(), Some("wedge"));
        assert_eq!(entries[1].points[2], Point::new(1.5, 1.5));

        let (set, names) = to_polygon_set(&entries);
        assert_eq!(set.len(), 2);
        assert_eq!(names, vec![Some("wedge".to_string()), None]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let err = FileConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[polygons]]\npoints = \"oops\"\n").unwrap();
        assert!(FileConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_load_first_skips_malformed_file() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("polymeter.toml");
        let good = dir.path().join("config.toml");
        fs::write(&bad, "precision = \"oops\"\n").unwrap();
        fs::write(&good, "precision = 2\n").unwrap();

        let paths = [dir.path().join("missing.toml"), bad.clone(), good.clone()];
        let search = FileConfig::load_first(&paths);

        assert_eq!(search.config.map(|c| c.precision), Some(2));
        assert_eq!(search.source, Some(good));
        assert_eq!(search.skipped.len(), 1);
        assert_eq!(search.skipped[0].0, bad);
        assert!(search.skipped[0].1.contains("precision"));
    }

    #[test]
    fn test_load_first_only_malformed_files() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("polymeter.toml");
        fs::write(&bad, "precision = \"oops\"\n").unwrap();

        let search = FileConfig::load_first(&[bad]);

        assert!(search.config.is_none());
        assert!(search.source.is_none());
        assert_eq!(search.skipped.len(), 1);
    }

    #[test]
    fn test_precision_out_of_range_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("precision = 70000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("polymeter.toml");
        fs::write(&path, "verbose = true\n").unwrap();
        let config = FileConfig::load_from(&path).unwrap();
        assert!(config.verbose);
    }
}
