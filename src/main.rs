use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use polymeter::config::{ConfigSearch, FileConfig, to_polygon_set};
use polymeter::logging::init_logger;
use polymeter::render::write_svg;
use polymeter::report::Report;

/// Report the perimeter and shape name of each polygon in a set
///
/// Examples:
///   # Built-in example polygons
///   polymeter
///
///   # Polygons from a config file, three decimals
///   polymeter --config shapes.toml --precision 3
///
///   # JSON output plus a picture
///   polymeter --json --svg shapes.svg
#[derive(Parser, Debug)]
#[command(name = "polymeter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches polymeter.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decimal places for printed perimeters (defaults to 1)
    #[arg(short = 'p', long)]
    precision: Option<u8>,

    /// Print a JSON report instead of text lines
    #[arg(long)]
    json: bool,

    /// Also render the polygons and results to an SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let search = match args.config {
        Some(ref path) => ConfigSearch {
            config: Some(FileConfig::load_from(path)?),
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => FileConfig::load(),
    };
    let from_file = search.config.is_some();
    let file_config = search.config.unwrap_or_default();

    let verbose = args.verbose || file_config.verbose;
    init_logger(verbose);

    for (path, reason) in &search.skipped {
        tracing::warn!("skipped config file {}: {}", path.display(), reason);
    }
    if let Some(ref path) = search.source {
        tracing::debug!("loaded config from {}", path.display());
    }

    let precision = args.precision.unwrap_or(file_config.precision);
    let entries = file_config.polygon_entries();
    let (set, names) = to_polygon_set(&entries);

    tracing::debug!(
        from_file,
        polygons = set.len(),
        precision,
        "configuration resolved"
    );

    let report = Report::build(&set, &names).context("Failed to measure polygons")?;
    for entry in &report.polygons {
        tracing::debug!(
            index = entry.index,
            vertices = entry.vertices,
            kind = %entry.kind,
            perimeter = entry.perimeter,
            "measured polygon"
        );
    }

    let lines = report.lines(precision);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }

    if let Some(ref path) = args.svg {
        write_svg(path, &set, &lines, &file_config.canvas).context("Failed to write SVG file")?;
        tracing::info!("wrote {}", path.display());
    }

    Ok(())
}
