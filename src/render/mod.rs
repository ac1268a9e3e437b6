pub mod svg;

pub use svg::{polygons_to_svg, write_svg};
