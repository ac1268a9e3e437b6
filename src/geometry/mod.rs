pub mod classify;
pub mod perimeter;

pub use classify::{ShapeKind, classify, classify_polygon};
pub use perimeter::{perimeter, perimeter_results, perimeters};
