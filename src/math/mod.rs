pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance used by tests and area comparisons. The triangulation
/// predicates themselves are exact sign tests and never consult it.
pub const TOLERANCE: f64 = 1e-10;
