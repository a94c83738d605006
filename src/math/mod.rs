//! Linear algebra type aliases and numerical tolerances.

pub type Point3 = nalgebra::Point3<f64>;
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance for point coincidence tests (distance in model units).
pub const TOLERANCE: f64 = 1e-9;

/// Cross products shorter than this are treated as degenerate when
/// normalizing surface normals.
pub const DEGENERATE_TOL: f64 = 1e-15;
