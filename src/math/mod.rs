/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons in tests and diagnostics.
///
/// The edge algorithms themselves compare coordinates exactly.
pub const TOLERANCE: f64 = 1e-10;
