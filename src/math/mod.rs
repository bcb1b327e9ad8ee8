pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
mod tolerance;

pub use tolerance::{approx_eq, approx_zero, set_tolerance, tolerance, DEFAULT_TOLERANCE};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Homogeneous 3-vector (points and lines).
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 projective matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;
