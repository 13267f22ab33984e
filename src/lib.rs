//! polarize: pure coordinate-geometry toolkit.
//!
//! Represents points, vectors, quaternions, and scalar magnitudes,
//! converts between Cartesian, polar, spherical, and axis-angle
//! representations, and rotates or samples points along curves and
//! lattices.
//!
//! Every type is an immutable value: operations return new instances
//! and no function performs I/O or touches shared state.

pub mod convert;
pub mod precision;
pub mod rotate;
pub mod sample;
pub mod units;

// Re-exports for convenience
pub use units::{
    AxisAngle, CartesianUnit, Delta, Point2D, Point3D, PolarUnit, Quaternion, Scalar,
    ScalarTriple, SphericalUnit, Vector,
};

/// Result type for polarize operations
pub type Result<T> = std::result::Result<T, PolarizeError>;

#[derive(Debug, thiserror::Error)]
pub enum PolarizeError {
    #[error("Zero magnitude: {0}")]
    ZeroMagnitude(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
