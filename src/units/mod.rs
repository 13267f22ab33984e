//! Value types package.
//!
//! One file per type; everything re-exported at module level so the
//! rest of the crate sees a flat namespace. All types are immutable
//! values: operations return new instances.

mod axis_angle;
mod cartesian_unit;
mod delta;
mod point2d;
mod point3d;
mod polar_unit;
mod quaternion;
mod scalar;
mod scalar_triple;
mod spherical_unit;
mod vector;

pub use axis_angle::AxisAngle;
pub use cartesian_unit::CartesianUnit;
pub use delta::Delta;
pub use point2d::Point2D;
pub use point3d::Point3D;
pub use polar_unit::PolarUnit;
pub use quaternion::Quaternion;
pub use scalar::Scalar;
pub use scalar_triple::ScalarTriple;
pub use spherical_unit::SphericalUnit;
pub use vector::Vector;
