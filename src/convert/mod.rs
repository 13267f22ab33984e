//! Conversions between coordinate representations.
//!
//! Bidirectional, deterministic mappings between Cartesian, polar,
//! spherical, and axis-angle/quaternion forms. Every function is pure
//! and returns a new value; the raw-coordinate variants exist for
//! convenience and produce bit-identical results to the unit-based
//! paths.
//!
//! Angle conventions: theta is the zenith (angle from the vertical
//! axis), phi is the azimuth (angle in the horizontal plane), and the
//! planar angle is measured by `atan2(x, z)`. The argument order is
//! part of the contract, since swapping it changes the reference axis.

use crate::precision;
use crate::units::{
    AxisAngle, CartesianUnit, Point2D, Point3D, PolarUnit, Quaternion, Scalar, SphericalUnit,
    Vector,
};

/// Converts a polar unit to the paired Cartesian form.
///
/// `x = r * sin(theta)`, `z = r * cos(theta)`; the vertical component
/// is zero.
pub fn to_cartesian_unit(unit: &PolarUnit) -> CartesianUnit {
    to_cartesian_unit_from_angles(unit.radius(), unit.theta())
}

/// Converts a scalar magnitude and a zenith angle to the paired
/// Cartesian form.
pub fn to_cartesian_unit_from_scalar(scalar: &Scalar, theta: f64) -> CartesianUnit {
    to_cartesian_unit_from_angles(scalar.magnitude(), theta)
}

/// Raw-coordinate variant of [`to_cartesian_unit`].
pub fn to_cartesian_unit_from_angles(radius: f64, theta: f64) -> CartesianUnit {
    let x = radius * theta.sin();
    let z = radius * theta.cos();
    CartesianUnit::new(x, 0.0, z)
}

/// Converts a spherical unit to the paired Cartesian form.
///
/// `x = r * sin(theta) * cos(phi)`, `y = r * cos(theta)`,
/// `z = r * sin(theta) * sin(phi)`.
pub fn to_cartesian_unit_spherical(unit: &SphericalUnit) -> CartesianUnit {
    to_cartesian_unit_spherical_from_angles(unit.radius(), unit.theta(), unit.phi())
}

/// Converts a scalar magnitude and both spherical angles to the paired
/// Cartesian form.
pub fn to_cartesian_unit_spherical_from_scalar(scalar: &Scalar, theta: f64, phi: f64) -> CartesianUnit {
    to_cartesian_unit_spherical_from_angles(scalar.magnitude(), theta, phi)
}

/// Raw-coordinate variant of [`to_cartesian_unit_spherical`].
pub fn to_cartesian_unit_spherical_from_angles(radius: f64, theta: f64, phi: f64) -> CartesianUnit {
    let x = radius * theta.sin() * phi.cos();
    let y = radius * theta.cos();
    let z = radius * theta.sin() * phi.sin();
    CartesianUnit::new(x, y, z)
}

/// Converts a Cartesian unit to polar form using its horizontal-plane
/// projection.
///
/// `r = sqrt(x^2 + z^2)`, `theta = atan2(x, z)`.
pub fn to_polar_unit(unit: &CartesianUnit) -> PolarUnit {
    to_polar_unit_from_coords(unit.point2d().x(), unit.point2d().z())
}

/// Converts a Cartesian unit to polar form, taking the radius from the
/// given vector's length instead of the planar distance.
pub fn to_polar_unit_with_vector(unit: &CartesianUnit, vector: &Vector) -> PolarUnit {
    PolarUnit::new(
        vector.length(),
        f64::atan2(unit.point2d().x(), unit.point2d().z()),
    )
}

/// Converts a 2D point to polar form, taking the radius from the given
/// vector's length.
pub fn to_polar_unit_from_point(point: &Point2D, vector: &Vector) -> PolarUnit {
    PolarUnit::new(vector.length(), f64::atan2(point.x(), point.z()))
}

/// Raw-coordinate variant of [`to_polar_unit`].
pub fn to_polar_unit_from_coords(x: f64, z: f64) -> PolarUnit {
    let radius = (x * x + z * z).sqrt();
    let theta = f64::atan2(x, z);
    PolarUnit::new(radius, theta)
}

/// Converts a Cartesian unit to spherical form.
///
/// `r = sqrt(x^2 + y^2 + z^2)`, `theta = acos(y / r)`,
/// `phi = atan2(x, z)`.
pub fn to_spherical_unit(unit: &CartesianUnit) -> SphericalUnit {
    to_spherical_unit_from_coords(
        unit.point3d().x(),
        unit.point3d().y(),
        unit.point3d().z(),
    )
}

/// Converts a 3D point to spherical form, taking the radius from the
/// given vector's length.
pub fn to_spherical_unit_from_point(point: &Point3D, vector: &Vector) -> SphericalUnit {
    let radius = vector.length();
    let theta = (point.y() / radius).acos();
    let phi = f64::atan2(point.x(), point.z());
    SphericalUnit::new(radius, theta, phi)
}

/// Raw-coordinate variant of [`to_spherical_unit`].
pub fn to_spherical_unit_from_coords(x: f64, y: f64, z: f64) -> SphericalUnit {
    let radius = (x * x + y * y + z * z).sqrt();
    let theta = (y / radius).acos();
    let phi = f64::atan2(x, z);
    SphericalUnit::new(radius, theta, phi)
}

/// Extracts the axis-angle form of a quaternion.
///
/// `angle = 2 * acos(w)`; the axis is the vector part divided by
/// `s = sqrt(1 - w^2)`. When `s` falls below
/// [`precision::AXIS_EPSILON`] the rotation is near the identity and
/// the axis direction is arbitrary, so the raw vector part is used
/// instead of dividing by a vanishing sine.
pub fn to_axis_angle(quaternion: &Quaternion) -> AxisAngle {
    let angle = 2.0 * quaternion.w().acos();
    let s = (1.0 - quaternion.w() * quaternion.w()).sqrt();

    if s < precision::AXIS_EPSILON {
        AxisAngle::new(quaternion.x(), quaternion.y(), quaternion.z(), angle)
    } else {
        AxisAngle::new(
            quaternion.x() / s,
            quaternion.y() / s,
            quaternion.z() / s,
            angle,
        )
    }
}

/// Builds the quaternion form of an axis-angle rotation.
///
/// `w = cos(angle / 2)`, vector part = axis * sin(angle / 2).
pub fn to_quaternion(axis_angle: &AxisAngle) -> Quaternion {
    let half = axis_angle.angle() / 2.0;
    let s = half.sin();
    Quaternion::new(
        half.cos(),
        axis_angle.x() * s,
        axis_angle.y() * s,
        axis_angle.z() * s,
    )
}
