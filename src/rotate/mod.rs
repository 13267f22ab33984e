//! Rotation operators for points in 2D and 3D space.
//!
//! Rotations in polar and spherical terms are driven by unit angles or
//! delta values; rotations of Cartesian points use a quaternion
//! sandwich product. Every function returns a new point.

use crate::units::{Delta, Point2D, Point3D, PolarUnit, Quaternion, SphericalUnit};

/// Rotates a 3D point about the X axis by the unit's theta angle.
/// The X component passes through unchanged.
pub fn rotate_x(point: &Point3D, unit: &SphericalUnit) -> Point3D {
    let (sin, cos) = unit.theta().sin_cos();
    Point3D::new(
        point.x(),
        point.y() * cos - point.z() * sin,
        point.y() * sin + point.z() * cos,
    )
}

/// Rotates a 3D point about the Y axis by the unit's phi angle.
/// The Y component passes through unchanged.
pub fn rotate_y(point: &Point3D, unit: &SphericalUnit) -> Point3D {
    let (sin, cos) = unit.phi().sin_cos();
    Point3D::new(
        point.x() * cos - point.z() * sin,
        point.y(),
        point.x() * sin + point.z() * cos,
    )
}

/// Rotates a 3D point about the Z axis by the unit's theta angle.
/// The Z component passes through unchanged.
pub fn rotate_z(point: &Point3D, unit: &SphericalUnit) -> Point3D {
    let (sin, cos) = unit.theta().sin_cos();
    Point3D::new(
        point.x() * cos - point.y() * sin,
        point.x() * sin + point.y() * cos,
        point.z(),
    )
}

/// Rotates a 3D point by angular deltas about every axis at once.
///
/// The deltas accumulate additively onto angles derived from the
/// point's current position; the spherical unit supplies only the base
/// radius and angle scale:
///
/// `r' = r * cos(theta + dtheta) * cos(phi + dphi)`, then the new
/// zenith and azimuth come from the point itself and the Cartesian
/// coordinates are rebuilt from `(r', theta', phi')`.
pub fn full_rotation(point: &Point3D, delta: &Delta, unit: &SphericalUnit) -> Point3D {
    let r = unit.radius()
        * (unit.theta() + delta.theta()).cos()
        * (unit.phi() + delta.phi()).cos();
    let theta = f64::atan2(point.x(), point.z()) + delta.theta();
    let phi = f64::atan2(
        (point.x() * point.x() + point.z() * point.z()).sqrt(),
        point.y(),
    ) + delta.phi();

    Point3D::new(
        r * theta.sin() * phi.cos(),
        r * theta.cos(),
        r * theta.sin() * phi.sin(),
    )
}

/// Rotates a 2D point by the polar unit's theta angle, winding in the
/// opposite sense to [`rotate_z_2d`].
pub fn rotate_x_2d(point: &Point2D, unit: &PolarUnit) -> Point2D {
    let (sin, cos) = unit.theta().sin_cos();
    Point2D::new(
        point.z() * cos - point.x() * sin,
        point.z() * sin + point.x() * cos,
    )
}

/// Rotates a 2D point by the polar unit's theta angle.
pub fn rotate_z_2d(point: &Point2D, unit: &PolarUnit) -> Point2D {
    let (sin, cos) = unit.theta().sin_cos();
    Point2D::new(
        point.x() * cos - point.z() * sin,
        point.x() * sin + point.z() * cos,
    )
}

/// Rotates a 2D point by the spherical unit's theta angle; the
/// vertical component is fixed at zero in 2D.
pub fn full_rotation_2d(point: &Point2D, unit: &SphericalUnit) -> Point2D {
    let (sin, cos) = unit.theta().sin_cos();
    Point2D::new(
        point.x() * cos - point.z() * sin,
        point.x() * sin + point.z() * cos,
    )
}

/// Rotates a 3D point by a quaternion.
///
/// The point is embedded as the pure quaternion `(0, x, y, z)` and the
/// sandwich `q' * p * q` is computed; the vector part of the result is
/// the rotated point.
///
/// The quaternion must be normalized for the result to be a pure
/// rotation; this routine does not normalize it. Callers holding an
/// arbitrary quaternion should go through
/// [`Quaternion::normalized`] first.
pub fn rotate(point: &Point3D, quaternion: &Quaternion) -> Point3D {
    let p = Quaternion::new(0.0, point.x(), point.y(), point.z());
    let rotated = quaternion.conjugate().multiplied(&p).multiplied(quaternion);
    Point3D::new(rotated.x(), rotated.y(), rotated.z())
}

/// Rotates a 2D point by a quaternion, embedding it in the horizontal
/// plane with the vertical component at zero.
///
/// The same normalization precondition as [`rotate`] applies.
pub fn rotate_2d(point: &Point2D, quaternion: &Quaternion) -> Point2D {
    let p = Quaternion::new(0.0, point.x(), 0.0, point.z());
    let rotated = quaternion.conjugate().multiplied(&p).multiplied(quaternion);
    Point2D::new(rotated.x(), rotated.z())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use crate::precision;
    use crate::units::Vector;

    #[test]
    fn test_rotate_x_passes_x_through() {
        let point = Point3D::new(1.0, 2.0, 3.0);
        let unit = SphericalUnit::new(1.0, 0.3, 0.8);
        assert_eq!(rotate_x(&point, &unit).x(), 1.0);
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let point = Point3D::new(0.0, 1.0, 0.0);
        let unit = SphericalUnit::new(1.0, precision::RADIAN_90, 0.0);
        let rotated = rotate_x(&point, &unit);
        assert!(rotated.y().abs() < 1e-12);
        assert!((rotated.z() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_y_uses_phi() {
        let point = Point3D::new(1.0, 5.0, 0.0);
        let unit = SphericalUnit::new(1.0, 0.0, precision::RADIAN_90);
        let rotated = rotate_y(&point, &unit);
        assert!(rotated.x().abs() < 1e-12);
        assert_eq!(rotated.y(), 5.0);
        assert!((rotated.z() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_z_passes_z_through() {
        let point = Point3D::new(1.0, 0.0, 7.0);
        let unit = SphericalUnit::new(1.0, precision::RADIAN_90, 0.0);
        let rotated = rotate_z(&point, &unit);
        assert!(rotated.x().abs() < 1e-12);
        assert!((rotated.y() - 1.0).abs() < 1e-12);
        assert_eq!(rotated.z(), 7.0);
    }

    #[test]
    fn test_full_rotation_zero_deltas_uses_unit_radius() {
        // With zero deltas the composed radius collapses to
        // r * cos(theta) * cos(phi) of the unit's own angles.
        let unit = SphericalUnit::new(2.0, 0.4, 0.9);
        let point = Point3D::new(1.0, 1.0, 1.0);
        let rotated = full_rotation(&point, &Delta::new(0.0, 0.0), &unit);

        let r = 2.0 * 0.4f64.cos() * 0.9f64.cos();
        let distance = (rotated.x() * rotated.x()
            + rotated.y() * rotated.y()
            + rotated.z() * rotated.z())
        .sqrt();
        assert!((distance - r.abs()).abs() < 1e-12);
    }

    #[test]
    fn test_quaternion_rotation_preserves_length() {
        let point = Point3D::new(1.0, 2.0, 2.0);
        let q = convert::to_quaternion(
            &crate::units::AxisAngle::new(0.0, 1.0, 0.0, precision::RADIAN_90),
        );
        let rotated = rotate(&point, &q);
        let len = Vector::new(point.x(), point.y(), point.z()).length();
        let rotated_len = Vector::new(rotated.x(), rotated.y(), rotated.z()).length();
        assert!((len - rotated_len).abs() < 1e-12);
    }

    #[test]
    fn test_quaternion_identity_is_noop() {
        let point = Point3D::new(1.0, 2.0, 3.0);
        let rotated = rotate(&point, &Quaternion::identity());
        assert!((rotated.x() - 1.0).abs() < 1e-12);
        assert!((rotated.y() - 2.0).abs() < 1e-12);
        assert!((rotated.z() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_2d_keeps_plane() {
        let point = Point2D::new(1.0, 0.0);
        let q = convert::to_quaternion(
            &crate::units::AxisAngle::new(0.0, 1.0, 0.0, precision::RADIAN_180),
        );
        let rotated = rotate_2d(&point, &q);
        assert!((rotated.x() + 1.0).abs() < 1e-12);
        assert!(rotated.z().abs() < 1e-12);
    }

    #[test]
    fn test_rotate_z_2d_quarter_turn() {
        let point = Point2D::new(1.0, 0.0);
        let unit = PolarUnit::new(1.0, precision::RADIAN_90);
        let rotated = rotate_z_2d(&point, &unit);
        assert!(rotated.x().abs() < 1e-12);
        assert!((rotated.z() - 1.0).abs() < 1e-12);
    }
}
