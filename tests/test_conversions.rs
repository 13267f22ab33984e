use approx::{assert_abs_diff_eq, assert_relative_eq};
use polarize::precision;
use polarize::{convert, AxisAngle, CartesianUnit, PolarUnit, Quaternion, Scalar, SphericalUnit};

#[test]
fn test_polar_unit_quarter_turn_scenario() {
    // PolarUnit(radius=2, theta=pi/2) lands on the +x axis.
    let unit = convert::to_cartesian_unit(&PolarUnit::new(2.0, precision::RADIAN_90));
    assert_relative_eq!(unit.x(), 2.0, epsilon = 1e-12);
    assert_eq!(unit.y(), 0.0);
    assert_abs_diff_eq!(unit.z(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_polar_round_trip_through_cartesian() {
    for &(radius, theta) in &[(1.0, 0.25), (2.0, 1.2), (5.5, -0.9), (0.25, 3.0)] {
        let original = PolarUnit::new(radius, theta);
        let cartesian = convert::to_cartesian_unit(&original);
        let back = convert::to_polar_unit(&cartesian);
        assert_relative_eq!(back.radius(), radius, epsilon = 1e-12);
        assert_relative_eq!(back.theta(), theta, epsilon = 1e-12);

        // A second trip reproduces the same values.
        let again = convert::to_polar_unit(&convert::to_cartesian_unit(&back));
        assert_relative_eq!(again.radius(), back.radius(), epsilon = 1e-12);
        assert_relative_eq!(again.theta(), back.theta(), epsilon = 1e-12);
    }
}

#[test]
fn test_spherical_round_trip_through_cartesian() {
    for &(radius, theta, phi) in &[(1.0, 0.4, 0.3), (3.0, 1.5, -1.0), (10.0, 2.8, 0.05)] {
        let original = SphericalUnit::new(radius, theta, phi);
        let cartesian = convert::to_cartesian_unit_spherical(&original);
        let back = convert::to_spherical_unit(&cartesian);
        assert_relative_eq!(back.radius(), radius, epsilon = 1e-10);
        assert_relative_eq!(back.theta(), theta, epsilon = 1e-10);
        assert_relative_eq!(back.phi(), phi, epsilon = 1e-10);
    }
}

#[test]
fn test_scalar_variants_match_unit_paths() {
    let scalar = Scalar::new(2.5, 0.0);
    let via_scalar = convert::to_cartesian_unit_from_scalar(&scalar, 0.8);
    let via_unit = convert::to_cartesian_unit(&PolarUnit::new(2.5, 0.8));
    assert_eq!(via_scalar, via_unit);

    let via_scalar = convert::to_cartesian_unit_spherical_from_scalar(&scalar, 0.8, 1.1);
    let via_unit = convert::to_cartesian_unit_spherical(&SphericalUnit::new(2.5, 0.8, 1.1));
    assert_eq!(via_scalar, via_unit);
}

#[test]
fn test_cartesian_unit_pairing_holds_after_conversion() {
    let unit = convert::to_cartesian_unit_spherical(&SphericalUnit::new(4.0, 1.0, 2.0));
    assert_eq!(unit.point2d().x(), unit.point3d().x());
    assert_eq!(unit.point2d().z(), unit.point3d().z());
}

#[test]
fn test_axis_angle_round_trip_normalized_axis() {
    let original = AxisAngle::new(1.0, 2.0, 2.0, 1.2).normalized().expect("non-zero axis");
    let back = convert::to_axis_angle(&convert::to_quaternion(&original));
    assert_relative_eq!(back.angle(), original.angle(), epsilon = 1e-12);
    assert_relative_eq!(back.x(), original.x(), epsilon = 1e-9);
    assert_relative_eq!(back.y(), original.y(), epsilon = 1e-9);
    assert_relative_eq!(back.z(), original.z(), epsilon = 1e-9);
}

#[test]
fn test_axis_angle_near_identity_round_trip() {
    // angle ~ 0 exercises the degenerate-axis branch: the axis comes
    // back as the raw (tiny) vector part, but the angle survives.
    let original = AxisAngle::new(0.0, 1.0, 0.0, 1.0e-5);
    let back = convert::to_axis_angle(&convert::to_quaternion(&original));
    assert_relative_eq!(back.angle(), original.angle(), epsilon = 1e-10);
}

#[test]
fn test_unit_quaternion_normalize_is_identity_scenario() {
    let q = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let n = q.normalized().expect("unit magnitude");
    assert_eq!(n.magnitude(), 1.0);
    assert_eq!(n, q);
}

#[test]
fn test_zero_scalar_inverse_fails_scenario() {
    let result = Scalar::new(0.0, 3.0).inverse();
    assert!(matches!(result, Err(polarize::PolarizeError::ZeroMagnitude(_))));
}

#[test]
fn test_raw_coordinate_overloads_bit_identical() {
    let cartesian = CartesianUnit::new(1.25, -0.5, 2.75);
    assert_eq!(
        convert::to_spherical_unit(&cartesian),
        convert::to_spherical_unit_from_coords(1.25, -0.5, 2.75)
    );
    assert_eq!(
        convert::to_polar_unit(&cartesian),
        convert::to_polar_unit_from_coords(1.25, 2.75)
    );
}
