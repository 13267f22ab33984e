//! 1D polar-style scalar quantity.

use serde::{Deserialize, Serialize};

use super::Quaternion;
use crate::{PolarizeError, Result};

/// A magnitude paired with a reference distance from a coordinate
/// origin.
///
/// Arithmetic operates on the magnitude only; the origin rides along
/// unchanged through every operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scalar {
    magnitude: f64,
    origin: f64,
}

impl Scalar {
    /// Creates a scalar from a magnitude and an origin distance.
    #[inline]
    pub const fn new(magnitude: f64, origin: f64) -> Self {
        Self { magnitude, origin }
    }

    /// Returns the magnitude.
    #[inline]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Returns the origin distance.
    #[inline]
    pub const fn origin(&self) -> f64 {
        self.origin
    }

    /// Returns the scalar with `value` added to the magnitude.
    pub const fn added(&self, value: f64) -> Scalar {
        Scalar::new(self.magnitude + value, self.origin)
    }

    /// Returns the sum of the two magnitudes, keeping this origin.
    pub const fn added_scalar(&self, other: &Scalar) -> Scalar {
        Scalar::new(self.magnitude + other.magnitude, self.origin)
    }

    /// Returns the scalar with the magnitude multiplied by `value`.
    pub const fn multiplied(&self, value: f64) -> Scalar {
        Scalar::new(self.magnitude * value, self.origin)
    }

    /// Returns the product of the two magnitudes, keeping this origin.
    pub const fn multiplied_scalar(&self, other: &Scalar) -> Scalar {
        Scalar::new(self.magnitude * other.magnitude, self.origin)
    }

    /// Returns the magnitude multiplied by the quaternion's scalar part.
    pub const fn multiplied_quaternion(&self, quaternion: &Quaternion) -> Scalar {
        Scalar::new(self.magnitude * quaternion.w(), self.origin)
    }

    /// Returns the scalar with magnitude 1, or 0 when the magnitude is
    /// already 0. The origin is unchanged.
    pub fn normalized(&self) -> Scalar {
        if self.magnitude == 0.0 {
            return Scalar::new(0.0, self.origin);
        }
        Scalar::new(1.0, self.origin)
    }

    /// Returns the reciprocal of the magnitude.
    ///
    /// Fails with [`PolarizeError::ZeroMagnitude`] when the magnitude
    /// is exactly 0.
    pub fn inverse(&self) -> Result<Scalar> {
        if self.magnitude == 0.0 {
            return Err(PolarizeError::ZeroMagnitude(
                "cannot invert a scalar with magnitude 0".into(),
            ));
        }
        Ok(Scalar::new(1.0 / self.magnitude, self.origin))
    }

    /// Returns the scalar with the magnitude negated.
    pub const fn negated(&self) -> Scalar {
        Scalar::new(-self.magnitude, self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_carried_through() {
        let s = Scalar::new(3.0, 7.5);
        assert_eq!(s.added(1.0).origin(), 7.5);
        assert_eq!(s.multiplied(2.0).origin(), 7.5);
        assert_eq!(s.normalized().origin(), 7.5);
        assert_eq!(s.negated().origin(), 7.5);
        assert_eq!(s.inverse().unwrap().origin(), 7.5);
    }

    #[test]
    fn test_added_scalar_keeps_left_origin() {
        let a = Scalar::new(2.0, 1.0);
        let b = Scalar::new(3.0, 9.0);
        let sum = a.added_scalar(&b);
        assert_eq!(sum.magnitude(), 5.0);
        assert_eq!(sum.origin(), 1.0);
    }

    #[test]
    fn test_multiplied_quaternion_uses_w() {
        let s = Scalar::new(2.0, 0.0);
        let q = Quaternion::new(3.0, 10.0, 10.0, 10.0);
        assert_eq!(s.multiplied_quaternion(&q).magnitude(), 6.0);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Scalar::new(5.0, 2.0).normalized().magnitude(), 1.0);
        assert_eq!(Scalar::new(-5.0, 2.0).normalized().magnitude(), 1.0);
        assert_eq!(Scalar::new(0.0, 2.0).normalized().magnitude(), 0.0);
    }

    #[test]
    fn test_inverse() {
        let s = Scalar::new(4.0, 2.0).inverse().unwrap();
        assert_eq!(s.magnitude(), 0.25);
    }

    #[test]
    fn test_inverse_zero_magnitude_fails() {
        assert!(Scalar::new(0.0, 2.0).inverse().is_err());
    }
}
