//! Rotation quaternion.

use serde::{Deserialize, Serialize};

use crate::{PolarizeError, Result};

/// A quaternion `w + xi + yj + zk`.
///
/// Represents a rotation, or a pure 3-vector embedded with `w = 0` for
/// the rotation sandwich product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Quaternion {
    /// Creates a quaternion from components.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation (1, 0, 0, 0).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Returns the scalar part.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Returns the X component of the vector part.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y component of the vector part.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z component of the vector part.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the quaternion with `value` added to the scalar part.
    /// The vector part is untouched.
    pub const fn added_scalar(&self, value: f64) -> Quaternion {
        Quaternion::new(self.w + value, self.x, self.y, self.z)
    }

    /// Returns the component-wise sum with another quaternion.
    pub const fn added(&self, other: &Quaternion) -> Quaternion {
        Quaternion::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }

    /// Returns the quaternion scaled by a factor.
    pub const fn scaled(&self, factor: f64) -> Quaternion {
        Quaternion::new(
            self.w * factor,
            self.x * factor,
            self.y * factor,
            self.z * factor,
        )
    }

    /// Returns the Hamilton product `self * other`.
    ///
    /// Not commutative: the order matters for composed rotations.
    pub fn multiplied(&self, other: &Quaternion) -> Quaternion {
        let (w1, x1, y1, z1) = (self.w, self.x, self.y, self.z);
        let (w2, x2, y2, z2) = (other.w, other.x, other.y, other.z);

        Quaternion::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 + y1 * w2 + z1 * x2 - x1 * z2,
            w1 * z2 + z1 * w2 + x1 * y2 - y1 * x2,
        )
    }

    /// Returns the unit quaternion in this direction.
    ///
    /// Fails with [`PolarizeError::ZeroMagnitude`] when the magnitude
    /// is zero; there is no meaningful direction to preserve.
    pub fn normalized(&self) -> Result<Quaternion> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(PolarizeError::ZeroMagnitude(
                "cannot normalize a zero quaternion".into(),
            ));
        }
        Ok(Quaternion::new(
            self.w / magnitude,
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
        ))
    }

    /// Returns the multiplicative inverse, conjugate / magnitude^2.
    ///
    /// Fails with [`PolarizeError::ZeroMagnitude`] when the magnitude
    /// is zero.
    pub fn inverse(&self) -> Result<Quaternion> {
        let magnitude_squared = self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z;
        if magnitude_squared == 0.0 {
            return Err(PolarizeError::ZeroMagnitude(
                "cannot invert a zero quaternion".into(),
            ));
        }
        Ok(Quaternion::new(
            self.w / magnitude_squared,
            -self.x / magnitude_squared,
            -self.y / magnitude_squared,
            -self.z / magnitude_squared,
        ))
    }

    /// Returns the conjugate: vector part negated.
    pub const fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the magnitude, sqrt(w^2 + x^2 + y^2 + z^2).
    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}
