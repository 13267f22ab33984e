//! 3D Cartesian vector with a cached length.

use serde::{Deserialize, Serialize};

use super::Quaternion;
use crate::precision;
use crate::Result;

/// A vector in 3D Cartesian space.
///
/// The Euclidean norm is computed once at construction and carried in
/// the `length` field; every operation that produces a new vector
/// recomputes it from the new components. The only exception is
/// [`Vector::normalized`], which writes the exact `1.0` a fresh
/// computation would only approximate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
    length: f64,
}

impl Vector {
    /// Creates a vector from components, computing its length.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            length: (x * x + y * y + z * z).sqrt(),
        }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            length: 0.0,
        }
    }

    /// Builds a vector with a known length, bypassing the sqrt.
    /// Only normalization may use this, and only with a non-zero source.
    const fn with_length(x: f64, y: f64, z: f64, length: f64) -> Self {
        Self { x, y, z, length }
    }

    /// Returns the X component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the cached Euclidean length.
    #[inline]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Returns the squared length.
    #[inline]
    pub const fn length_squared(&self) -> f64 {
        self.length * self.length
    }

    /// Returns the component-wise sum with another vector.
    pub fn added(&self, other: &Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Returns the vector with `value` added to every component.
    pub fn added_scalar(&self, value: f64) -> Vector {
        Vector::new(self.x + value, self.y + value, self.z + value)
    }

    /// Returns the component-wise product with another vector.
    pub fn multiplied(&self, other: &Vector) -> Vector {
        Vector::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Returns the vector scaled by a factor.
    pub fn scaled(&self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Returns the vector with all components negated.
    pub fn inverse(&self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }

    /// Returns the unit vector in this direction.
    ///
    /// The zero vector normalizes to itself; this is the documented
    /// degenerate case, not an error.
    pub fn normalized(&self) -> Vector {
        if self.length == 0.0 {
            return Vector::zero();
        }
        Vector::with_length(
            self.x / self.length,
            self.y / self.length,
            self.z / self.length,
            1.0,
        )
    }

    /// Returns the dot product with another vector.
    #[inline]
    pub const fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with another vector.
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the angle to another vector (radians, 0 to PI).
    /// Zero when either vector has no direction.
    pub fn angle(&self, other: &Vector) -> f64 {
        let mags = self.length * other.length;
        if mags < precision::RESOLUTION {
            return 0.0;
        }
        (self.dot(other) / mags).clamp(-1.0, 1.0).acos()
    }

    /// Returns the distance to another vector's endpoint.
    pub fn distance(&self, other: &Vector) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Returns the squared distance to another vector's endpoint.
    pub fn distance_squared(&self, other: &Vector) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Rotates this vector by a quaternion, computing q * p * q'.
    ///
    /// The quaternion is normalized first, so any non-zero quaternion
    /// describes a pure rotation here. Fails with
    /// [`crate::PolarizeError::ZeroMagnitude`] on a zero quaternion.
    pub fn rotated(&self, quaternion: &Quaternion) -> Result<Vector> {
        let q = quaternion.normalized()?;
        let p = Quaternion::new(0.0, self.x, self.y, self.z);
        let rotated = q.multiplied(&p).multiplied(&q.conjugate());
        Ok(Vector::new(rotated.x(), rotated.y(), rotated.z()))
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        self.added(&other)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, factor: f64) -> Vector {
        self.scaled(factor)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.inverse()
    }
}

impl From<[f64; 3]> for Vector {
    fn from(a: [f64; 3]) -> Self {
        Vector::new(a[0], a[1], a[2])
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}
