//! 3D point.

use serde::{Deserialize, Serialize};

use super::Vector;

/// A point in 3D Cartesian space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3D {
    /// Creates a point from coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the component-wise sum with another point.
    pub const fn added(&self, other: &Point3D) -> Point3D {
        Point3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Returns the component-wise product with another point.
    pub const fn multiplied(&self, other: &Point3D) -> Point3D {
        Point3D::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Returns the component-wise difference `other - self`.
    pub const fn differential(&self, other: &Point3D) -> Point3D {
        Point3D::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Returns the vector from this point to another.
    pub fn distance_vector(&self, other: &Point3D) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Returns the distance to another point.
    pub fn distance(&self, other: &Point3D) -> f64 {
        self.distance_vector(other).length()
    }

    /// Returns the point translated by a vector.
    pub fn moved(&self, vector: &Vector) -> Point3D {
        Point3D::new(self.x + vector.x(), self.y + vector.y(), self.z + vector.z())
    }
}
