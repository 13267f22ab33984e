//! 2D point on the horizontal plane.

use serde::{Deserialize, Serialize};

/// A point on the horizontal plane, addressed by `x` and `z`.
///
/// The vertical component does not exist in 2D; the axes are named to
/// line up with the horizontal axes of [`super::Point3D`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    z: f64,
}

impl Point2D {
    /// Creates a point from coordinates.
    #[inline]
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the component-wise sum with another point.
    pub const fn added(&self, other: &Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.z + other.z)
    }

    /// Returns the component-wise product with another point.
    pub const fn multiplied(&self, other: &Point2D) -> Point2D {
        Point2D::new(self.x * other.x, self.z * other.z)
    }

    /// Returns the component-wise difference `other - self`.
    pub const fn differential(&self, other: &Point2D) -> Point2D {
        Point2D::new(other.x - self.x, other.z - self.z)
    }

    /// Returns the distance to another point.
    pub fn distance(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added() {
        let p = Point2D::new(1.0, 2.0).added(&Point2D::new(3.0, 4.0));
        assert_eq!(p, Point2D::new(4.0, 6.0));
    }

    #[test]
    fn test_differential_is_other_minus_self() {
        let d = Point2D::new(1.0, 2.0).differential(&Point2D::new(4.0, 6.0));
        assert_eq!(d, Point2D::new(3.0, 4.0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point2D::new(0.0, 0.0).distance(&Point2D::new(3.0, 4.0)), 5.0);
    }
}
