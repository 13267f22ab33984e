//! Paired 3D/2D Cartesian point.

use serde::{Deserialize, Serialize};

use super::{Point2D, Point3D};

/// A 3D point paired with its projection onto the horizontal plane.
///
/// Both points are built from the same raw coordinates, so the 2D
/// point always shares `x` and `z` with the 3D point. Constructing the
/// pair from anything but a single coordinate triple would let the two
/// views drift apart, so that is the only constructor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Point3D", into = "Point3D")]
pub struct CartesianUnit {
    point3d: Point3D,
    point2d: Point2D,
}

impl CartesianUnit {
    /// Creates the pair from raw coordinates. `y` only exists in the
    /// 3D view.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            point3d: Point3D::new(x, y, z),
            point2d: Point2D::new(x, z),
        }
    }

    /// Returns the 3D point.
    #[inline]
    pub const fn point3d(&self) -> &Point3D {
        &self.point3d
    }

    /// Returns the 2D horizontal-plane point.
    #[inline]
    pub const fn point2d(&self) -> &Point2D {
        &self.point2d
    }

    /// Returns the shared X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.point3d.x()
    }

    /// Returns the Y coordinate of the 3D view.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.point3d.y()
    }

    /// Returns the shared Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.point3d.z()
    }
}

impl From<Point3D> for CartesianUnit {
    fn from(p: Point3D) -> Self {
        CartesianUnit::new(p.x(), p.y(), p.z())
    }
}

impl From<CartesianUnit> for Point3D {
    fn from(unit: CartesianUnit) -> Self {
        unit.point3d
    }
}
