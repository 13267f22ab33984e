//! Helix sampling.

use super::check_step;
use crate::units::Point3D;
use crate::Result;

/// A circular helix: constant radius in the horizontal plane, linear
/// advance along the third axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Helix {
    radius: f64,
    distance: f64,
}

impl Helix {
    /// Creates a helix from its radius and the advance per radian.
    #[inline]
    pub const fn new(radius: f64, distance: f64) -> Self {
        Self { radius, distance }
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the advance per radian.
    #[inline]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Evaluates the helix at parameter `pos` (radians).
    pub fn point_at(&self, pos: f64) -> Point3D {
        Point3D::new(
            self.radius * pos.cos(),
            self.radius * pos.sin(),
            self.distance * pos,
        )
    }

    /// Samples the helix from `from` to `to` inclusive in increments
    /// of `step`. Fails when the step is not positive.
    pub fn points(&self, from: f64, to: f64, step: f64) -> Result<Vec<Point3D>> {
        check_step(step)?;
        let mut points = Vec::new();

        let mut pos = from;
        while pos <= to {
            points.push(self.point_at(pos));
            pos += step;
        }

        Ok(points)
    }
}
