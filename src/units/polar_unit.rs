//! Polar coordinate unit.

use serde::{Deserialize, Serialize};

/// A point on the plane in polar form: a radius and the angle theta
/// from the reference axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarUnit {
    radius: f64,
    theta: f64,
}

impl PolarUnit {
    /// Creates a polar unit from a radius and an angle in radians.
    #[inline]
    pub const fn new(radius: f64, theta: f64) -> Self {
        Self { radius, theta }
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the angle theta in radians.
    #[inline]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the side adjacent to theta in the right triangle this
    /// unit spans: `radius * cos(theta)`.
    pub fn adjacent(&self) -> f64 {
        self.radius * self.theta.cos()
    }

    /// Returns the side opposite theta: `radius * sin(theta)`.
    pub fn opposite(&self) -> f64 {
        self.radius * self.theta.sin()
    }
}
