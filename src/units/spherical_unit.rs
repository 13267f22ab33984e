//! Spherical coordinate unit.

use serde::{Deserialize, Serialize};

/// A point in 3D space in spherical form.
///
/// `theta` is the zenith angle, measured from the vertical axis;
/// `phi` is the azimuth, measured in the horizontal plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SphericalUnit {
    radius: f64,
    theta: f64,
    phi: f64,
}

impl SphericalUnit {
    /// Creates a spherical unit from a radius and angles in radians.
    #[inline]
    pub const fn new(radius: f64, theta: f64, phi: f64) -> Self {
        Self { radius, theta, phi }
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the zenith angle in radians.
    #[inline]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the azimuth angle in radians.
    #[inline]
    pub const fn phi(&self) -> f64 {
        self.phi
    }
}
