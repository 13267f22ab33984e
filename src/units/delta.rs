//! Angular rotation offsets.

use serde::{Deserialize, Serialize};

/// A pair of angular offsets applied incrementally to a rotation.
///
/// Typically used for full rotations along the unit sphere, but valid
/// for any degree of rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    theta: f64,
    phi: f64,
}

impl Delta {
    /// Creates a delta from zenith and azimuth offsets in radians.
    #[inline]
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Returns the zenith offset in radians.
    #[inline]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the azimuth offset in radians.
    #[inline]
    pub const fn phi(&self) -> f64 {
        self.phi
    }
}
