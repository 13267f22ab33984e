//! Axis-angle rotation representation.

use serde::{Deserialize, Serialize};

use crate::{PolarizeError, Result};

/// A rotation expressed as an axis plus a rotation angle in radians.
///
/// The axis is not required to be unit length; [`AxisAngle::normalized`]
/// produces the unit-axis form. Note the asymmetry between
/// [`AxisAngle::inverse`] (reverses the axis, keeps the angle) and
/// [`AxisAngle::negated`] (reverses both).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    x: f64,
    y: f64,
    z: f64,
    angle: f64,
}

impl AxisAngle {
    /// Creates an axis-angle from axis components and an angle.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, angle: f64) -> Self {
        Self { x, y, z, angle }
    }

    /// Returns the X component of the axis.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y component of the axis.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z component of the axis.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the rotation angle in radians.
    #[inline]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns the same rotation with a unit-length axis.
    ///
    /// Fails with [`PolarizeError::ZeroMagnitude`] when the axis is the
    /// zero vector.
    pub fn normalized(&self) -> Result<AxisAngle> {
        let magnitude = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if magnitude == 0.0 {
            return Err(PolarizeError::ZeroMagnitude(
                "cannot normalize an axis-angle with a zero axis".into(),
            ));
        }
        Ok(AxisAngle::new(
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
            self.angle,
        ))
    }

    /// Returns the rotation about the reversed axis: axis negated,
    /// angle unchanged.
    pub const fn inverse(&self) -> AxisAngle {
        AxisAngle::new(-self.x, -self.y, -self.z, self.angle)
    }

    /// Returns the fully negated form: axis and angle both negated.
    /// Represents the same rotation as the original.
    pub const fn negated(&self) -> AxisAngle {
        AxisAngle::new(-self.x, -self.y, -self.z, -self.angle)
    }
}
