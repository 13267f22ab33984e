//! Fibonacci lattice on the unit sphere.

use log::debug;

use super::check_step;
use crate::precision;
use crate::units::Point3D;
use crate::{PolarizeError, Result};

/// Populates a deterministic, evenly-distributed set of directions on
/// the unit sphere, translated by `origin`.
///
/// For each `i` from 0 to `radius` in increments of `step`:
/// `theta = 2*pi * i / GOLDEN_RATIO` and
/// `phi = acos(1 - 2*(i + 0.5) / radius)`, converted to a unit
/// Cartesian direction. The acos argument is clamped to `[-1, 1]` so
/// the final sample at `i = radius` stays on the sphere instead of
/// going out of the function's domain.
///
/// `radius` must be non-zero (it divides the phi argument) and `step`
/// must be positive; both are rejected before the loop.
pub fn fibonacci_lattice(origin: &Point3D, radius: u32, step: f64) -> Result<Vec<Point3D>> {
    if radius == 0 {
        return Err(PolarizeError::InvalidArgument(
            "lattice radius must be non-zero".into(),
        ));
    }
    check_step(step)?;

    let r = f64::from(radius);
    let mut points = Vec::new();

    let mut i = 0.0;
    while i <= r {
        let theta = precision::RADIAN_360 * i / precision::GOLDEN_RATIO;
        let phi = (1.0 - 2.0 * (i + 0.5) / r).clamp(-1.0, 1.0).acos();

        let direction = Point3D::new(
            theta.cos() * phi.sin(),
            phi.cos(),
            theta.sin() * phi.sin(),
        );
        points.push(origin.added(&direction));

        i += step;
    }

    debug!("fibonacci lattice produced {} points", points.len());
    Ok(points)
}
