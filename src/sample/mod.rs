//! Point sampling and interpolation.
//!
//! Generators that produce bounded collections of coordinate units by
//! angular stepping, deterministic lattice and curve sampling, line
//! subdivision, and numeric integration. All outputs are computed
//! eagerly and fresh on every call; nothing is cached between calls.
//!
//! Every generator validates its step before entering the loop: a
//! non-positive step would never reach the bound and is rejected as an
//! [`crate::PolarizeError::InvalidArgument`]. A step larger than the
//! angular range is not an error; it produces the minimal
//! single-iteration result.

mod helix;
mod integrate;
mod lattice;
mod line;
mod spiral;

pub use helix::Helix;
pub use integrate::{integrate, integrate_volume};
pub use lattice::fibonacci_lattice;
pub use line::draw_line;
pub use spiral::ArchimedeanSpiral;

use crate::precision;
use crate::units::{CartesianUnit, PolarUnit, Scalar, SphericalUnit, Vector};
use crate::{PolarizeError, Result};

pub(crate) fn check_step(step: f64) -> Result<()> {
    if step <= 0.0 {
        return Err(PolarizeError::InvalidArgument(format!(
            "step must be positive, got {step}"
        )));
    }
    Ok(())
}

/// Nested sweep of both spherical angles up to `bound`, emitting one
/// Cartesian unit per angle pair at the vector's length.
fn cartesian_sweep(vector: &Vector, bound: f64, step: f64) -> Result<Vec<CartesianUnit>> {
    check_step(step)?;
    let length = vector.length();
    let mut units = Vec::new();

    let mut i = 0.0;
    while i <= bound {
        let mut j = 0.0;
        while j <= bound {
            units.push(CartesianUnit::new(
                length * i.sin() * j.cos(),
                length * i.cos(),
                length * i.sin() * j.sin(),
            ));
            j += step;
        }
        i += step;
    }

    Ok(units)
}

/// Single sweep of theta up to `bound`, emitting one polar unit per
/// angle at the scalar's magnitude.
fn polar_sweep(scalar: &Scalar, bound: f64, step: f64) -> Result<Vec<PolarUnit>> {
    check_step(step)?;
    let mut units = Vec::new();

    let mut i = 0.0;
    while i <= bound {
        units.push(PolarUnit::new(scalar.magnitude(), i));
        i += step;
    }

    Ok(units)
}

/// Nested sweep of both spherical angles up to `bound`, emitting one
/// spherical unit per angle pair at the scalar's magnitude.
fn spherical_sweep(scalar: &Scalar, bound: f64, step: f64) -> Result<Vec<SphericalUnit>> {
    check_step(step)?;
    let mut units = Vec::new();

    let mut i = 0.0;
    while i <= bound {
        let mut j = 0.0;
        while j <= bound {
            units.push(SphericalUnit::new(scalar.magnitude(), i, j));
            j += step;
        }
        i += step;
    }

    Ok(units)
}

/// Cartesian units over a 45-degree cone of both angles.
pub fn cartesian_45(vector: &Vector, step: f64) -> Result<Vec<CartesianUnit>> {
    cartesian_sweep(vector, precision::RADIAN_45, step)
}

/// Cartesian units over a 90-degree cone of both angles.
pub fn cartesian_90(vector: &Vector, step: f64) -> Result<Vec<CartesianUnit>> {
    cartesian_sweep(vector, precision::RADIAN_90, step)
}

/// Cartesian units over a 180-degree shell of both angles.
pub fn cartesian_180(vector: &Vector, step: f64) -> Result<Vec<CartesianUnit>> {
    cartesian_sweep(vector, precision::RADIAN_180, step)
}

/// Cartesian units over a 270-degree shell of both angles.
pub fn cartesian_270(vector: &Vector, step: f64) -> Result<Vec<CartesianUnit>> {
    cartesian_sweep(vector, precision::RADIAN_270, step)
}

/// Cartesian units over the full sphere of both angles.
pub fn cartesian_360(vector: &Vector, step: f64) -> Result<Vec<CartesianUnit>> {
    cartesian_sweep(vector, precision::RADIAN_360, step)
}

/// Polar units over a 45-degree arc.
pub fn polar_set_45(scalar: &Scalar, step: f64) -> Result<Vec<PolarUnit>> {
    polar_sweep(scalar, precision::RADIAN_45, step)
}

/// Polar units over a 90-degree arc.
pub fn polar_set_90(scalar: &Scalar, step: f64) -> Result<Vec<PolarUnit>> {
    polar_sweep(scalar, precision::RADIAN_90, step)
}

/// Polar units over a 180-degree arc.
pub fn polar_set_180(scalar: &Scalar, step: f64) -> Result<Vec<PolarUnit>> {
    polar_sweep(scalar, precision::RADIAN_180, step)
}

/// Polar units over a 270-degree arc.
pub fn polar_set_270(scalar: &Scalar, step: f64) -> Result<Vec<PolarUnit>> {
    polar_sweep(scalar, precision::RADIAN_270, step)
}

/// Polar units over the full circle.
pub fn polar_set_360(scalar: &Scalar, step: f64) -> Result<Vec<PolarUnit>> {
    polar_sweep(scalar, precision::RADIAN_360, step)
}

/// Spherical units over a 45-degree cone of both angles.
pub fn spherical_set_45(scalar: &Scalar, step: f64) -> Result<Vec<SphericalUnit>> {
    spherical_sweep(scalar, precision::RADIAN_45, step)
}

/// Spherical units over a 90-degree cone of both angles.
pub fn spherical_set_90(scalar: &Scalar, step: f64) -> Result<Vec<SphericalUnit>> {
    spherical_sweep(scalar, precision::RADIAN_90, step)
}

/// Spherical units over a 180-degree shell of both angles.
pub fn spherical_set_180(scalar: &Scalar, step: f64) -> Result<Vec<SphericalUnit>> {
    spherical_sweep(scalar, precision::RADIAN_180, step)
}

/// Spherical units over a 270-degree shell of both angles.
pub fn spherical_set_270(scalar: &Scalar, step: f64) -> Result<Vec<SphericalUnit>> {
    spherical_sweep(scalar, precision::RADIAN_270, step)
}

/// Spherical units over the full sphere of both angles.
pub fn spherical_set_360(scalar: &Scalar, step: f64) -> Result<Vec<SphericalUnit>> {
    spherical_sweep(scalar, precision::RADIAN_360, step)
}
