//! Midpoint/trapezoid numeric quadrature.

use crate::units::Point3D;
use crate::{PolarizeError, Result};

fn check_sub_intervals(sub_intervals: u32) -> Result<()> {
    if sub_intervals == 0 {
        return Err(PolarizeError::InvalidArgument(
            "sub_intervals must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Integrates `function` over `[lower, upper]` with the composite
/// trapezoidal rule over `sub_intervals` equal steps.
pub fn integrate<F>(lower: f64, upper: f64, sub_intervals: u32, function: F) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    check_sub_intervals(sub_intervals)?;

    let dx = (upper - lower) / f64::from(sub_intervals);
    let mut sum = 0.5 * (function(lower) + function(upper));
    for i in 1..sub_intervals {
        sum += function(lower + f64::from(i) * dx);
    }

    Ok(dx * sum)
}

/// Integrates a scalar field over the axis-aligned box spanned by
/// `origin` and `destination` with the composite trapezoidal rule,
/// `sub_intervals` steps per axis.
///
/// Samples on a face of the box carry half weight per bounding axis:
/// faces 1/2, edges 1/4, corners 1/8.
pub fn integrate_volume<F>(
    origin: &Point3D,
    destination: &Point3D,
    sub_intervals: u32,
    function: F,
) -> Result<f64>
where
    F: Fn(f64, f64, f64) -> f64,
{
    check_sub_intervals(sub_intervals)?;

    let n = f64::from(sub_intervals);
    let dx = (destination.x() - origin.x()) / n;
    let dy = (destination.y() - origin.y()) / n;
    let dz = (destination.z() - origin.z()) / n;

    let boundary_weight = |index: u32| {
        if index == 0 || index == sub_intervals {
            0.5
        } else {
            1.0
        }
    };

    let mut integral = 0.0;
    for i in 0..=sub_intervals {
        let x = origin.x() + f64::from(i) * dx;
        let wx = boundary_weight(i);
        for j in 0..=sub_intervals {
            let y = origin.y() + f64::from(j) * dy;
            let wy = boundary_weight(j);
            for k in 0..=sub_intervals {
                let z = origin.z() + f64::from(k) * dz;
                let wz = boundary_weight(k);
                integral += wx * wy * wz * function(x, y, z);
            }
        }
    }

    Ok(integral * dx * dy * dz)
}
