//! Straight-line subdivision.

use log::debug;

use crate::units::Point3D;

/// Subdivides the segment from `origin` to `destination` into
/// `num_points` equal steps, returning `num_points + 1` points with
/// the endpoints included: the component-wise difference is scaled by
/// `i / num_points` and added back onto the origin.
///
/// `num_points == 0` degenerates to the single origin point.
pub fn draw_line(origin: &Point3D, destination: &Point3D, num_points: usize) -> Vec<Point3D> {
    if num_points == 0 {
        return vec![*origin];
    }

    let diff = origin.differential(destination);
    let mut points = Vec::with_capacity(num_points + 1);

    for i in 0..=num_points {
        let multiplier = i as f64 / num_points as f64;
        let adjusted = Point3D::new(
            diff.x() * multiplier,
            diff.y() * multiplier,
            diff.z() * multiplier,
        );
        points.push(origin.added(&adjusted));
    }

    debug!(
        "subdivided segment into {} points over {} steps",
        points.len(),
        num_points
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_endpoints() {
        let a = Point3D::new(2.0, 6.0, 5.0);
        let b = Point3D::new(10.0, 6.0, -15.0);
        let points = draw_line(&a, &b, 25);
        assert_eq!(points.len(), 26);
        assert_eq!(points[0], a);
        let last = points[points.len() - 1];
        assert!((last.x() - b.x()).abs() < 1e-12);
        assert!((last.y() - b.y()).abs() < 1e-12);
        assert!((last.z() - b.z()).abs() < 1e-12);
    }

    #[test]
    fn test_samples_evenly_spaced() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(4.0, 0.0, 0.0);
        let points = draw_line(&a, &b, 4);
        for (i, point) in points.iter().enumerate() {
            assert!((point.x() - i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_count_degenerates_to_origin() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let points = draw_line(&a, &Point3D::new(9.0, 9.0, 9.0), 0);
        assert_eq!(points, vec![a]);
    }
}
