//! Archimedean spiral sampling.

use super::check_step;
use crate::units::Point2D;
use crate::Result;

/// A planar spiral whose radius is a linear function of its sweep:
/// `radius = origin + step * theta`.
///
/// Sampling emits one point per angular increment of `step` from
/// `origin` up to `theta`, offset by a caller-provided start point,
/// with the start point itself first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchimedeanSpiral {
    origin: f64,
    step: f64,
    theta: f64,
    radius: f64,
}

impl ArchimedeanSpiral {
    /// Creates a spiral from a starting angle, an angular step, and a
    /// total sweep. Fails when the step is not positive.
    pub fn new(origin: f64, step: f64, theta: f64) -> Result<Self> {
        check_step(step)?;
        Ok(Self {
            origin,
            step,
            theta,
            radius: origin + step * theta,
        })
    }

    /// Returns the starting angle.
    #[inline]
    pub const fn origin(&self) -> f64 {
        self.origin
    }

    /// Returns the angular step.
    #[inline]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Returns the total sweep angle.
    #[inline]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the sampling radius, `origin + step * theta`.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Samples the spiral, offset by `start`. The start point leads
    /// the result; a sweep that never reaches `theta` yields only the
    /// start point.
    pub fn points(&self, start: &Point2D) -> Vec<Point2D> {
        let mut points = vec![*start];

        let mut i = self.origin;
        while i < self.theta {
            points.push(Point2D::new(
                self.radius * i.cos() + start.x(),
                self.radius * i.sin() + start.z(),
            ));
            i += self.step;
        }

        points
    }
}
