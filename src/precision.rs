//! Numeric constants for angular stepping and degenerate-input checks.
//!
//! These are compile-time constants, not configuration. The radian
//! fractions bound the angle-stepping generators; the remaining values
//! govern the degenerate branches of the conversion routines.

use std::f64::consts::PI;

/// 45 degrees in radians.
pub const RADIAN_45: f64 = PI / 4.0;

/// 90 degrees in radians.
pub const RADIAN_90: f64 = PI / 2.0;

/// 180 degrees in radians.
pub const RADIAN_180: f64 = PI;

/// 270 degrees in radians.
pub const RADIAN_270: f64 = PI * 1.5;

/// 360 degrees in radians.
pub const RADIAN_360: f64 = PI * 2.0;

/// The golden ratio, (1 + sqrt(5)) / 2.
/// Spacing constant for the Fibonacci lattice.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Threshold on sqrt(1 - w^2) below which axis extraction from a
/// quaternion is degenerate (rotation angle near zero, axis arbitrary).
/// Below this the raw vector part is used as the axis instead of
/// dividing by a vanishing sine.
pub const AXIS_EPSILON: f64 = 1.0e-3;

/// Fundamental resolution for zero-magnitude checks where an exact
/// comparison against 0.0 would be too strict (e.g. the angle between
/// two vectors).
/// Value: DBL_MIN (~2.2e-308)
pub const RESOLUTION: f64 = f64::MIN_POSITIVE;
