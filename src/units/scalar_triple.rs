//! Scalar triple products of three vectors.

use super::Vector;

/// The three cyclic scalar triple products of an ordered vector triple.
///
/// For vectors a, b, c the products are a·(b×c), b·(c×a) and c·(a×b);
/// all three equal the signed volume of the parallelepiped the vectors
/// span, up to rounding. They are computed once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarTriple {
    product_a: f64,
    product_b: f64,
    product_c: f64,
}

impl ScalarTriple {
    /// Computes the cyclic triple products of `(a, b, c)`.
    pub fn new(a: &Vector, b: &Vector, c: &Vector) -> Self {
        Self {
            product_a: a.dot(&b.cross(c)),
            product_b: b.dot(&c.cross(a)),
            product_c: c.dot(&a.cross(b)),
        }
    }

    /// Returns a·(b×c).
    #[inline]
    pub const fn product_a(&self) -> f64 {
        self.product_a
    }

    /// Returns b·(c×a).
    #[inline]
    pub const fn product_b(&self) -> f64 {
        self.product_b
    }

    /// Returns c·(a×b).
    #[inline]
    pub const fn product_c(&self) -> f64 {
        self.product_c
    }

    /// Returns the three products assembled into a vector.
    pub fn vector(&self) -> Vector {
        Vector::new(self.product_a, self.product_b, self.product_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_box_volume() {
        let triple = ScalarTriple::new(
            &Vector::new(1.0, 0.0, 0.0),
            &Vector::new(0.0, 1.0, 0.0),
            &Vector::new(0.0, 0.0, 1.0),
        );
        assert_eq!(triple.product_a(), 1.0);
        assert_eq!(triple.product_b(), 1.0);
        assert_eq!(triple.product_c(), 1.0);
    }

    #[test]
    fn test_cyclic_products_agree() {
        let triple = ScalarTriple::new(
            &Vector::new(1.0, 2.0, 3.0),
            &Vector::new(-2.0, 0.5, 4.0),
            &Vector::new(0.0, 1.0, -1.0),
        );
        assert!((triple.product_a() - triple.product_b()).abs() < 1e-12);
        assert!((triple.product_b() - triple.product_c()).abs() < 1e-12);
    }

    #[test]
    fn test_coplanar_vectors_vanish() {
        let triple = ScalarTriple::new(
            &Vector::new(1.0, 0.0, 0.0),
            &Vector::new(0.0, 1.0, 0.0),
            &Vector::new(1.0, 1.0, 0.0),
        );
        assert_eq!(triple.product_a(), 0.0);
    }
}
