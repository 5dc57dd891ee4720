//! Basis angles of the oblique lattice axes.
//!
//! The lattice is spanned by two axes inclined at angles A and B. They are
//! chosen so the bounding parallelogram of an `(m, n)` lattice keeps the
//! proportions of an equilateral triangular grid:
//!
//! - A = atan((√3/2 · m) / (n − m/2))
//! - B = atan((√3/2 · n) / (m − n/2))
//!
//! When a denominator is zero (`2n == m` for A, `2m == n` for B) the axis is
//! vertical and the angle is π/2.

use std::f64::consts::FRAC_PI_2;

use lattice_common::LatticeDims;

/// Half the square root of three, the height of a unit equilateral triangle.
pub const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Inclination of the two lattice axes, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisAngles {
    /// Angle of the axis along which `i` runs
    pub a: f64,
    /// Angle of the axis along which `j` runs
    pub b: f64,
}

impl BasisAngles {
    /// Compute the basis angles for a lattice.
    ///
    /// The vertical special cases are decided by exact integer comparison
    /// before any floating point division.
    pub fn compute(dims: LatticeDims) -> Self {
        let m = f64::from(dims.m());
        let n = f64::from(dims.n());

        let a = if dims.a_is_vertical() {
            FRAC_PI_2
        } else {
            (HALF_SQRT_3 * m / (n - m / 2.0)).atan()
        };

        let b = if dims.b_is_vertical() {
            FRAC_PI_2
        } else {
            (HALF_SQRT_3 * n / (m - n / 2.0)).atan()
        };

        Self { a, b }
    }

    /// Angles in degrees, for logging.
    pub fn to_degrees(self) -> (f64, f64) {
        (self.a.to_degrees(), self.b.to_degrees())
    }
}
