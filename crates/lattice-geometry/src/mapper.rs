//! Lattice index to plane coordinate mapping.
//!
//! ```text
//! x = −(i − n)·cos(A) + j·cos(B)
//! y =  (i − n)·sin(A) + j·sin(B)
//! ```
//!
//! The `n` offset puts the origin at row `n`, so row, column and diagonal
//! lines all share one mapping without per-family corrections.

use lattice_common::LatticeDims;
use num_traits::AsPrimitive;
use tracing::debug;

use crate::basis::BasisAngles;

/// A point on the plotting plane. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Scale by `k` and flip the y axis, giving screen coordinates where
    /// y grows downward.
    pub fn to_screen(&self, k: f64) -> (f64, f64) {
        (k * self.x, -k * self.y)
    }
}

/// Map `(i, j)` under explicit basis angles and row offset `n`.
///
/// Pure function; indices are not range-checked.
pub fn map_with(i: f64, j: f64, n: f64, basis: BasisAngles) -> Point {
    let di = i - n;
    Point {
        x: -di * basis.a.cos() + j * basis.b.cos(),
        y: di * basis.a.sin() + j * basis.b.sin(),
    }
}

/// Coordinate mapper for one lattice.
///
/// Basis angles are computed once on construction and never change.
#[derive(Debug, Clone, Copy)]
pub struct LatticeMapper {
    dims: LatticeDims,
    basis: BasisAngles,
}

impl LatticeMapper {
    pub fn new(dims: LatticeDims) -> Self {
        let basis = BasisAngles::compute(dims);
        let (a_deg, b_deg) = basis.to_degrees();
        debug!(
            m = dims.m(),
            n = dims.n(),
            a = basis.a,
            b = basis.b,
            a_deg,
            b_deg,
            "Computed lattice basis angles"
        );
        Self { dims, basis }
    }

    pub fn dims(&self) -> LatticeDims {
        self.dims
    }

    pub fn basis(&self) -> BasisAngles {
        self.basis
    }

    /// Map a lattice index pair to the plane.
    ///
    /// Accepts integer or real indices.
    pub fn map<I, J>(&self, i: I, j: J) -> Point
    where
        I: AsPrimitive<f64>,
        J: AsPrimitive<f64>,
    {
        map_with(i.as_(), j.as_(), f64::from(self.dims.n()), self.basis)
    }
}
