//! Shared test utilities for the trilattice workspace.
//!
//! - Floating point comparison macros for angles and plane coordinates
//! - Reference lattice dimensions
//! - Scratch directories for render output
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod output;

pub use fixtures::*;
pub use output::*;

/// Default tolerance for comparing mapped coordinates.
pub const COORD_EPSILON: f64 = 1e-9;

/// Assert two scalars are equal within `epsilon`.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(std::f64::consts::FRAC_PI_3.tan(), 3f64.sqrt(), 1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, $crate::COORD_EPSILON)
    };
}

/// Assert two `(x, y)` pairs are equal component-wise within `epsilon`.
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// let p = mapper.map(7, 0);
/// assert_coords_approx_eq!((p.x, p.y), (0.0, 0.0), 1e-12);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr)) => {
        $crate::assert_coords_approx_eq!(($x1, $y1), ($x2, $y2), $crate::COORD_EPSILON)
    };
}
