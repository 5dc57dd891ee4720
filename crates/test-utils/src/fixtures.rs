//! Reference lattice dimensions used across the test suite.
//!
//! Plain `(m, n)` pairs so this crate stays free of workspace dependencies.

/// The lattice drawn by default: m = 13, n = 7.
pub const DEFAULT_LATTICE: (u32, u32) = (13, 7);

/// Default scale factor from lattice units to canvas pixels.
pub const DEFAULT_SCALE: f64 = 35.0;

/// `2n == m`: the A axis is vertical.
pub const A_VERTICAL: (u32, u32) = (8, 4);

/// `2m == n`: the B axis is vertical.
pub const B_VERTICAL: (u32, u32) = (4, 8);

/// `m == n`: both axes at 60°.
pub const EQUAL: (u32, u32) = (5, 5);

/// Smallest lattice.
pub const UNIT: (u32, u32) = (1, 1);

/// Lattices where neither special case applies.
pub const GENERAL_LATTICES: &[(u32, u32)] = &[
    (1, 1),
    (1, 3),
    (3, 1),
    (2, 3),
    (5, 5),
    (6, 4),
    (10, 3),
    (13, 7),
    (7, 13),
    (20, 9),
    (100, 51),
];

/// Row, column and diagonal line counts for `(m, n)`.
pub fn expected_line_counts((m, n): (u32, u32)) -> (usize, usize, usize) {
    ((n + 1) as usize, (m + 1) as usize, (m + n + 1) as usize)
}
