//! Coordinate geometry for triangular lattices.
//!
//! Maps lattice indices `(i, j)` onto the plotting plane under the oblique
//! basis fixed by the lattice dimensions `(m, n)`, generates the three
//! families of grid lines, and rolls the lattice onto a tube.

pub mod basis;
pub mod lines;
pub mod mapper;
pub mod tube;

pub use basis::BasisAngles;
pub use lines::{diagonal_segment, grid_segments, LineFamily, Segment};
pub use mapper::{map_with, LatticeMapper, Point};
pub use tube::TubeSpec;
