//! Rolling the lattice onto a tube.
//!
//! The `(m, n)` lattice is wrapped around a cylinder so that the chiral
//! vector spanned by `(m, n)` becomes the circumference. The planar `x`
//! coordinate turns into an angle around the tube axis and the planar `y`
//! coordinate becomes the height `z` along it. `repeat` copies of the unit
//! cell are stacked along the axis.

use std::f64::consts::PI;

use lattice_common::{LatticeDims, LatticeError, LatticeResult};
use nalgebra::Point3;
use tracing::debug;

use crate::mapper::LatticeMapper;

/// Parameters of a rolled-up lattice.
#[derive(Debug, Clone, Copy)]
pub struct TubeSpec {
    mapper: LatticeMapper,
    repeat: u32,
    rest_length: f64,
}

impl TubeSpec {
    /// Create a tube with `repeat` unit cells and bond length `rest_length`.
    ///
    /// The column count `m · repeat` must fit in a `u32`.
    pub fn new(dims: LatticeDims, repeat: u32, rest_length: f64) -> LatticeResult<Self> {
        let columns = u64::from(dims.m()) * u64::from(repeat);
        if repeat == 0 || columns > u64::from(u32::MAX) {
            return Err(LatticeError::InvalidRepeat(repeat));
        }
        Ok(Self {
            mapper: LatticeMapper::new(dims),
            repeat,
            rest_length,
        })
    }

    pub fn dims(&self) -> LatticeDims {
        self.mapper.dims()
    }

    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    pub fn rest_length(&self) -> f64 {
        self.rest_length
    }

    /// Tube radius for unit bond length: `√(m² + n² − m·n) / 2π`.
    pub fn radius(&self) -> f64 {
        let m = f64::from(self.dims().m());
        let n = f64::from(self.dims().n());
        (m * m + n * n - m * n).sqrt() / (2.0 * PI)
    }

    /// Number of nodes on the tube: `m · n · repeat`.
    pub fn node_count(&self) -> usize {
        let dims = self.dims();
        dims.m() as usize * dims.n() as usize * self.repeat as usize
    }

    /// Flatten a lattice index pair into a node index, wrapping indices
    /// that fall outside the tube.
    ///
    /// Rows past `n` carry into the column index by `m`. Columns wrap
    /// modulo `m · repeat`.
    pub fn wrap_index(&self, i: i64, j: i64) -> usize {
        let m = i64::from(self.dims().m());
        let n = i64::from(self.dims().n());
        let columns = m * i64::from(self.repeat);

        // Truncating division, so negative rows are fixed up below.
        let mut j = j + m * (i / n);
        let mut i = i % n;
        if i < 0 {
            i += n;
            j -= m;
        }
        j = j.rem_euclid(columns);

        (i + n * j) as usize
    }

    /// Node positions, indexed by [`TubeSpec::wrap_index`].
    pub fn node_positions(&self) -> Vec<Point3<f64>> {
        let dims = self.dims();
        let (m, n) = (dims.m(), dims.n());
        let basis = self.mapper.basis();
        let r = self.radius();
        let length = f64::from(self.repeat) * f64::from(m);

        let mut positions = Vec::with_capacity(self.node_count());
        for j in 0..self.repeat * m {
            for i in 0..n {
                let p = self.mapper.map(i, j);
                let (mut x, mut z) = (p.x, p.y);
                // Below the axis: shift by one full tube length
                if z < 0.0 {
                    x += length * basis.b.cos();
                    z += length * basis.b.sin();
                }

                let y = r * ((x / r).sin() + 1.0);
                let x = r * ((x / r).cos() + 1.0);
                positions.push(Point3::new(x, y, z) * self.rest_length);
            }
        }

        debug!(
            dims = %dims,
            repeat = self.repeat,
            nodes = positions.len(),
            radius = r * self.rest_length,
            "Rolled lattice onto tube"
        );

        positions
    }

    /// Nearest-neighbour bonds, each reported once.
    ///
    /// Bonds whose endpoints are further apart along the axis than two
    /// bond lengths cross the open tube ends and are dropped.
    pub fn bonds(&self) -> Vec<(usize, usize)> {
        let positions = self.node_positions();
        let mut bonds = Vec::new();
        self.for_each_neighbour(&positions, &FORWARD, |here, there| {
            bonds.push((here, there))
        });
        bonds
    }

    /// Per-node neighbour lists, indexed like [`TubeSpec::node_positions`].
    ///
    /// Each node lists up to six neighbours. Nodes on the open tube ends
    /// have fewer, using the same axial cutoff as [`TubeSpec::bonds`].
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let positions = self.node_positions();
        let mut adjacency = vec![Vec::with_capacity(6); positions.len()];
        self.for_each_neighbour(&positions, &ALL, |here, there| {
            adjacency[here].push(there)
        });
        adjacency
    }

    fn for_each_neighbour(
        &self,
        positions: &[Point3<f64>],
        offsets: &[(i64, i64)],
        mut visit: impl FnMut(usize, usize),
    ) {
        let dims = self.dims();
        let n = i64::from(dims.n());
        let columns = i64::from(dims.m()) * i64::from(self.repeat);
        let cutoff = 2.0 * self.rest_length;

        for i in 0..n {
            for j in 0..columns {
                let here = self.wrap_index(i, j);
                for &(di, dj) in offsets {
                    let there = self.wrap_index(i + di, j + dj);
                    if (positions[here].z - positions[there].z).abs() < cutoff {
                        visit(here, there);
                    }
                }
            }
        }
    }
}

/// Neighbour offsets that visit each bond once.
const FORWARD: [(i64, i64); 3] = [(1, 0), (0, 1), (-1, 1)];

/// All six neighbours on the triangular lattice.
const ALL: [(i64, i64); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

#[cfg(test)]
mod tests {
    use super::*;

    fn tube(m: u32, n: u32, repeat: u32) -> TubeSpec {
        TubeSpec::new(LatticeDims::new(m, n).unwrap(), repeat, 1.0).unwrap()
    }

    #[test]
    fn test_zero_repeat_rejected() {
        let dims = LatticeDims::new(13, 7).unwrap();
        assert_eq!(
            TubeSpec::new(dims, 0, 1.0).unwrap_err(),
            LatticeError::InvalidRepeat(0)
        );
    }

    #[test]
    fn test_repeat_bounded_by_column_count() {
        let dims = LatticeDims::new(2, 1).unwrap();
        assert!(TubeSpec::new(dims, u32::MAX / 2, 1.0).is_ok());
        assert_eq!(
            TubeSpec::new(dims, u32::MAX / 2 + 1, 1.0).unwrap_err(),
            LatticeError::InvalidRepeat(u32::MAX / 2 + 1)
        );

        let dims = LatticeDims::new(lattice_common::MAX_EXTENT, 1).unwrap();
        assert!(TubeSpec::new(dims, 2, 1.0).is_ok());
        assert!(TubeSpec::new(dims, 3, 1.0).is_err());
    }

    #[test]
    fn test_wrap_index_at_column_bound() {
        let t = tube(2, 1, u32::MAX / 2);
        let last = i64::from(u32::MAX) - 2;
        assert_eq!(t.wrap_index(0, last), last as usize);
        assert_eq!(t.wrap_index(0, last + 1), 0);
        assert_eq!(t.node_count(), last as usize + 1);
    }

    #[test]
    fn test_radius() {
        // m = n = 6: √36 / 2π
        let t = tube(6, 6, 1);
        assert!((t.radius() - 6.0 / (2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_index_in_range() {
        let t = tube(13, 7, 2);
        assert_eq!(t.wrap_index(0, 0), 0);
        assert_eq!(t.wrap_index(3, 0), 3);
        assert_eq!(t.wrap_index(0, 1), 7);
        assert_eq!(t.wrap_index(6, 25), 6 + 7 * 25);
    }

    #[test]
    fn test_wrap_index_row_overflow_carries_m() {
        let t = tube(13, 7, 2);
        // (7, 0) is the same node as (0, 13)
        assert_eq!(t.wrap_index(7, 0), t.wrap_index(0, 13));
        // (-1, 0) is the same node as (6, -13) which wraps to (6, 13)
        assert_eq!(t.wrap_index(-1, 0), t.wrap_index(6, 13));
    }

    #[test]
    fn test_wrap_index_column_wraps() {
        let t = tube(13, 7, 2);
        assert_eq!(t.wrap_index(2, 26), t.wrap_index(2, 0));
        assert_eq!(t.wrap_index(2, -1), t.wrap_index(2, 25));
    }

    #[test]
    fn test_wrap_index_covers_all_nodes() {
        let t = tube(5, 3, 2);
        for i in -10..10 {
            for j in -30..30 {
                assert!(t.wrap_index(i, j) < t.node_count());
            }
        }
    }

    #[test]
    fn test_bonds_are_in_range() {
        let t = tube(6, 4, 3);
        let count = t.node_count();
        let bonds = t.bonds();
        assert!(!bonds.is_empty());
        assert!(bonds.len() <= 3 * count);
        for (a, b) in bonds {
            assert!(a < count && b < count);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_adjacency_at_most_six() {
        let t = tube(6, 4, 3);
        let adjacency = t.adjacency();
        assert_eq!(adjacency.len(), t.node_count());
        assert!(adjacency.iter().all(|neighbours| neighbours.len() <= 6));
        assert!(adjacency.iter().any(|neighbours| neighbours.len() == 6));
    }
}
