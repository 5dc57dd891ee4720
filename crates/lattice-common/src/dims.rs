//! Lattice dimensions.

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};

/// Largest accepted extent along either axis.
///
/// Keeps `m + n` (the last diagonal index) inside `u32`.
pub const MAX_EXTENT: u32 = u32::MAX / 2;

/// The two integer extents `(m, n)` of a triangular lattice.
///
/// Both extents are in `1..=MAX_EXTENT`. Values are fixed for the lifetime
/// of a render and never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDims")]
pub struct LatticeDims {
    m: u32,
    n: u32,
}

#[derive(Deserialize)]
struct RawDims {
    m: u32,
    n: u32,
}

impl TryFrom<RawDims> for LatticeDims {
    type Error = LatticeError;

    fn try_from(raw: RawDims) -> LatticeResult<Self> {
        LatticeDims::new(raw.m, raw.n)
    }
}

impl LatticeDims {
    /// Create lattice dimensions, rejecting zero or oversized extents.
    pub fn new(m: u32, n: u32) -> LatticeResult<Self> {
        let valid = 1..=MAX_EXTENT;
        if !valid.contains(&m) || !valid.contains(&n) {
            return Err(LatticeError::InvalidDimensions { m, n });
        }
        Ok(Self { m, n })
    }

    pub fn m(&self) -> u32 {
        self.m
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    /// True when `2n == m`, where the A-axis formula has a zero denominator.
    pub fn a_is_vertical(&self) -> bool {
        2 * u64::from(self.n) == u64::from(self.m)
    }

    /// True when `2m == n`, where the B-axis formula has a zero denominator.
    pub fn b_is_vertical(&self) -> bool {
        2 * u64::from(self.m) == u64::from(self.n)
    }
}

impl std::fmt::Display for LatticeDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.m, self.n)
    }
}
