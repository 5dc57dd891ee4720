//! Grid line generation.
//!
//! The triangular grid is outlined by three families of straight lines:
//! - Rows: constant `i`, from `(i, 0)` to `(i, m)`, for `i` in `0..=n`
//! - Columns: constant `j`, from `(0, j)` to `(n, j)`, for `j` in `0..=m`
//! - Diagonals: constant `i + j = k`, clipped to the lattice boundary,
//!   for `k` in `0..=m+n`

use tracing::debug;

use crate::mapper::{LatticeMapper, Point};

/// Which family a grid line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineFamily {
    Row,
    Column,
    Diagonal,
}

impl LineFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineFamily::Row => "row",
            LineFamily::Column => "column",
            LineFamily::Diagonal => "diagonal",
        }
    }
}

/// A grid line segment in plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub family: LineFamily,
    /// Row, column or diagonal index within the family
    pub index: u32,
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// True when both endpoints coincide (within floating point noise).
    pub fn is_degenerate(&self) -> bool {
        self.length() < 1e-9
    }
}

/// Row lines, one per `i` in `0..=n`.
pub fn row_segments(mapper: &LatticeMapper) -> Vec<Segment> {
    let (m, n) = (mapper.dims().m(), mapper.dims().n());
    (0..=n)
        .map(|i| Segment {
            family: LineFamily::Row,
            index: i,
            start: mapper.map(i, 0),
            end: mapper.map(i, m),
        })
        .collect()
}

/// Column lines, one per `j` in `0..=m`.
pub fn column_segments(mapper: &LatticeMapper) -> Vec<Segment> {
    let (m, n) = (mapper.dims().m(), mapper.dims().n());
    (0..=m)
        .map(|j| Segment {
            family: LineFamily::Column,
            index: j,
            start: mapper.map(0, j),
            end: mapper.map(n, j),
        })
        .collect()
}

/// Diagonal `i + j = k`, clipped to the lattice boundary.
///
/// Starts on row `n` (or column 0 while `k < n`) and ends on row 0 (or
/// column `m` once `k >= m`). `k` must be in `0..=m+n`.
pub fn diagonal_segment(mapper: &LatticeMapper, k: u32) -> Segment {
    let (m, n) = (mapper.dims().m(), mapper.dims().n());
    debug_assert!(u64::from(k) <= u64::from(m) + u64::from(n));

    let start = if k < n {
        mapper.map(k, 0)
    } else {
        mapper.map(n, k - n)
    };
    let end = if k < m {
        mapper.map(0, k)
    } else {
        mapper.map(k - m, m)
    };
    Segment {
        family: LineFamily::Diagonal,
        index: k,
        start,
        end,
    }
}

/// Diagonal lines, one per `k` in `0..=m+n`.
///
/// The first and last diagonals touch the lattice only at a corner and
/// come out zero-length.
pub fn diagonal_segments(mapper: &LatticeMapper) -> Vec<Segment> {
    let (m, n) = (mapper.dims().m(), mapper.dims().n());
    // Bounded by MAX_EXTENT, so the sum stays inside u32
    (0..=m + n).map(|k| diagonal_segment(mapper, k)).collect()
}

/// All grid lines: rows, then columns, then diagonals.
pub fn grid_segments(mapper: &LatticeMapper) -> Vec<Segment> {
    let rows = row_segments(mapper);
    let columns = column_segments(mapper);
    let diagonals = diagonal_segments(mapper);

    debug!(
        rows = rows.len(),
        columns = columns.len(),
        diagonals = diagonals.len(),
        "Generated lattice grid lines"
    );

    let mut segments = Vec::with_capacity(rows.len() + columns.len() + diagonals.len());
    segments.extend(rows);
    segments.extend(columns);
    segments.extend(diagonals);
    segments
}
