//! Common types shared across the trilattice crates.

pub mod dims;
pub mod error;

pub use dims::{LatticeDims, MAX_EXTENT};
pub use error::{LatticeError, LatticeResult};
