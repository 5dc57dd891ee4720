//! SVG output for triangular lattice grids.
//!
//! - `svg`: canvas that collects line primitives and serializes them
//! - `draw`: scales lattice segments onto a canvas
//! - `raster`: PNG previews of the emitted SVG

pub mod draw;
pub mod error;
pub mod raster;
pub mod style;
pub mod svg;

pub use draw::{draw_lattice, DrawOptions};
pub use error::{RenderError, RenderResult};
pub use raster::{rasterize, rasterize_png};
pub use style::StrokeStyle;
pub use svg::{Line, SvgCanvas};
