//! Drawing lattice grid lines onto a canvas.

use lattice_geometry::{grid_segments, LatticeMapper};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::style::StrokeStyle;
use crate::svg::SvgCanvas;

/// Canvas geometry and stroke for one lattice drawing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DrawOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Canvas coordinate at the top-left corner
    pub origin: (f64, f64),
    /// Lattice units to canvas units
    pub scale: f64,
    pub stroke: StrokeStyle,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            origin: (-40.0, -250.0),
            scale: 35.0,
            stroke: StrokeStyle::default(),
        }
    }
}

/// Draw every row, column and diagonal line of the lattice.
///
/// Endpoints are scaled by `options.scale` and the y axis is flipped, since
/// the lattice y grows upward and canvas y grows downward.
pub fn draw_lattice(mapper: &LatticeMapper, options: &DrawOptions) -> SvgCanvas {
    let mut canvas = SvgCanvas::new(options.width, options.height, options.origin);

    for segment in grid_segments(mapper) {
        let (x1, y1) = segment.start.to_screen(options.scale);
        let (x2, y2) = segment.end.to_screen(options.scale);
        canvas.push_line(x1, y1, x2, y2, &options.stroke);
    }

    debug!(
        dims = %mapper.dims(),
        lines = canvas.lines().len(),
        scale = options.scale,
        "Drew lattice grid"
    );

    canvas
}
