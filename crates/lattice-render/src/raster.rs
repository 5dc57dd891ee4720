//! PNG previews of a serialized SVG, rendered with resvg.

use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Rasterize an SVG document onto a white `width × height` pixmap.
///
/// The document is scaled to fill the pixmap.
pub fn rasterize(svg: &str, width: u32, height: u32) -> RenderResult<tiny_skia::Pixmap> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        RenderError::Raster(format!("invalid pixmap size {}x{}", width, height))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let size = tree.size();
    let scale_x = width as f32 / size.width();
    let scale_y = height as f32 / size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    debug!(
        width,
        height,
        svg_width = size.width(),
        svg_height = size.height(),
        "Rasterized SVG"
    );

    Ok(pixmap)
}

/// Rasterize an SVG document and encode it as PNG.
pub fn rasterize_png(svg: &str, width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let pixmap = rasterize(svg, width, height)?;
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Raster(e.to_string()))
}
