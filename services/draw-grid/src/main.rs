//! Triangular lattice figure generator.
//!
//! Computes the grid lines of an (m, n) triangular lattice and writes them
//! to an SVG file, optionally with a PNG preview.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lattice_geometry::LatticeMapper;
use lattice_render::{draw_lattice, rasterize_png};
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

use config::Args;

/// What a run produced.
#[derive(Debug)]
struct RunSummary {
    lines: usize,
    svg: PathBuf,
    png: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let builder = FmtSubscriber::builder()
        .with_max_level(args.level())
        .with_writer(std::io::stderr);
    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    info!(m = args.m, n = args.n, scale = args.scale, "Drawing lattice");

    let summary = run(&args)?;

    info!(
        lines = summary.lines,
        svg = %summary.svg.display(),
        png = ?summary.png,
        "Done"
    );
    Ok(())
}

/// Draw the lattice described by `args` and write the output files.
fn run(args: &Args) -> Result<RunSummary> {
    let dims = args.dims().context("Invalid lattice dimensions")?;
    let mapper = LatticeMapper::new(dims);
    let options = args.draw_options().context("Invalid stroke style")?;
    debug!(options = %serde_json::to_string(&options)?, "Draw options");

    let canvas = draw_lattice(&mapper, &options);
    canvas
        .save(&args.output)
        .with_context(|| format!("Failed to write SVG to {}", args.output.display()))?;

    if let Some(png_path) = &args.png {
        let svg = canvas.to_svg_string()?;
        let png = rasterize_png(&svg, options.width, options.height)
            .context("Failed to rasterize preview")?;
        std::fs::write(png_path, png)
            .with_context(|| format!("Failed to write PNG to {}", png_path.display()))?;
        info!(path = %png_path.display(), "Saved PNG preview");
    }

    Ok(RunSummary {
        lines: canvas.lines().len(),
        svg: args.output.clone(),
        png: args.png.clone(),
    })
}
