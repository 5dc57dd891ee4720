//! Command line and environment configuration.
//!
//! Every setting has a default matching the reference figure, so running
//! with no arguments draws the 13 × 7 lattice into `grid_3.svg`.

use std::path::PathBuf;

use clap::Parser;
use lattice_common::{LatticeDims, LatticeResult};
use lattice_render::{DrawOptions, RenderResult, StrokeStyle};
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "draw-grid")]
#[command(about = "Draw a triangular (m, n) lattice as an SVG figure")]
pub struct Args {
    /// Lattice extent along the column axis
    #[arg(short = 'm', long = "lattice-m", env = "LATTICE_M", default_value_t = 13)]
    pub m: u32,

    /// Lattice extent along the row axis
    #[arg(short = 'n', long = "lattice-n", env = "LATTICE_N", default_value_t = 7)]
    pub n: u32,

    /// Lattice units to canvas pixels
    #[arg(short = 'k', long = "scale", env = "LATTICE_SCALE", default_value_t = 35.0)]
    pub scale: f64,

    /// SVG output path
    #[arg(short, long, env = "LATTICE_OUTPUT", default_value = "grid_3.svg")]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Canvas x coordinate of the top-left corner
    #[arg(long, default_value_t = -40.0, allow_hyphen_values = true)]
    pub origin_x: f64,

    /// Canvas y coordinate of the top-left corner
    #[arg(long, default_value_t = -250.0, allow_hyphen_values = true)]
    pub origin_y: f64,

    /// Stroke color (any SVG paint value)
    #[arg(long, default_value = "black")]
    pub stroke: String,

    /// Stroke width in canvas units
    #[arg(long, default_value_t = 1.0)]
    pub stroke_width: f32,

    /// Stroke as JSON, e.g. '{"color": "#336699", "width": 2}'.
    /// Overrides --stroke and --stroke-width.
    #[arg(long, env = "LATTICE_STROKE_STYLE")]
    pub stroke_style: Option<String>,

    /// Also write a PNG preview to this path
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    pub fn dims(&self) -> LatticeResult<LatticeDims> {
        LatticeDims::new(self.m, self.n)
    }

    pub fn stroke(&self) -> RenderResult<StrokeStyle> {
        match &self.stroke_style {
            Some(json) => StrokeStyle::from_json(json),
            None => Ok(StrokeStyle::new(self.stroke.clone(), self.stroke_width)),
        }
    }

    pub fn draw_options(&self) -> RenderResult<DrawOptions> {
        Ok(DrawOptions {
            width: self.width,
            height: self.height,
            origin: (self.origin_x, self.origin_y),
            scale: self.scale,
            stroke: self.stroke()?,
        })
    }

    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_render::RenderError;

    #[test]
    fn test_defaults_match_reference_figure() {
        let args = Args::try_parse_from(["draw-grid"]).unwrap();
        assert_eq!((args.m, args.n), (13, 7));
        assert_eq!(args.output, PathBuf::from("grid_3.svg"));
        assert!(args.png.is_none());
        assert_eq!(args.draw_options().unwrap(), DrawOptions::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "draw-grid",
            "-m",
            "8",
            "-n",
            "4",
            "-k",
            "20",
            "--origin-x",
            "-10",
            "--stroke",
            "#ff0000",
            "-o",
            "out.svg",
        ])
        .unwrap();

        assert_eq!(args.dims().unwrap(), LatticeDims::new(8, 4).unwrap());
        let options = args.draw_options().unwrap();
        assert_eq!(options.scale, 20.0);
        assert_eq!(options.origin, (-10.0, -250.0));
        assert_eq!(options.stroke.color, "#ff0000");
        assert_eq!(args.output, PathBuf::from("out.svg"));
    }

    #[test]
    fn test_stroke_style_json() {
        let args = Args::try_parse_from([
            "draw-grid",
            "--stroke",
            "red",
            "--stroke-style",
            r##"{"color": "#336699", "width": 2.5}"##,
        ])
        .unwrap();
        assert_eq!(args.stroke().unwrap(), StrokeStyle::new("#336699", 2.5));

        let args =
            Args::try_parse_from(["draw-grid", "--stroke-style", r#"{"color": "blue"}"#]).unwrap();
        assert_eq!(args.draw_options().unwrap().stroke, StrokeStyle::new("blue", 1.0));
    }

    #[test]
    fn test_stroke_style_rejects_bad_json() {
        let args = Args::try_parse_from(["draw-grid", "--stroke-style", "{\"width\": 2}"]).unwrap();
        assert!(matches!(args.stroke(), Err(RenderError::Style(_))));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let args = Args::try_parse_from(["draw-grid", "-m", "0"]).unwrap();
        assert!(args.dims().is_err());
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["draw-grid", "--log-level", "DEBUG"]).unwrap();
        assert_eq!(args.level(), Level::DEBUG);

        let args = Args::try_parse_from(["draw-grid", "--log-level", "verbose"]).unwrap();
        assert_eq!(args.level(), Level::INFO);
    }
}
