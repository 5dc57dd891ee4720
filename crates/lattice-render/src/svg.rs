//! Vector canvas for straight-line primitives.
//!
//! The canvas has a pixel size and a coordinate origin offset: the top-left
//! corner of the visible area sits at `origin` in canvas coordinates, so the
//! serialized view box is `origin.x origin.y width height`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use tracing::{debug, info};

use crate::error::RenderResult;
use crate::style::StrokeStyle;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A straight line primitive in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: StrokeStyle,
}

impl Line {
    /// Path data in the form `M x1,y1 L x2,y2`.
    pub fn path_data(&self) -> String {
        format!("M{},{} L{},{}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Accumulates line primitives and serializes them as SVG.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    origin: (f64, f64),
    lines: Vec<Line>,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32, origin: (f64, f64)) -> Self {
        Self {
            width,
            height,
            origin,
            lines: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Append a line from `(x1, y1)` to `(x2, y2)`.
    pub fn push_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &StrokeStyle) {
        self.lines.push(Line {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.clone(),
        });
    }

    fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.origin.0, self.origin.1, self.width, self.height
        )
    }

    /// Serialize the accumulated primitives into `sink`.
    pub fn write_to<W: Write>(&self, sink: W) -> RenderResult<W> {
        debug!(lines = self.lines.len(), view_box = %self.view_box(), "Serializing SVG");
        let mut writer = Writer::new_with_indent(sink, b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let width = self.width.to_string();
        let height = self.height.to_string();
        let view_box = self.view_box();
        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NS));
        root.push_attribute(("width", width.as_str()));
        root.push_attribute(("height", height.as_str()));
        root.push_attribute(("viewBox", view_box.as_str()));
        writer.write_event(Event::Start(root))?;

        for line in &self.lines {
            let d = line.path_data();
            let stroke_width = line.stroke.width_attr();
            let mut path = BytesStart::new("path");
            path.push_attribute(("d", d.as_str()));
            path.push_attribute(("stroke", line.stroke.color.as_str()));
            path.push_attribute(("stroke-width", stroke_width.as_str()));
            writer.write_event(Event::Empty(path))?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;

        Ok(writer.into_inner())
    }

    /// Serialize to an in-memory SVG document.
    pub fn to_svg_string(&self) -> RenderResult<String> {
        let bytes = self.write_to(Vec::new())?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Serialize to a file, replacing it if it exists.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut sink = self.write_to(BufWriter::new(file))?;
        sink.flush()?;

        info!(
            path = %path.display(),
            lines = self.lines.len(),
            width = self.width,
            height = self.height,
            "Saved SVG"
        );
        Ok(())
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new(512, 512, (-40.0, -250.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    #[test]
    fn test_empty_canvas() {
        let canvas = SvgCanvas::new(100, 50, (-10.0, -20.0));
        let svg = canvas.to_svg_string().unwrap();

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("height=\"50\""));
        assert!(svg.contains("viewBox=\"-10 -20 100 50\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_push_line() {
        let mut canvas = SvgCanvas::new(100, 100, (0.0, 0.0));
        canvas.push_line(0.0, 0.0, 10.5, -20.0, &StrokeStyle::default());
        assert_eq!(canvas.lines().len(), 1);

        let svg = canvas.to_svg_string().unwrap();
        assert!(svg.contains("d=\"M0,0 L10.5,-20\""));
        assert!(svg.contains("stroke=\"black\""));
        assert!(svg.contains("stroke-width=\"1\""));
    }

    #[test]
    fn test_stroke_color_is_escaped() {
        let mut canvas = SvgCanvas::new(10, 10, (0.0, 0.0));
        canvas.push_line(0.0, 0.0, 1.0, 1.0, &StrokeStyle::new("a\"b", 1.0));
        let svg = canvas.to_svg_string().unwrap();
        assert!(svg.contains("stroke=\"a&quot;b\""));
    }

    /// Accepts the XML declaration, then fails like a full disk.
    #[derive(Debug)]
    struct FailingSink {
        budget: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.len() > self.budget {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "no space left on device",
                ));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_mid_document_is_io() {
        let mut canvas = SvgCanvas::new(10, 10, (0.0, 0.0));
        canvas.push_line(0.0, 0.0, 1.0, 1.0, &StrokeStyle::default());

        let err = canvas.write_to(FailingSink { budget: 64 }).unwrap_err();
        match err {
            RenderError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::Other),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_default_canvas() {
        let canvas = SvgCanvas::default();
        assert_eq!((canvas.width(), canvas.height()), (512, 512));
        assert_eq!(canvas.origin(), (-40.0, -250.0));
    }
}
