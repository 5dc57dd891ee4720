//! Stroke style for grid lines.

use serde::{Deserialize, Serialize};

use crate::error::RenderResult;

/// Stroke applied to a line primitive.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StrokeStyle {
    /// Any SVG paint value, e.g. `black` or `#336699`
    pub color: String,
    /// Stroke width in canvas units
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_width() -> f32 {
    1.0
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            width: default_width(),
        }
    }
}

impl StrokeStyle {
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// Parse a stroke style from JSON, e.g. `{"color": "#ff0000", "width": 2}`.
    pub fn from_json(json_str: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Width formatted for an SVG attribute.
    pub fn width_attr(&self) -> String {
        self.width.to_string()
    }
}
