//! Rendering errors.

use std::io;
use std::sync::Arc;

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize SVG: {0}")]
    Xml(quick_xml::Error),

    #[error("Serialized SVG is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Rasterization failed: {0}")]
    Raster(String),

    #[error("Invalid style: {0}")]
    Style(#[from] serde_json::Error),
}

/// I/O failures surfacing through the XML writer are reported as `Io`.
impl From<quick_xml::Error> for RenderError {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(shared) => RenderError::Io(
                Arc::try_unwrap(shared).unwrap_or_else(|e| io::Error::new(e.kind(), e.to_string())),
            ),
            other => RenderError::Xml(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_io_error_becomes_io() {
        let err = quick_xml::Error::Io(Arc::new(io::Error::new(
            io::ErrorKind::WriteZero,
            "disk full",
        )));
        match RenderError::from(err) {
            RenderError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::WriteZero),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_other_xml_errors_kept() {
        let err = quick_xml::Error::UnexpectedEof("svg".to_string());
        assert!(matches!(RenderError::from(err), RenderError::Xml(_)));
    }
}
