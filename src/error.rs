use thiserror::Error;

/// Failures decoding a footprint document supplied by the host
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to decode footprint document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid edit timestamp \"{value}\": expected hexadecimal Unix seconds")]
    Timestamp { value: String },
}

/// Failures writing a rendered frame out as SVG
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write SVG: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("SVG output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
