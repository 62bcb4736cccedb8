//! Frame export handlers

use crate::export::export_svg;
use crate::host::protocol::{error_codes, Response};
use crate::host::state::HostState;
use serde_json::json;

use super::no_document;

/// Handle ExportSvg request - current frame as an SVG document
pub fn handle_export_svg(state: &HostState, id: Option<serde_json::Value>) -> Response {
    if !state.has_document() {
        return no_document(id);
    }

    match export_svg(&state.surface) {
        Ok(svg) => Response::success(id, json!({ "svg": svg })),
        Err(e) => Response::error(id, error_codes::EXPORT_FAILED, format!("SVG export failed: {}", e)),
    }
}
