//! Handler module declarations and request dispatch

pub mod document;
pub mod export;
pub mod viewport;

pub use document::*;
pub use export::*;
pub use viewport::*;

use super::protocol::{error_codes, Request, Response};
use super::state::HostState;
use tracing::debug;

/// Route one request to its handler
pub fn dispatch(state: &mut HostState, request: Request) -> Response {
    debug!("Handling {}", request.method);
    match request.method.as_str() {
        "Render" => handle_render(state, request.id, request.params),
        "Redraw" => handle_redraw(state, request.id),
        "GetScene" => handle_get_scene(state, request.id),
        "PointerDown" => handle_pointer_down(state, request.id, request.params),
        "PointerDrag" => handle_pointer_drag(state, request.id, request.params),
        "Wheel" => handle_wheel(state, request.id, request.params),
        "Resize" => handle_resize(state, request.id, request.params),
        "GetViewport" => handle_get_viewport(state, request.id),
        "ExportSvg" => handle_export_svg(state, request.id),
        _ => Response::error(request.id, error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method)),
    }
}

pub(crate) fn no_document(id: Option<serde_json::Value>) -> Response {
    Response::error(id, error_codes::NO_DOCUMENT,
        "No document rendered. Call Render first.".to_string())
}
