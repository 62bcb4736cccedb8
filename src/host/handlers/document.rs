//! Document rendering handlers

use crate::draw::parsing::document_from_value;
use crate::host::protocol::{error_codes, Response};
use crate::host::state::HostState;
use crate::host::util::parse_params;
use crate::viewport::ViewportState;
use crate::draw::geometry::SceneItem;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::no_document;

#[derive(Debug, Serialize)]
struct RenderResult<'a> {
    unsupported: Vec<&'a str>,
    item_count: usize,
    last_edit_ms: Option<u64>,
    name: Option<&'a str>,
}

fn render_result(state: &HostState) -> RenderResult<'_> {
    let document = state.document.as_ref();
    RenderResult {
        unsupported: state.unsupported.iter().map(String::as_str).collect(),
        item_count: state.surface.items().len(),
        last_edit_ms: document.and_then(|d| d.last_edit_millis()),
        name: document.and_then(|d| d.name.as_deref()),
    }
}

/// Handle Render request - decode a document, store it and draw it
pub fn handle_render(
    state: &mut HostState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct RenderParams {
        document: serde_json::Value,
    }

    let params: RenderParams = match parse_params(&id, params, "{document: object}") {
        Ok(p) => p,
        Err(response) => return response,
    };

    let document = match document_from_value(params.document) {
        Ok(doc) => doc,
        Err(e) => {
            return Response::error(id, error_codes::INVALID_PARAMS, format!("Invalid document: {}", e));
        }
    };

    info!(
        "Rendering {} ({} graphics, {} pads)",
        document.name.as_deref().unwrap_or("unnamed footprint"),
        document.graphics.len(),
        document.pads.len()
    );
    state.load(document);

    Response::from_serializable(id, &render_result(state))
}

/// Handle Redraw request - rebuild the frame from the stored document
pub fn handle_redraw(state: &mut HostState, id: Option<serde_json::Value>) -> Response {
    if !state.redraw() {
        return no_document(id);
    }
    Response::from_serializable(id, &render_result(state))
}

/// Handle GetScene request - current frame plus viewport
pub fn handle_get_scene(state: &HostState, id: Option<serde_json::Value>) -> Response {
    #[derive(Serialize)]
    struct SceneSnapshot<'a> {
        items: &'a [SceneItem],
        viewport: ViewportState,
    }

    if !state.has_document() {
        return no_document(id);
    }

    let snapshot = SceneSnapshot {
        items: state.surface.items(),
        viewport: state.controller.state(&state.surface),
    };
    Response::from_serializable(id, &snapshot)
}
