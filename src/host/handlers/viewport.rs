//! Pointer, wheel and resize handlers

use crate::host::protocol::{error_codes, Response};
use crate::host::state::HostState;
use crate::host::util::parse_params;
use crate::surface::RenderSurface;
use crate::viewport::{EventDisposition, PointerEvent, WheelEvent};
use serde::Deserialize;
use serde_json::json;

fn viewport_state(state: &HostState, id: Option<serde_json::Value>) -> Response {
    Response::from_serializable(id, &state.controller.state(&state.surface))
}

/// Handle PointerDown request - anchor a pan at a view-pixel position
pub fn handle_pointer_down(
    state: &mut HostState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let event: PointerEvent = match parse_params(&id, params, "{x: number, y: number}") {
        Ok(e) => e,
        Err(response) => return response,
    };
    state.controller.pointer_down(event);
    viewport_state(state, id)
}

/// Handle PointerDrag request - pan the view after a PointerDown
pub fn handle_pointer_drag(
    state: &mut HostState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let event: PointerEvent = match parse_params(&id, params, "{x: number, y: number}") {
        Ok(e) => e,
        Err(response) => return response,
    };
    state.controller.pointer_drag(&mut state.surface, event);
    viewport_state(state, id)
}

/// Handle Wheel request - zoom by the wheel delta
pub fn handle_wheel(
    state: &mut HostState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let event: WheelEvent = match parse_params(&id, params, "{delta_y: number}") {
        Ok(e) => e,
        Err(response) => return response,
    };
    let disposition = state.controller.wheel(&mut state.surface, event);
    Response::success(id, json!({
        "scale": state.surface.view().zoom(),
        "consumed": disposition == EventDisposition::Consumed,
    }))
}

/// Handle Resize request - new viewport size in pixels
pub fn handle_resize(
    state: &mut HostState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct ResizeParams {
        width: f64,
        height: f64,
    }

    let params: ResizeParams = match parse_params(&id, params, "{width: number, height: number}") {
        Ok(p) => p,
        Err(response) => return response,
    };

    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(params.width) || !valid(params.height) {
        return Response::error(id, error_codes::INVALID_PARAMS,
            format!("Invalid viewport size {}x{}", params.width, params.height));
    }

    state.surface.view_mut().resize(params.width, params.height);
    viewport_state(state, id)
}

/// Handle GetViewport request
pub fn handle_get_viewport(state: &HostState, id: Option<serde_json::Value>) -> Response {
    viewport_state(state, id)
}
