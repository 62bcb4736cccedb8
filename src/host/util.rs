//! Request parameter helpers

use super::protocol::{error_codes, Response};
use serde::de::DeserializeOwned;

/// Decode `params` into `T`, or build the INVALID_PARAMS response naming
/// the `expected` shape
pub fn parse_params<T: DeserializeOwned>(
    id: &Option<serde_json::Value>,
    params: Option<serde_json::Value>,
    expected: &str,
) -> Result<T, Response> {
    params
        .and_then(|p| serde_json::from_value(p).ok())
        .ok_or_else(|| Response::error(id.clone(), error_codes::INVALID_PARAMS,
            format!("Invalid params: expected {}", expected)))
}
