//! Host bridge - JSON-RPC adapter between a page host and the renderer
//!
//! The host hands over footprint documents and raw input events; the bridge
//! keeps one surface and answers with render results, viewport state, scene
//! snapshots or SVG.
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Bridge state (surface, document, controller)
//! - `util` - Parameter decoding
//! - `handlers` - Request handlers and dispatch

pub mod handlers;
pub mod protocol;
pub mod state;
pub mod util;

pub use handlers::dispatch;
pub use protocol::{Request, Response, ErrorResponse, error_codes};
pub use state::HostState;
