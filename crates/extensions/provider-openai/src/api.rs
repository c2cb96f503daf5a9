//! Responses API wire types.

use serde::{Deserialize, Serialize};

use agentgate_protocols::ResponseObject;

/// Streaming request body.
#[derive(Debug, Serialize)]
pub struct ApiRequest {
    pub model: String,
    pub input: String,
    pub stream: bool,
}

/// One server-sent event payload.
///
/// Only the fields agentgate interprets are modeled; everything else on the
/// wire is ignored.
#[derive(Debug, Deserialize)]
pub struct WireEvent {
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub response: Option<ResponseObject>,

    #[serde(default)]
    pub delta: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    /// Set on top-level `error` events.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}
