//! Response schema and stream events.

use serde::{Deserialize, Serialize};

/// A response object as reported by the upstream service.
///
/// Every field is optional on the wire; missing collections deserialize as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    /// Upstream run identifier.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Output items in generation order.
    #[serde(default)]
    pub output: Vec<OutputItem>,

    /// Aggregated text of all `output_text` blocks, when the producer
    /// supplied or derived it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseErrorDetail>,
}

/// One output item of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One content block of an output item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Error detail attached to a failed response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ResponseErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl ResponseObject {
    /// Create a response object carrying only an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Concatenate the text of every `output_text` block of every `message`
    /// item, in order.
    pub fn aggregate_output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.kind.as_deref() == Some("message"))
            .flat_map(|item| item.content.iter())
            .filter(|block| block.kind.as_deref() == Some("output_text"))
            .filter_map(|block| block.text.as_deref())
            .collect()
    }

    /// Text of the first content block of the first output item.
    pub fn first_block_text(&self) -> Option<&str> {
        self.output
            .first()
            .and_then(|item| item.content.first())
            .and_then(|block| block.text.as_deref())
    }
}

/// One event delivered by the upstream service during a single execution.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// The response was created; carries the initial response object.
    Created { response: ResponseObject },
    /// The response is being generated.
    InProgress { response: ResponseObject },
    /// A partial text fragment.
    OutputTextDelta { delta: String },
    /// A text block finished.
    OutputTextDone { text: String },
    /// The response finished; carries the final response object.
    Completed { response: ResponseObject },
    /// The upstream reported a failure for this run.
    Failed { message: String },
    /// Any lifecycle event not interpreted by agentgate.
    Other { kind: String },
}

impl StreamEvent {
    /// Wire discriminant of this event.
    pub fn kind(&self) -> &str {
        match self {
            StreamEvent::Created { .. } => "response.created",
            StreamEvent::InProgress { .. } => "response.in_progress",
            StreamEvent::OutputTextDelta { .. } => "response.output_text.delta",
            StreamEvent::OutputTextDone { .. } => "response.output_text.done",
            StreamEvent::Completed { .. } => "response.completed",
            StreamEvent::Failed { .. } => "response.failed",
            StreamEvent::Other { kind } => kind.as_str(),
        }
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
