//! Request and response payloads of an agent run.

use serde::{Deserialize, Serialize};

/// Input of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Optional user/session id. Logged, never interpreted.
    #[serde(default)]
    pub user_id: Option<String>,

    /// User message/input.
    pub message: String,
}

impl RunRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            user_id: None,
            message: message.into(),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    /// Aggregated text; never empty.
    pub output_text: String,

    /// Upstream run id, or `stub-<agent_name>` for synthesized stubs.
    pub run_id: String,
}

impl RunResponse {
    pub fn new(output_text: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self {
            output_text: output_text.into(),
            run_id: run_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_deserialize_minimal() {
        let req: RunRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(req.message, "hello");
        assert!(req.user_id.is_none());
    }

    #[test]
    fn test_run_request_deserialize_with_user() {
        let req: RunRequest =
            serde_json::from_str(r#"{"user_id": "u-1", "message": "hello"}"#).unwrap();
        assert_eq!(req, RunRequest::new("hello").with_user_id("u-1"));
    }

    #[test]
    fn test_run_request_requires_message() {
        let result = serde_json::from_str::<RunRequest>(r#"{"user_id": "u-1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_response_serialize() {
        let resp = RunResponse::new("hi", "resp_1");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"output_text": "hi", "run_id": "resp_1"}));
    }
}
