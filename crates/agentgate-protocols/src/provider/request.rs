//! Streaming request types.

use serde::{Deserialize, Serialize};

/// Parameters of one streaming execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRequest {
    /// Model identifier the upstream service should run.
    pub model: String,

    /// Fully composed prompt.
    pub input: String,
}

impl ResponseRequest {
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
        }
    }
}
