//! Upstream provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Stream error: {0}")]
    StreamError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Upstream run failed: {0}")]
    Remote(String),
}

impl ProviderError {
    /// Build an API error from an HTTP status and a raw response body.
    ///
    /// Prefers the `error.message` field of a JSON error envelope and falls
    /// back to the body text.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| body.to_string());

        if status == 401 {
            return ProviderError::AuthenticationFailed(message);
        }
        ProviderError::ApiError { status, message }
    }
}
