//! OpenAI Responses API provider implementation.

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, warn};

use agentgate_protocols::{
    EventStream, ProviderError, ResponseRequest, ResponseSession, ResponsesProvider, StreamEvent,
};

use crate::api::ApiRequest;
use crate::parser::{SseLine, parse_line};

/// Public OpenAI endpoint, without the `/responses` path.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Streaming client for `POST {base_url}/responses`.
pub struct OpenAIProvider {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAIProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create provider with a custom base URL (for OpenAI-compatible APIs).
    pub fn with_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::AuthenticationFailed("OPENAI_API_KEY is not set".to_string()))
    }

    async fn send_request(
        &self,
        api_key: &str,
        api_request: &ApiRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Accept", "text/event-stream")
            .json(api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            warn!("responses api returned {}", status);
            return Err(ProviderError::from_api_response(status, &text));
        }

        Ok(response)
    }
}

impl std::fmt::Debug for OpenAIProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Split an SSE body into events. Stops after `[DONE]` or the first error.
fn decode_events(response: reqwest::Response) -> EventStream {
    Box::pin(async_stream::stream! {
        let mut bytes = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        let mut finished = false;

        while !finished {
            let Some(chunk) = bytes.next().await else {
                break;
            };
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    yield Err(ProviderError::StreamError(e.to_string()));
                    finished = true;
                    continue;
                }
            };
            buffer.extend_from_slice(&chunk);

            while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                let raw: Vec<u8> = buffer.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&raw[..pos]).into_owned();
                match parse_line(&line) {
                    Ok(SseLine::Event(event)) => yield Ok(event),
                    Ok(SseLine::Skip) => {}
                    Ok(SseLine::Done) => {
                        finished = true;
                        break;
                    }
                    Err(e) => {
                        yield Err(e);
                        finished = true;
                        break;
                    }
                }
            }
        }

        // Trailing line without a newline terminator.
        if !finished && !buffer.is_empty() {
            let line = String::from_utf8_lossy(&buffer).into_owned();
            match parse_line(&line) {
                Ok(SseLine::Event(event)) => yield Ok(event),
                Ok(_) => {}
                Err(e) => yield Err(e),
            }
        }
    })
}

#[async_trait]
impl ResponsesProvider for OpenAIProvider {
    fn id(&self) -> &str {
        "openai"
    }

    async fn open_stream(&self, request: ResponseRequest) -> Result<ResponseSession, ProviderError> {
        let api_key = self.api_key()?;
        let api_request = ApiRequest {
            model: request.model,
            input: request.input,
            stream: true,
        };
        debug!("opening response stream for model {}", api_request.model);

        let response = self.send_request(api_key, &api_request).await?;
        let mut events = decode_events(response);

        // The first event normally carries the created response and its id.
        let first = events.next().await;
        let initial = match &first {
            Some(Ok(StreamEvent::Created { response })) => Some(response.clone()),
            _ => None,
        };
        let events: EventStream = Box::pin(futures::stream::iter(first).chain(events));

        Ok(ResponseSession::new(initial, events))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
