//! Upstream execution engine.

use std::sync::Arc;

use agentgate_protocols::{ProviderError, ResponseObject, ResponseRequest, ResponsesProvider, StreamEvent};
use tracing::{debug, info};

use crate::definition::AgentConfig;
use crate::types::RunResponse;

/// Returned in place of an empty extraction.
pub const NO_TEXT_PLACEHOLDER: &str = "(no text output)";

/// Frame the user message behind the agent's instructions.
pub fn compose_prompt(instructions: &str, message: &str) -> String {
    format!("{instructions}\n\nUser:\n{message}")
}

/// Extract the run's text from the final response.
///
/// Precedence: the aggregated `output_text` when non-empty, then the first
/// content block of the first output item, then the empty string.
pub fn extract_text(response: &ResponseObject) -> String {
    match response.output_text.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => response.first_block_text().unwrap_or_default().to_string(),
    }
}

/// Drives one streaming upstream call per run.
#[derive(Clone)]
pub struct ExecutionEngine {
    provider: Arc<dyn ResponsesProvider>,
}

impl ExecutionEngine {
    pub fn new(provider: Arc<dyn ResponsesProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &str {
        self.provider.id()
    }

    /// Run `message` against `config` and collect the final text and run id.
    ///
    /// Events are consumed in delivery order. The first run id seen wins.
    pub async fn execute(&self, config: &AgentConfig, message: &str) -> Result<RunResponse, ProviderError> {
        let request = ResponseRequest::new(&config.model, compose_prompt(&config.instructions, message));
        let mut session = self.provider.open_stream(request).await?;

        let mut run_id = session
            .initial_response()
            .map(|response| response.id.clone())
            .unwrap_or_default();

        while let Some(event) = session.next_event().await {
            let event = event?;
            match &event {
                StreamEvent::OutputTextDelta { delta } => {
                    if !delta.is_empty() {
                        info!("agent delta: {}", delta);
                    }
                }
                StreamEvent::Failed { message } => return Err(ProviderError::Remote(message.clone())),
                StreamEvent::Created { response } | StreamEvent::InProgress { response } => {
                    if run_id.is_empty() {
                        run_id = response.id.clone();
                    }
                    info!("agent event: {}", event.kind());
                }
                _ => info!("agent event: {}", event.kind()),
            }
        }

        let final_response = session.final_response().await?;
        if run_id.is_empty() {
            run_id = final_response.id.clone();
        }

        let mut output_text = extract_text(&final_response);
        if output_text.is_empty() {
            output_text = NO_TEXT_PLACEHOLDER.to_string();
        }
        debug!("result {}", output_text);

        Ok(RunResponse { output_text, run_id })
    }
}

impl std::fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("provider", &self.provider.id())
            .finish()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
