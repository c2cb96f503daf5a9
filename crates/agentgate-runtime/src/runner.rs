//! Agent run orchestration.
//!
//! Per request: `START -> STUB_CHECK -> (STUBBED | CONFIG_LOOKUP) ->
//! (CONFIG_OK -> EXECUTING | CONFIG_FAILED) -> (DONE | FAILED)`. Nothing is
//! retried.

use std::sync::Arc;

use agentgate_protocols::ProviderError;
use tracing::{error, info, warn};

use crate::definition::AgentDefinitionStore;
use crate::engine::ExecutionEngine;
use crate::error::RunError;
use crate::stub::StubResolver;
use crate::types::{RunRequest, RunResponse};

/// Runs agents: stub first, then definition lookup, then upstream execution.
#[derive(Debug, Clone)]
pub struct AgentRunner {
    stubs: StubResolver,
    definitions: Arc<AgentDefinitionStore>,
    engine: ExecutionEngine,
}

impl AgentRunner {
    pub fn new(stubs: StubResolver, definitions: Arc<AgentDefinitionStore>, engine: ExecutionEngine) -> Self {
        Self {
            stubs,
            definitions,
            engine,
        }
    }

    pub fn definitions(&self) -> &AgentDefinitionStore {
        &self.definitions
    }

    pub fn stubs(&self) -> &StubResolver {
        &self.stubs
    }

    /// Run `agent_name` against `request`.
    ///
    /// The upstream call executes in its own task; the caller is suspended
    /// until it completes. If the caller goes away first, the task still
    /// drains the stream and its result is discarded.
    pub async fn run(&self, agent_name: &str, request: &RunRequest) -> Result<RunResponse, RunError> {
        if request.message.is_empty() {
            return Err(RunError::InvalidRequest("message must not be empty".to_string()));
        }

        info!(agent = agent_name, user_id = ?request.user_id, "Agent run request");

        if let Some(stubbed) = self.stubs.try_stub(agent_name)? {
            return Ok(stubbed);
        }

        let config = self.definitions.resolve(agent_name).map_err(|e| {
            warn!(agent = agent_name, "Agent definition lookup failed: {}", e);
            RunError::from(e)
        })?;

        let engine = self.engine.clone();
        let message = request.message.clone();
        let task = tokio::spawn(async move { engine.execute(&config, &message).await });

        let result = match task.await {
            Ok(result) => result,
            Err(join_error) => Err(ProviderError::StreamError(format!(
                "execution task ended abnormally: {join_error}"
            ))),
        };

        match result {
            Ok(response) => {
                info!(agent = agent_name, run_id = %response.run_id, "Agent run completed");
                Ok(response)
            }
            Err(e) => {
                error!(agent = agent_name, "Agent run failed: {}", e);
                Err(RunError::UpstreamFailure(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
