//! Run error taxonomy.

use agentgate_protocols::ProviderError;
use thiserror::Error;

use crate::definition::AgentConfigError;
use crate::stub::StubError;

/// Failure of one agent run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The request itself is unusable.
    #[error("{0}")]
    InvalidRequest(String),

    /// No definition exists for the agent.
    #[error("No agent definition found for '{0}'")]
    AgentNotFound(String),

    /// A definition exists but is malformed.
    #[error(transparent)]
    InvalidAgentDefinition(AgentConfigError),

    /// A stub fixture exists but cannot be served.
    #[error(transparent)]
    StubUnavailable(#[from] StubError),

    /// The upstream streaming call failed.
    #[error(transparent)]
    UpstreamFailure(#[from] ProviderError),
}

impl From<AgentConfigError> for RunError {
    fn from(err: AgentConfigError) -> Self {
        match err {
            AgentConfigError::NotFound(name) => RunError::AgentNotFound(name),
            other => RunError::InvalidAgentDefinition(other),
        }
    }
}
