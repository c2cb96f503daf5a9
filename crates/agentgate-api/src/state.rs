//! Application state.

use std::sync::Arc;

use tracing::info;

use agentgate_config::Config;
use agentgate_protocols::ResponsesProvider;
use agentgate_provider_openai::{DEFAULT_BASE_URL, OpenAIProvider};
use agentgate_runtime::{AgentDefinitionStore, AgentRunner, ExecutionEngine, StubResolver};

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub runner: Arc<AgentRunner>,
}

impl AppState {
    pub fn new(runner: AgentRunner) -> Self {
        Self {
            runner: Arc::new(runner),
        }
    }

    /// Wire the definition store, stub resolver and OpenAI provider from
    /// configuration.
    pub fn from_config(config: &Config) -> Self {
        let openai = config.openai();
        let base_url = openai.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let provider: Arc<dyn ResponsesProvider> =
            Arc::new(OpenAIProvider::with_url(openai.api_key, base_url));

        Self::with_provider(config, provider)
    }

    /// Like [`AppState::from_config`] with an explicit upstream provider.
    pub fn with_provider(config: &Config, provider: Arc<dyn ResponsesProvider>) -> Self {
        let definitions = Arc::new(AgentDefinitionStore::new(
            &config.agents.config_dir,
            &config.agents.default_model,
            config.agents.cache_capacity,
        ));
        let stubs = StubResolver::new(config.stub.enabled, config.stub_dir());

        info!(
            "Agent definitions from {}, stub mode {}",
            config.agents.config_dir.display(),
            if stubs.is_enabled() { "on" } else { "off" }
        );

        Self::new(AgentRunner::new(stubs, definitions, ExecutionEngine::new(provider)))
    }
}
