//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

mod env;

pub use env::*;

/// Provider key of the hosted completion service.
pub const OPENAI_PROVIDER: &str = "openai";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub agents: AgentsConfig,

    #[serde(default)]
    pub stub: StubConfig,

    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Directory holding stub fixtures; defaults to the agent definition
    /// directory.
    pub fn stub_dir(&self) -> PathBuf {
        self.stub
            .dir
            .clone()
            .unwrap_or_else(|| self.agents.config_dir.clone())
    }

    /// Settings of the hosted completion service.
    pub fn openai(&self) -> ProviderConfig {
        self.providers
            .get(OPENAI_PROVIDER)
            .cloned()
            .unwrap_or_default()
    }

    fn openai_mut(&mut self) -> &mut ProviderConfig {
        self.providers
            .entry(OPENAI_PROVIDER.to_string())
            .or_default()
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Agent definition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// Directory holding one `<agent_name>.yml` definition per agent.
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Model used when a definition does not name one.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Maximum number of cached definitions.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            default_model: default_model(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("config/agents")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_cache_capacity() -> usize {
    32
}

/// Stub mode configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StubConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Upstream provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub base_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write daily-rotated log files here in addition to the console.
    #[serde(default)]
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
