//! Environment overrides.

use std::path::PathBuf;

use super::Config;
use crate::error::ConfigError;
use crate::loader::ConfigLoader;

/// Values accepted as "on" for boolean switches.
const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];

/// Interpret a boolean switch from the environment.
pub fn is_truthy_flag(value: &str) -> bool {
    TRUTHY.contains(&value.trim().to_lowercase().as_str())
}

impl Config {
    /// Apply the process environment on top of the file configuration.
    pub fn apply_process_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Recognized variables: `BACKEND_HOST`, `BACKEND_PORT`, `OPENAI_MODEL`,
    /// `STUB`, `AGENT_STUB_DIR`, `AGENT_CONFIG_DIR`, `OPENAI_API_KEY`,
    /// `OPENAI_BASE_URL`, `LOG_LEVEL`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("BACKEND_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BACKEND_PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "BACKEND_PORT".to_string(),
                message: format!("'{}' is not a valid port", port),
            })?;
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.agents.default_model = model;
        }
        if let Some(flag) = lookup("STUB") {
            self.stub.enabled = is_truthy_flag(&flag);
        }
        if let Some(dir) = lookup("AGENT_CONFIG_DIR") {
            self.agents.config_dir = PathBuf::from(ConfigLoader::expand_path(&dir));
        }
        if let Some(dir) = lookup("AGENT_STUB_DIR") {
            self.stub.dir = Some(PathBuf::from(ConfigLoader::expand_path(&dir)));
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.openai_mut().api_key = Some(key);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.openai_mut().base_url = Some(url);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        Ok(())
    }
}
