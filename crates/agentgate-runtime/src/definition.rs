//! Agent definition store.
//!
//! One YAML file per agent, named `<agent_name>.<ext>` with `ext` tried in
//! [`DEFINITION_EXTENSIONS`] order. Resolved definitions are memoized in a
//! bounded LRU cache for the lifetime of the store; a changed file is not
//! picked up until the store is rebuilt.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Definition file extensions, in lookup precedence.
pub const DEFINITION_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// A resolved agent definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name.
    pub name: String,

    /// Upstream model identifier.
    pub model: String,

    /// System instructions prepended to every user message.
    pub instructions: String,
}

/// On-disk shape of a definition file.
#[derive(Debug, Default, Deserialize)]
struct AgentDefinition {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    model: Option<String>,

    #[serde(default)]
    instructions: Option<String>,
}

/// Agent definition errors.
#[derive(Debug, Error)]
pub enum AgentConfigError {
    /// No definition file exists for the agent.
    #[error("No agent definition found for '{0}'")]
    NotFound(String),

    /// A definition file exists but cannot be used.
    #[error("Agent definition '{file}' {reason}")]
    InvalidDefinition { file: String, reason: String },
}

impl AgentConfigError {
    fn invalid(path: &Path, reason: impl Into<String>) -> Self {
        AgentConfigError::InvalidDefinition {
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            reason: reason.into(),
        }
    }
}

/// Whether `name` can be used as a file stem inside the definition
/// directory.
pub(crate) fn is_valid_agent_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Loads and memoizes agent definitions keyed by agent name.
pub struct AgentDefinitionStore {
    config_dir: PathBuf,
    default_model: String,
    cache: Mutex<LruCache<String, Arc<AgentConfig>>>,
}

impl AgentDefinitionStore {
    /// Create a store over `config_dir` holding at most `capacity` cached
    /// definitions.
    pub fn new(config_dir: impl Into<PathBuf>, default_model: impl Into<String>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            config_dir: config_dir.into(),
            default_model: default_model.into(),
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Number of cached definitions.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Resolve the definition of `agent_name`, loading it on first use.
    pub fn resolve(&self, agent_name: &str) -> Result<Arc<AgentConfig>, AgentConfigError> {
        if let Some(config) = self.cache.lock().get(agent_name).cloned() {
            return Ok(config);
        }

        // Loaded outside the lock; a concurrent first load of the same key
        // computes the same value.
        let config = Arc::new(self.load(agent_name)?);
        self.cache
            .lock()
            .put(agent_name.to_string(), Arc::clone(&config));
        debug!(agent = agent_name, model = %config.model, "Agent definition cached");
        Ok(config)
    }

    /// First existing definition file for `agent_name`.
    pub fn definition_path(&self, agent_name: &str) -> Option<PathBuf> {
        if !is_valid_agent_name(agent_name) {
            return None;
        }
        DEFINITION_EXTENSIONS
            .iter()
            .map(|ext| self.config_dir.join(format!("{agent_name}.{ext}")))
            .find(|candidate| candidate.is_file())
    }

    fn load(&self, agent_name: &str) -> Result<AgentConfig, AgentConfigError> {
        let path = self
            .definition_path(agent_name)
            .ok_or_else(|| AgentConfigError::NotFound(agent_name.to_string()))?;

        let raw = fs::read_to_string(&path).map_err(|e| {
            warn!("Failed to read agent definition {}: {}", path.display(), e);
            AgentConfigError::invalid(&path, format!("could not be read: {e}"))
        })?;

        let definition = Self::parse(&raw).map_err(|reason| AgentConfigError::invalid(&path, reason))?;

        let instructions = definition
            .instructions
            .ok_or_else(|| AgentConfigError::invalid(&path, "is missing 'instructions'"))?;

        Ok(AgentConfig {
            name: definition.name.unwrap_or_else(|| agent_name.to_string()),
            model: definition.model.unwrap_or_else(|| self.default_model.clone()),
            instructions,
        })
    }

    fn parse(raw: &str) -> Result<AgentDefinition, String> {
        let value: serde_yml::Value = if raw.trim().is_empty() {
            serde_yml::Value::Null
        } else {
            serde_yml::from_str(raw).map_err(|e| format!("is not valid YAML: {e}"))?
        };

        match value {
            serde_yml::Value::Null => Ok(AgentDefinition::default()),
            serde_yml::Value::Mapping(_) => {
                serde_yml::from_value(value).map_err(|e| format!("is malformed: {e}"))
            }
            _ => Err("must be a mapping".to_string()),
        }
    }
}

impl std::fmt::Debug for AgentDefinitionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentDefinitionStore")
            .field("config_dir", &self.config_dir)
            .field("default_model", &self.default_model)
            .field("cached", &self.cached_len())
            .finish()
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
