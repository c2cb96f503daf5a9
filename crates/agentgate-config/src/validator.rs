//! Configuration validation.

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_agents(config, &mut result);
        Self::validate_stub(config, &mut result);
        Self::validate_providers(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_agents(config: &Config, result: &mut ValidationResult) {
        if config.agents.default_model.trim().is_empty() {
            result.add_error(ValidationError::new(
                "agents.default_model",
                "Default model cannot be empty",
            ));
        }

        if config.agents.cache_capacity == 0 {
            result.add_error(ValidationError::new(
                "agents.cache_capacity",
                "cache_capacity must be greater than 0",
            ));
        }

        if !config.agents.config_dir.is_dir() {
            result.add_warning(ValidationWarning::new(
                "agents.config_dir",
                format!(
                    "Agent definition directory does not exist: {}",
                    config.agents.config_dir.display()
                ),
            ));
        }
    }

    fn validate_stub(config: &Config, result: &mut ValidationResult) {
        if config.stub.enabled && !config.stub_dir().is_dir() {
            result.add_warning(ValidationWarning::new(
                "stub.dir",
                format!(
                    "Stub directory does not exist, every run will go upstream: {}",
                    config.stub_dir().display()
                ),
            ));
        }
    }

    fn validate_providers(config: &Config, result: &mut ValidationResult) {
        for (name, provider) in &config.providers {
            if let Some(ref url) = provider.base_url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    result.add_error(ValidationError::new(
                        format!("providers.{}.base_url", name),
                        "base_url must start with http:// or https://",
                    ));
                }
            }
        }

        if !config.stub.enabled && config.openai().api_key.is_none() {
            result.add_warning(ValidationWarning::new(
                "providers.openai.api_key",
                "API key is not set, live runs will fail until OPENAI_API_KEY is provided",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
