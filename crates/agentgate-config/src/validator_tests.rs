use super::*;
use crate::schema::ProviderConfig;

fn valid_config(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.agents.config_dir = dir.to_path_buf();
    config.providers.insert(
        "openai".to_string(),
        ProviderConfig {
            api_key: Some("sk-test".to_string()),
            base_url: None,
        },
    );
    config
}

#[test]
fn test_validate_complete_config() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigValidator::validate(&valid_config(dir.path()));
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_port() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = valid_config(dir.path());
    config.server.port = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.port"));
}

#[test]
fn test_validate_empty_default_model() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = valid_config(dir.path());
    config.agents.default_model = "  ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "agents.default_model"));
}

#[test]
fn test_validate_zero_cache_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = valid_config(dir.path());
    config.agents.cache_capacity = 0;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "agents.cache_capacity"));
}

#[test]
fn test_validate_missing_agent_dir_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = valid_config(dir.path());
    config.agents.config_dir = dir.path().join("missing");

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "agents.config_dir"));
}

#[test]
fn test_validate_missing_api_key_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = valid_config(dir.path());
    config.providers.clear();

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.path == "providers.openai.api_key"));
}

#[test]
fn test_validate_stub_mode_without_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = valid_config(dir.path());
    config.providers.clear();
    config.stub.enabled = true;

    let result = ConfigValidator::validate(&config);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_base_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = valid_config(dir.path());
    config.providers.insert(
        "openai".to_string(),
        ProviderConfig {
            api_key: Some("key".to_string()),
            base_url: Some("invalid-url".to_string()),
        },
    );

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors[0].to_string().contains("base_url"));
}
