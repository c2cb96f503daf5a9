//! # agentgate Config
//!
//! Process-wide configuration: read once at startup from an optional TOML
//! file plus the process environment, never reloaded.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
