//! Stub fixtures.
//!
//! When stub mode is on, `<stub_dir>/<agent_name>.json` short-circuits the
//! upstream call. Fixtures are operator-controlled test data: a missing
//! fixture falls through to live execution, a broken one is a hard failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;
use thiserror::Error;
use tracing::{error, info};

use crate::definition::is_valid_agent_name;
use crate::types::RunResponse;

/// Stub fixture errors.
#[derive(Debug, Error)]
pub enum StubError {
    #[error("Stub response unavailable")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Stub response invalid")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves canned responses from the stub directory.
#[derive(Debug, Clone)]
pub struct StubResolver {
    enabled: bool,
    stub_dir: PathBuf,
}

impl StubResolver {
    pub fn new(enabled: bool, stub_dir: impl Into<PathBuf>) -> Self {
        Self {
            enabled,
            stub_dir: stub_dir.into(),
        }
    }

    /// A resolver that never serves fixtures.
    pub fn disabled() -> Self {
        Self::new(false, PathBuf::new())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stub_dir(&self) -> &Path {
        &self.stub_dir
    }

    pub fn fixture_path(&self, agent_name: &str) -> PathBuf {
        self.stub_dir.join(format!("{agent_name}.json"))
    }

    /// Canned response for `agent_name`, or `None` to fall through.
    pub fn try_stub(&self, agent_name: &str) -> Result<Option<RunResponse>, StubError> {
        if !self.enabled || !is_valid_agent_name(agent_name) {
            return Ok(None);
        }

        let path = self.fixture_path(agent_name);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(|source| {
            error!("Failed to read stub file {}: {}", path.display(), source);
            StubError::Unreadable {
                path: path.clone(),
                source,
            }
        })?;

        let payload: Value = serde_json::from_str(&raw).map_err(|source| {
            error!("Stub file {} contains invalid JSON: {}", path.display(), source);
            StubError::Invalid {
                path: path.clone(),
                source,
            }
        })?;

        let response = Self::render(agent_name, payload, raw).map_err(|source| StubError::Invalid {
            path: path.clone(),
            source,
        })?;

        info!(
            "Serving stubbed agent response for '{}' using {}",
            agent_name,
            path.display()
        );
        Ok(Some(response))
    }

    fn render(agent_name: &str, payload: Value, raw: String) -> Result<RunResponse, serde_json::Error> {
        let synthesized = format!("stub-{agent_name}");

        match payload {
            Value::Object(mut object) => {
                let run_id = match object.get("run_id").and_then(truthy_run_id) {
                    Some(run_id) => run_id,
                    None => {
                        object.insert("run_id".to_string(), Value::String(synthesized.clone()));
                        synthesized
                    }
                };
                let output_text = to_spaced_json(&Value::Object(object))?;
                Ok(RunResponse::new(output_text, run_id))
            }
            _ => Ok(RunResponse::new(raw, synthesized)),
        }
    }
}

/// The fixture's own `run_id` when it is truthy.
///
/// Null, `false`, zero, and empty strings, arrays or objects do not count.
/// Strings are used verbatim; other values are rendered as JSON text, so
/// `true` becomes `"true"` (not a capitalized `"True"`).
fn truthy_run_id(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// JSON with `", "` and `": "` separators, key order preserved, non-ASCII
/// left unescaped.
fn to_spaced_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
#[path = "stub_tests.rs"]
mod tests;
