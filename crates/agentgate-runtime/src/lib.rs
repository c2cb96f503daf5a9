//! # agentgate Runtime
//!
//! The request pipeline behind `POST /agents/{agent_name}/run`:
//!
//! ```text
//! RunRequest ──► StubResolver ──(fixture)──────────────────────► RunResponse
//!                     │
//!                     └─(none)─► AgentDefinitionStore ─► ExecutionEngine ─► RunResponse
//!                                   (LRU cached)            (spawned task,
//!                                                            streaming upstream)
//! ```
//!
//! - [`AgentDefinitionStore`] loads and memoizes per-agent definitions.
//! - [`StubResolver`] serves canned fixtures when stub mode is enabled.
//! - [`ExecutionEngine`] drives one streaming upstream call to completion.
//! - [`AgentRunner`] orchestrates the above and classifies failures as [`RunError`].

pub mod definition;
pub mod engine;
pub mod error;
pub mod mock_provider;
pub mod runner;
pub mod stub;
pub mod types;

pub use definition::{AgentConfig, AgentConfigError, AgentDefinitionStore, DEFINITION_EXTENSIONS};
pub use engine::{ExecutionEngine, NO_TEXT_PLACEHOLDER, compose_prompt, extract_text};
pub use error::RunError;
pub use runner::AgentRunner;
pub use stub::{StubError, StubResolver};
pub use types::{RunRequest, RunResponse};
