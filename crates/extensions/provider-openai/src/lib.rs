//! OpenAI Responses API provider for agentgate.

mod api;
mod parser;
mod provider;

pub use provider::{DEFAULT_BASE_URL, OpenAIProvider};
