//! # agentgate API
//!
//! HTTP surface of the gateway.
//!
//! ```text
//! POST /agents/{agent_name}/run   run an agent, JSON in / JSON out
//! GET  /livez                     liveness probe
//! ```
//!
//! Every request is handed to the shared [`AgentRunner`]; failures are
//! rendered as `{"detail": "..."}` bodies.
//!
//! [`AgentRunner`]: agentgate_runtime::AgentRunner

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::create_router;
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
