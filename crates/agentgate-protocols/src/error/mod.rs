//! Error types for the agentgate protocol layer.

mod provider;

pub use provider::*;
