//! # agentgate Protocols
//!
//! Contracts shared between the agentgate runtime and the upstream model
//! providers. Contains only interface definitions and wire schema - no
//! network code.
//!
//! ## Core Types
//!
//! - [`ResponsesProvider`] - Trait for streaming completion providers
//! - [`ResponseSession`] - One open streaming execution
//! - [`StreamEvent`] - An ordered event delivered by the upstream service
//! - [`ResponseObject`] - The response schema used for run id and text extraction

pub mod error;
pub mod provider;

pub use error::ProviderError;
pub use provider::{
    ContentBlock, EventStream, OutputItem, ResponseErrorDetail, ResponseObject, ResponseRequest,
    ResponseSession, ResponsesProvider, StreamEvent,
};
