//! Upstream provider trait definition.

use async_trait::async_trait;

use super::{ResponseRequest, ResponseSession};
use crate::error::ProviderError;

/// Core trait for streaming completion providers.
#[async_trait]
pub trait ResponsesProvider: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Open a streaming session for `(model, input)`.
    ///
    /// The returned session yields the upstream events in delivery order.
    async fn open_stream(&self, request: ResponseRequest) -> Result<ResponseSession, ProviderError>;
}
