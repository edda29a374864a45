use async_trait::async_trait;
use crate::errors::QuipsterError;
use super::types::{Completion, CompletionRequest};

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// One chat completion against `request.model`. Implementations must not
    /// retry internally; fallback is the caller's decision.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, QuipsterError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
