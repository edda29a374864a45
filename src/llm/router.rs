use std::sync::Arc;
use std::time::Duration;
use crate::config::{ProviderConfig, QuipsterConfig};
use crate::errors::QuipsterError;
use super::provider::CompletionProvider;
use super::openrouter::{OpenRouterProvider, OPENROUTER_BASE_URL};
use tracing::info;

/// Build the completion provider described by `config.provider`.
pub fn create_provider(config: &QuipsterConfig) -> Result<Arc<dyn CompletionProvider>, QuipsterError> {
    let provider = &config.provider;
    let timeout = Duration::from_secs(provider.timeout_secs);
    let api_key = config.resolve_api_key()?;

    let base_url = resolve_base_url(provider)?;

    info!(provider = %provider.name, base_url = %base_url, timeout_secs = provider.timeout_secs, "Creating completion provider");

    let client = OpenRouterProvider::with_base_url(&api_key, &base_url, timeout)?
        .with_referer(provider.referer.as_deref());
    Ok(Arc::new(client))
}

fn resolve_base_url(provider: &ProviderConfig) -> Result<String, QuipsterError> {
    match provider.name.as_str() {
        "openrouter" => Ok(provider
            .base_url
            .clone()
            .unwrap_or_else(|| OPENROUTER_BASE_URL.to_string())),
        // Any chat-completions compatible endpoint, e.g. a local gateway
        "openai-compatible" => provider.base_url.clone().ok_or_else(|| {
            QuipsterError::Config("provider.base_url is required for openai-compatible providers".into())
        }),
        other => Err(QuipsterError::Config(format!("Unknown LLM provider: {}", other))),
    }
}
