pub mod credentials;
pub mod parser;
pub mod schema;
pub mod types;

pub use types::*;
pub use parser::{load_config, parse_config};

use crate::errors::QuipsterError;
use crate::llm::catalog;

impl QuipsterConfig {
    /// Provider API key from config, or from the provider's conventional env var.
    pub fn resolve_api_key(&self) -> Result<String, QuipsterError> {
        let env_var = catalog::get_provider(&self.provider.name)
            .map(|p| p.env_var)
            .unwrap_or("");
        credentials::resolve_with_fallback(self.provider.api_key.as_deref(), env_var)
            .ok_or_else(|| {
                QuipsterError::Config(format!(
                    "No API key for provider '{}'; set provider.api_key or {}",
                    self.provider.name,
                    if env_var.is_empty() { "provide one in the config file" } else { env_var }
                ))
            })
    }
}
